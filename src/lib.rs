//! Grid Snake - a single-player snake game for the terminal
//!
//! This library provides:
//! - Core game logic and the fixed-rate driver (game module)
//! - High score persistence (persistence module)
//! - Terminal input mapping and rendering (input, render modules)
//! - The interactive terminal session (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod persistence;
pub mod render;
