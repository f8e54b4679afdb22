//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal host and the tests both drive it through [`GameLoop`].

pub mod config;
pub mod direction;
pub mod driver;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use driver::{GameEvent, GameLoop, Snapshot};
pub use engine::{GameEngine, StepResult, TickOutcome};
pub use food::place_food;
pub use grid::{Grid, Position};
pub use snake::Snake;
pub use state::{CollisionType, GameState, RoundState};
