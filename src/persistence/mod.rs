//! High score persistence
//!
//! The game core only sees the [`HighScoreStore`] port. The terminal host plugs in a
//! [`JsonFileStore`]; tests use [`MemoryStore`].

pub mod high_score;

pub use high_score::{HighScoreStore, JsonFileStore, MemoryStore};
