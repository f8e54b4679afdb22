pub mod handler;

pub use handler::{InputHandler, KeyAction, on_direction_key};
