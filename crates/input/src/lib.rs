//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. 2048 moves
//! are discrete, so there is no auto-repeat handling here: one key press is
//! one move.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
