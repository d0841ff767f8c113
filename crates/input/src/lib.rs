//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Each key
//! press is one move; there is no auto-repeat handling because nothing in the
//! game is time-driven.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
