//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It renders into a plain
//! framebuffer that is then flushed to a terminal backend, so the layout code
//! can be tested without a terminal.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Draw the grid as coloured boxes with the tile value centred
//! - Only rewrite cells that changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_style, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
