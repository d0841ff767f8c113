//! Core puzzle logic - pure, deterministic, and testable
//!
//! This crate contains the grid transformation engine for a sliding-tile
//! merge puzzle (a generalized "2048"). It has no dependencies on terminal
//! rendering or input handling, making it:
//!
//! - **Deterministic**: Same seed produces identical sessions
//! - **Testable**: Every rule is exercised headlessly
//! - **Portable**: Can run behind any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: N x N tile storage with exact 90° rotation
//! - [`slide`]: the single left-slide primitive (compact, merge, compact, pad)
//! - [`engine`]: [`GridEngine`], owning grid, score and the empty-tile cache
//! - [`rng`]: seeded 90/10 tile spawner
//! - [`snapshot`]: read-only state copies for renderers
//! - [`error`]: [`GridError`]
//!
//! # Rules
//!
//! - A move slides every tile toward one edge. Up, Down and Right are
//!   performed by rotating the grid, sliding left, and rotating back.
//! - Two equal tiles that meet merge into one tile of double value; the new
//!   value is added to the score. A tile merges at most once per move.
//! - A move that changes the grid spawns one tile (2 at 90%, 4 at 10%) on a
//!   random empty cell. A move that changes nothing spawns nothing.
//! - The game is over when the grid is full and no two neighbours match.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GridEngine;
//! use tui_2048_types::Direction;
//!
//! let mut engine = GridEngine::from_rows(&[[2u64, 2], [0, 0]], 7).unwrap();
//!
//! assert!(engine.apply_move(Direction::Left));
//! assert_eq!(engine.score(), 4);
//! assert_eq!(engine.cell(0, 0), Some(4));
//!
//! // Three cells were empty after the merge; one now holds the spawned tile.
//! assert_eq!(engine.empty_tiles().len(), 2);
//! assert!(!engine.is_terminal());
//! ```

pub mod engine;
pub mod error;
pub mod grid;
pub mod rng;
pub mod slide;
pub mod snapshot;

pub use tui_2048_types as types;

pub use engine::GridEngine;
pub use error::{GridError, Result};
pub use grid::Grid;
pub use rng::TileRng;
pub use slide::{slide_row_left, SlideOutcome};
pub use snapshot::GridSnapshot;
