//! Terminal 2048 (workspace facade crate).
//!
//! Re-exports the `tui_2048::{core,input,term,types}` API from the crates
//! under `crates/`, and holds the glue the binary needs: environment config,
//! log setup and the session controller.

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub mod config;
pub mod session;
pub mod telemetry;
