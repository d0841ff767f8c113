//! Session: the presentation-side controller around one `GridEngine`.
//!
//! The engine accepts moves on a finished grid (they simply change nothing);
//! gating play after game over is this layer's job.

use tracing::info;

use crate::config::GameConfig;
use crate::core::{GridEngine, GridError, GridSnapshot};
use crate::types::GameAction;

/// What an action did, so the caller knows whether to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The grid changed and play continues.
    Moved,
    /// Nothing could slide in that direction.
    Unchanged,
    /// The grid changed and no further move is possible.
    GameOver,
    /// The game is already over; the move was not attempted.
    Ignored,
    Restarted,
}

impl Outcome {
    pub fn needs_redraw(&self) -> bool {
        matches!(self, Outcome::Moved | Outcome::GameOver | Outcome::Restarted)
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    engine: GridEngine,
}

impl Session {
    /// Wrap an engine and place the opening tiles.
    pub fn new(mut engine: GridEngine) -> Self {
        engine.start();
        Self { engine }
    }

    /// Wrap an engine as-is, e.g. a position restored with `from_rows`.
    pub fn resume(engine: GridEngine) -> Self {
        Self { engine }
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, GridError> {
        Ok(Self::new(config.build_engine()?))
    }

    pub fn apply(&mut self, action: GameAction) -> Outcome {
        match action {
            GameAction::Move(direction) => {
                if self.engine.is_terminal() {
                    return Outcome::Ignored;
                }
                if !self.engine.apply_move(direction) {
                    return Outcome::Unchanged;
                }
                if self.engine.is_terminal() {
                    info!(score = self.engine.score(), moves = self.engine.moves(), "game over");
                    Outcome::GameOver
                } else {
                    Outcome::Moved
                }
            }
            GameAction::Restart => {
                self.engine.restart();
                Outcome::Restarted
            }
        }
    }

    pub fn is_over(&self) -> bool {
        self.engine.is_terminal()
    }

    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    pub fn snapshot_into(&self, out: &mut GridSnapshot) {
        self.engine.snapshot_into(out);
    }
}
