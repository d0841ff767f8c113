//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The playfield is a square grid whose side is fixed when a session starts:
//!
//! - **Default size**: 6x6
//! - **Valid sizes**: 2 through 16 (`MIN_BOARD_SIZE..=MAX_BOARD_SIZE`)
//! - **Coordinates**: `(row, col)`, row 0 at the top, col 0 on the left
//!
//! # Tile Spawning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_TWO_PROBABILITY` | 0.9 | Chance a spawned tile is a 2 |
//! | `SPAWN_TWO` | 2 | Common spawn value |
//! | `SPAWN_FOUR` | 4 | Rare spawn value |
//! | `INITIAL_TILES` | 2 | Tiles placed when a session starts |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, DEFAULT_BOARD_SIZE};
//!
//! // Parse from string (case-insensitive)
//! let dir = Direction::from_str("Up").unwrap();
//! assert_eq!(dir, Direction::Up);
//!
//! // Every direction is normalized to a left slide by rotating the grid
//! assert_eq!(Direction::Left.rotation_count(), 0);
//! assert_eq!(Direction::Up.rotation_count(), 3);
//! assert_eq!(Direction::Up.unwind_count(), 1);
//!
//! // Parse game action
//! let action = GameAction::from_str("moveDown").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Down));
//!
//! assert_eq!(DEFAULT_BOARD_SIZE, 6);
//! ```

/// Value of a single cell. `0` is empty, powers of two are tiles.
pub type Tile = u64;

/// Accumulated score.
pub type Score = u64;

/// Grid side length used when nothing else is configured.
pub const DEFAULT_BOARD_SIZE: usize = 6;

/// Smallest grid side a session may be configured with.
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest grid side. Also the capacity of the stack buffer used per row slide.
pub const MAX_BOARD_SIZE: usize = 16;

/// Probability that a spawned tile is a 2 (otherwise a 4).
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

pub const SPAWN_TWO: Tile = 2;
pub const SPAWN_FOUR: Tile = 4;

/// Largest tile a cell can hold. Doubling it would overflow, so two of
/// these never merge.
pub const MAX_TILE: Tile = 1 << 63;

/// Number of tiles placed on an empty grid when a session starts.
pub const INITIAL_TILES: usize = 2;

/// The four slide directions
///
/// Each direction maps to a number of 90° clockwise grid rotations that turn it
/// into a left slide:
/// - **Left**: 0
/// - **Down**: 1
/// - **Right**: 2
/// - **Up**: 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a stable order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts the plain names as well as the browser key names
    /// (`ArrowUp`, `ArrowLeft`, ...). Anything else is `None`; there is no
    /// fallback direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("ArrowRight"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("diagonal"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" | "u" | "arrowup" => Some(Direction::Up),
            "down" | "d" | "arrowdown" => Some(Direction::Down),
            "left" | "l" | "arrowleft" => Some(Direction::Left),
            "right" | "r" | "arrowright" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Clockwise quarter turns applied before sliding left.
    pub fn rotation_count(&self) -> u8 {
        match self {
            Direction::Left => 0,
            Direction::Down => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }

    /// Clockwise quarter turns that undo [`Direction::rotation_count`].
    pub fn unwind_count(&self) -> u8 {
        (4 - self.rotation_count()) % 4
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Move(Direction),
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// `moveUp`/`moveDown`/`moveLeft`/`moveRight` and `restart`
    /// (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        if lower == "restart" {
            return Some(GameAction::Restart);
        }
        lower
            .strip_prefix("move")
            .and_then(Direction::from_str)
            .map(GameAction::Move)
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Restart => "restart",
        }
    }
}
