//! Error types for grid construction and input parsing.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GridError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A direction name that is not one of up/down/left/right.
    #[error("unknown direction: {0:?}")]
    UnknownDirection(String),

    #[error("grid is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A non-zero cell that is not a power of two.
    #[error("cell ({row}, {col}) holds {value}, which is not a tile value")]
    InvalidTile { row: usize, col: usize, value: u64 },

    #[error("grid size {size} is out of range ({min}..={max})")]
    SizeOutOfRange { size: usize, min: usize, max: usize },
}
