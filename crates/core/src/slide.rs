//! Row slide primitive.
//!
//! Every move is normalized into a left slide by rotating the grid first, so
//! this is the only place that compacts and merges tiles.

use arrayvec::ArrayVec;

use crate::types::{Score, Tile, MAX_BOARD_SIZE};

/// Result of sliding one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideOutcome {
    /// Row contents differ from what they were before the slide.
    pub changed: bool,
    /// Sum of the tiles produced by merges in this row.
    pub gained: Score,
}

impl SlideOutcome {
    /// Fold another row's outcome into this one.
    pub fn absorb(&mut self, other: SlideOutcome) {
        self.changed |= other.changed;
        self.gained = self.gained.saturating_add(other.gained);
    }
}

/// Value produced by merging two tiles of `tile`, or None when doubling
/// would overflow (only `MAX_TILE` and larger).
pub fn merged_value(tile: Tile) -> Option<Tile> {
    tile.checked_mul(2)
}

/// Slide a row toward index 0, merging equal neighbours once per pass.
///
/// 1. compact (drop zeros, keep order)
/// 2. merge left to right; the right tile of a merged pair becomes 0 so it
///    cannot merge again
/// 3. compact again
/// 4. pad with zeros back to the row length
///
/// Equal tiles whose double would overflow `Tile` stay side by side.
/// Rows longer than `MAX_BOARD_SIZE` are left untouched.
pub fn slide_row_left(row: &mut [Tile]) -> SlideOutcome {
    if row.len() > MAX_BOARD_SIZE {
        return SlideOutcome::default();
    }

    let mut tiles: ArrayVec<Tile, MAX_BOARD_SIZE> = row.iter().copied().filter(|&v| v != 0).collect();

    let mut gained: Score = 0;
    for i in 0..tiles.len().saturating_sub(1) {
        if tiles[i] == 0 || tiles[i] != tiles[i + 1] {
            continue;
        }
        if let Some(merged) = merged_value(tiles[i]) {
            tiles[i] = merged;
            gained = gained.saturating_add(merged);
            tiles[i + 1] = 0;
        }
    }

    tiles.retain(|v| *v != 0);

    let mut changed = false;
    let padded = tiles.iter().copied().chain(std::iter::repeat(0));
    for (cell, value) in row.iter_mut().zip(padded) {
        if *cell != value {
            changed = true;
            *cell = value;
        }
    }

    SlideOutcome { changed, gained }
}
