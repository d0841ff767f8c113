//! Grid module - square matrix of tile values
//!
//! The grid is an N x N matrix where each cell holds `0` (empty) or a tile value.
//! Uses a flat row-major vector plus a scratch buffer of the same length, so
//! rotations swap buffers instead of allocating.
//! Coordinates: (row, col), row 0 at the top, col 0 on the left.

use crate::error::{GridError, Result};
use crate::slide::merged_value;
use crate::types::{Tile, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// The playfield - `size` rows by `size` columns
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Tile>,
    /// Rotation target, same length as `cells`
    scratch: Vec<Tile>,
}

impl Grid {
    /// Create a new empty grid
    ///
    /// `size` is clamped to `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn new(size: usize) -> Self {
        let size = size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
        let len = size * size;
        Self {
            size,
            cells: vec![0; len],
            scratch: vec![0; len],
        }
    }

    /// Build a grid from explicit rows (row 0 first).
    ///
    /// Every cell must be 0 or a power of two.
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GridError::SizeOutOfRange {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }

        let mut grid = Self::new(size);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(GridError::NotSquare {
                    row: r,
                    len: row.len(),
                    expected: size,
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if value != 0 && !value.is_power_of_two() {
                    return Err(GridError::InvalidTile { row: r, col: c, value });
                }
                grid.cells[r * size + c] = value;
            }
        }
        Ok(grid)
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at (row, col); None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: Tile) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Cells of one row; None if out of bounds
    pub fn row(&self, row: usize) -> Option<&[Tile]> {
        let start = self.index(row, 0)?;
        Some(&self.cells[start..start + self.size])
    }

    pub fn row_mut(&mut self, row: usize) -> Option<&mut [Tile]> {
        let start = self.index(row, 0)?;
        Some(&mut self.cells[start..start + self.size])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks_exact(self.size)
    }

    /// Flat row-major view of every cell
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Rotate the whole grid 90° clockwise: `new[j][n-1-i] = old[i][j]`.
    pub fn rotate_cw(&mut self) {
        let n = self.size;
        for i in 0..n {
            for j in 0..n {
                self.scratch[j * n + (n - 1 - i)] = self.cells[i * n + j];
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
    }

    /// Rotate clockwise `times` quarter turns (taken mod 4).
    pub fn rotate_cw_times(&mut self, times: u8) {
        for _ in 0..times % 4 {
            self.rotate_cw();
        }
    }

    /// Coordinates of every empty cell in row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::with_capacity(self.cells.len());
        self.collect_empty_into(&mut out);
        out
    }

    /// Same as [`Grid::empty_cells`] but reuses `out`.
    pub fn collect_empty_into(&self, out: &mut Vec<(usize, usize)>) {
        out.clear();
        for (idx, &value) in self.cells.iter().enumerate() {
            if value == 0 {
                out.push((idx / self.size, idx % self.size));
            }
        }
    }

    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(|&v| v == 0)
    }

    /// True if some pair of horizontally or vertically adjacent cells hold
    /// the same value and could merge.
    pub fn has_adjacent_equal(&self) -> bool {
        let n = self.size;
        for row in 0..n {
            for col in 0..n {
                let v = self.cells[row * n + col];
                if merged_value(v).is_none() {
                    continue;
                }
                if row + 1 < n && v == self.cells[(row + 1) * n + col] {
                    return true;
                }
                if col + 1 < n && v == self.cells[row * n + col + 1] {
                    return true;
                }
            }
        }
        false
    }

    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values, saturating at `Tile::MAX`
    pub fn sum(&self) -> Tile {
        self.cells.iter().fold(0, |acc: Tile, &v| acc.saturating_add(v))
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Convert to nested rows for testing/display
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_BOARD_SIZE)
    }
}
