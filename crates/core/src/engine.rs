//! Grid engine - owns the grid, score, and empty-tile cache
//!
//! This module ties together the core pieces: grid storage and rotation, the
//! row slide primitive, and the seeded tile spawner. It handles the move
//! pipeline (rotate, slide, unrotate, spawn) and terminal detection.

use tracing::{debug, info, trace};

use crate::error::{GridError, Result};
use crate::grid::Grid;
use crate::rng::TileRng;
use crate::slide::{slide_row_left, SlideOutcome};
use crate::snapshot::GridSnapshot;
use crate::types::{Direction, Score, Tile, INITIAL_TILES, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Complete puzzle state for one session
#[derive(Debug, Clone)]
pub struct GridEngine {
    grid: Grid,
    score: Score,
    /// Number of moves that changed the grid since the last reset.
    moves: u32,
    /// Coordinates of every zero cell, row-major. Rebuilt from `grid` whenever
    /// occupancy changes; never edited independently except by spawn.
    empty_tiles: Vec<(usize, usize)>,
    rng: TileRng,
}

impl GridEngine {
    /// Create an empty engine with the given side length and RNG seed.
    pub fn new(size: usize, seed: u64) -> Result<Self> {
        check_size(size)?;
        Ok(Self::with_rng(Grid::new(size), TileRng::new(seed)))
    }

    /// Create an empty engine seeded from OS entropy.
    pub fn with_size(size: usize) -> Result<Self> {
        check_size(size)?;
        Ok(Self::with_rng(Grid::new(size), TileRng::from_entropy()))
    }

    /// Build an engine around explicit rows (row 0 first). Score starts at 0.
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R], seed: u64) -> Result<Self> {
        Ok(Self::with_rng(Grid::from_rows(rows)?, TileRng::new(seed)))
    }

    fn with_rng(grid: Grid, rng: TileRng) -> Self {
        let mut engine = Self {
            grid,
            score: 0,
            moves: 0,
            empty_tiles: Vec::new(),
            rng,
        };
        engine.recompute_empty_tiles();
        engine
    }

    /// Zero the grid (resizing it), the score and the move counter.
    ///
    /// `size` is clamped to the supported range. The RNG keeps its stream.
    pub fn reset(&mut self, size: usize) {
        if size == self.grid.size() {
            self.grid.clear();
        } else {
            self.grid = Grid::new(size);
        }
        self.score = 0;
        self.moves = 0;
        self.recompute_empty_tiles();
        info!(size = self.grid.size(), seed = self.rng.seed(), "grid reset");
    }

    /// Place the opening tiles of a session.
    pub fn start(&mut self) {
        for _ in 0..INITIAL_TILES {
            self.spawn_random_tile();
        }
        info!(cells = ?self.grid.cells(), "session started");
    }

    /// Reset at the current size and place the opening tiles.
    pub fn restart(&mut self) {
        self.reset(self.grid.size());
        self.start();
    }

    /// Put a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
    ///
    /// Returns the placed `(row, col, value)`, or None when the grid is full.
    pub fn spawn_random_tile(&mut self) -> Option<(usize, usize, Tile)> {
        let idx = self.rng.pick_index(self.empty_tiles.len())?;
        let (row, col) = self.empty_tiles.remove(idx);
        let value = self.rng.tile_value();
        self.grid.set(row, col, value);
        trace!(row, col, value, "spawned tile");
        Some((row, col, value))
    }

    /// Slide every tile toward `direction`, merging equal neighbours.
    ///
    /// Returns true if any cell changed. A changing move adds the merged
    /// values to the score and spawns one new tile; a non-changing move
    /// leaves grid, score and cache untouched.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        self.grid.rotate_cw_times(direction.rotation_count());

        let mut outcome = SlideOutcome::default();
        for row in 0..self.grid.size() {
            if let Some(cells) = self.grid.row_mut(row) {
                outcome.absorb(slide_row_left(cells));
            }
        }

        self.grid.rotate_cw_times(direction.unwind_count());

        if !outcome.changed {
            debug!(direction = direction.as_str(), "move had no effect");
            return false;
        }

        self.score = self.score.saturating_add(outcome.gained);
        self.moves += 1;
        self.recompute_empty_tiles();
        let spawned = self.spawn_random_tile();
        debug!(
            direction = direction.as_str(),
            gained = outcome.gained,
            score = self.score,
            ?spawned,
            "move applied"
        );
        true
    }

    /// Parse `name` as a direction and apply it.
    ///
    /// Unknown names are rejected and nothing changes; they never fall back
    /// to a default direction.
    pub fn apply_named_move(&mut self, name: &str) -> Result<bool> {
        let direction =
            Direction::from_str(name).ok_or_else(|| GridError::UnknownDirection(name.to_string()))?;
        Ok(self.apply_move(direction))
    }

    /// No empty cell and no adjacent equal pair: no move can change the grid.
    pub fn is_terminal(&self) -> bool {
        !self.grid.has_empty() && !self.grid.has_adjacent_equal()
    }

    /// Rebuild the empty-tile cache from the grid.
    pub fn recompute_empty_tiles(&mut self) {
        self.grid.collect_empty_into(&mut self.empty_tiles);
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Tile> {
        self.grid.get(row, col)
    }

    pub fn empty_tiles(&self) -> &[(usize, usize)] {
        &self.empty_tiles
    }

    /// Owned copy of the state for rendering.
    pub fn snapshot(&self) -> GridSnapshot {
        let mut snap = GridSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill `out`, reusing its cell buffer.
    pub fn snapshot_into(&self, out: &mut GridSnapshot) {
        out.size = self.grid.size();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.score = self.score;
        out.moves = self.moves;
        out.max_tile = self.grid.max_tile();
        out.game_over = self.is_terminal();
        out.seed = self.rng.seed();
    }
}

fn check_size(size: usize) -> Result<()> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(GridError::SizeOutOfRange {
            size,
            min: MIN_BOARD_SIZE,
            max: MAX_BOARD_SIZE,
        })
    }
}
