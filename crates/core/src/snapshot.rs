use crate::types::{Score, Tile};

/// Read-only copy of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridSnapshot {
    pub size: usize,
    /// Row-major cell values, `size * size` long.
    pub cells: Vec<Tile>,
    pub score: Score,
    pub moves: u32,
    pub max_tile: Tile,
    pub game_over: bool,
    pub seed: u64,
}

impl GridSnapshot {
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        // chunks_exact panics on 0.
        self.cells.chunks_exact(self.size.max(1))
    }

    pub fn clear(&mut self) {
        self.size = 0;
        self.cells.clear();
        self.score = 0;
        self.moves = 0;
        self.max_tile = 0;
        self.game_over = false;
        self.seed = 0;
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
