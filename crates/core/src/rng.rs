//! RNG module - tile spawn randomness
//!
//! Wraps a seeded `StdRng` so a whole session can be replayed from one `u64`.
//! Spawned tiles are a 2 with probability 0.9 and a 4 otherwise.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Tile, SPAWN_FOUR, SPAWN_TWO, SPAWN_TWO_PROBABILITY};

#[derive(Debug, Clone)]
pub struct TileRng {
    rng: StdRng,
    seed: u64,
}

impl TileRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from OS entropy. The chosen seed is still reported by [`TileRng::seed`].
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Uniform index in `[0, len)`; None when `len` is 0.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }

    /// 2 with probability 0.9, 4 otherwise
    pub fn tile_value(&mut self) -> Tile {
        if self.rng.gen_bool(SPAWN_TWO_PROBABILITY) {
            SPAWN_TWO
        } else {
            SPAWN_FOUR
        }
    }

    /// Seed this RNG was created from (for replaying a session)
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for TileRng {
    fn default() -> Self {
        Self::new(1)
    }
}
