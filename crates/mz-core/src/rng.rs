//! Seeded random stream shared by all generation phases
//!
//! Every random decision of a run draws from one [`MazeRng`] in phase order,
//! so the seed alone pins down the maze.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Random stream for one maze
///
/// In a config file it appears as its seed; loading it starts the stream
/// over from that seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct MazeRng {
    stream: ChaCha8Rng,
    seed: u64,
}

impl From<u64> for MazeRng {
    fn from(seed: u64) -> Self {
        Self::new(seed)
    }
}

impl From<MazeRng> for u64 {
    fn from(rng: MazeRng) -> Self {
        rng.seed
    }
}

impl MazeRng {
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Stream with a seed taken from the thread RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed that reproduces this maze
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Index in `0..n`, or 0 when `n` is 0
    pub fn below(&mut self, n: usize) -> usize {
        if n == 0 { 0 } else { self.stream.gen_range(0..n) }
    }

    /// Uniform draw in `[0, 1)`
    pub fn uniform(&mut self) -> f64 {
        self.stream.gen_range(0.0..1.0)
    }

    /// True with probability `p`
    ///
    /// One draw per call whatever `p` is, so later phases see the same
    /// stream when a probability changes.
    pub fn chance(&mut self, p: f64) -> bool {
        self.uniform() < p
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.stream)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.stream);
    }
}

impl Default for MazeRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
