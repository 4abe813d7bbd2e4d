//! Runtime-tunable settings.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::types::{MAZE_HEIGHT, MAZE_WIDTH, SNAKE_TICK_MS};

/// Settings shared by the arcade and its games.
///
/// `Default` uses the constants from `arcade-types` and an entropy-seeded RNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcadeConfig {
    /// Fixed RNG seed for reproducible sessions
    pub seed: Option<u64>,
    /// Bounded input wait per snake tick
    pub snake_tick: Duration,
    pub maze_width: usize,
    pub maze_height: usize,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            snake_tick: Duration::from_millis(SNAKE_TICK_MS),
            maze_width: MAZE_WIDTH,
            maze_height: MAZE_HEIGHT,
        }
    }
}

impl ArcadeConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build an RNG for one consumer.
    ///
    /// `stream` keeps games independent when a fixed seed is shared.
    pub fn rng(&self, stream: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))),
            None => StdRng::from_entropy(),
        }
    }
}
