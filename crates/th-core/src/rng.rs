//! Random number generation for Treasure Hunt
//!
//! Every roll in the game goes through [`RandomSource`], so towns can be driven
//! by a seeded ChaCha RNG in play and by a scripted sequence in tests.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniform random draws.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`
    fn roll(&mut self) -> f64;

    /// Uniform integer in `1..=n`
    ///
    /// Returns 0 if n is 0.
    fn rnd(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        let scaled = (self.roll() * f64::from(n)) as u32;
        (scaled + 1).min(n)
    }
}

/// Game random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn roll(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    fn rnd(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(1..=n)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Replays a fixed list of rolls.
///
/// Once the script runs out every further roll yields 0.0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    rolls: VecDeque<f64>,
    draws: usize,
}

impl ScriptedRng {
    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            draws: 0,
        }
    }

    /// The roll that makes [`RandomSource::rnd`]`(n)` come out as `k`.
    pub fn rnd_value(k: u32, n: u32) -> f64 {
        (f64::from(k) - 0.5) / f64::from(n)
    }

    /// Number of rolls consumed so far
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Number of scripted rolls not yet consumed
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RandomSource for ScriptedRng {
    fn roll(&mut self) -> f64 {
        self.draws += 1;
        self.rolls.pop_front().unwrap_or(0.0)
    }
}
