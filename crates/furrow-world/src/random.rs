//! Injectable randomness for harvest yields and rock placement.
//!
//! The engine never reaches for a global generator. Callers hand in a
//! [`RandomSource`]: [`SeededRandom`] for real play and reproducible runs,
//! [`ScriptedRandom`] when a test (or a replay) needs exact values.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Return an integer in `[low, high]`, inclusive on both ends.
    ///
    /// When `high <= low`, implementations return `low`.
    fn roll(&mut self, low: u32, high: u32) -> u32;
}

/// Pseudo-random source backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Deterministic source: the same seed always yields the same sequence.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn roll(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..=high)
    }
}

/// Replays a fixed sequence of values.
///
/// Each roll pops the next value and clamps it into the requested range.
/// Once the script runs out, every roll returns `low`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<u32>,
}

impl ScriptedRandom {
    /// Create a source that replays `values` in order.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn roll(&mut self, low: u32, high: u32) -> u32 {
        let next = self.values.pop_front().unwrap_or(low);
        next.clamp(low, high.max(low))
    }
}
