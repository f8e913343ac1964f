//! Random sources used by the generators
//!
//! Generators never reach for a process-wide generator; they draw from a
//! [`RandomSource`] they own. [`RngSource`] adapts any `rand` engine and
//! [`SequenceSource`] replays a fixed script for deterministic tests.

use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Capability to draw uniform random numbers
pub trait RandomSource {
    /// Uniform integer in `[min, max]`, both ends inclusive. Callers guarantee `min <= max`.
    fn next_in_range(&mut self, min: i64, max: i64) -> i64;

    /// Uniform float in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// `amount` distinct indices from `[0, length)` in random order.
    /// Callers guarantee `amount <= length`.
    fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize>;
}

/// Adapter from any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ChaCha8Rng> {
    /// ChaCha8 engine seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }

    /// ChaCha8 engine with a fixed seed; the same seed replays the same draws
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_in_range(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, length, amount).into_vec()
    }
}

/// Replays scripted draws in order, wrapping around when a script runs out.
///
/// Scripted integers are folded into the requested range with a Euclidean
/// remainder, so a value that already lies in `[min, max]` comes back
/// unchanged. An empty integer script always yields `min`; an empty unit
/// script always yields `0.5`.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    ints: Vec<i64>,
    units: Vec<f64>,
    next_int: usize,
    next_unit: usize,
}

impl SequenceSource {
    pub fn new(ints: impl Into<Vec<i64>>) -> Self {
        Self {
            ints: ints.into(),
            ..Default::default()
        }
    }

    /// Set the values returned by [`RandomSource::next_unit`]
    pub fn with_units(mut self, units: impl Into<Vec<f64>>) -> Self {
        self.units = units.into();
        self
    }
}

impl RandomSource for SequenceSource {
    fn next_in_range(&mut self, min: i64, max: i64) -> i64 {
        if self.ints.is_empty() {
            return min;
        }
        let raw = self.ints[self.next_int % self.ints.len()];
        self.next_int += 1;
        let span = i128::from(max) - i128::from(min) + 1;
        let offset = (i128::from(raw) - i128::from(min)).rem_euclid(span);
        (i128::from(min) + offset) as i64
    }

    fn next_unit(&mut self) -> f64 {
        if self.units.is_empty() {
            return 0.5;
        }
        let raw = self.units[self.next_unit % self.units.len()];
        self.next_unit += 1;
        raw.clamp(0.0, 1.0 - f64::EPSILON)
    }

    /// Each pick is a scripted draw over the indices not yet taken.
    /// Holds all `length` indices in memory.
    fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        let mut remaining: Vec<usize> = (0..length).collect();
        (0..amount.min(length))
            .map(|_| {
                let pick = self.next_in_range(0, remaining.len() as i64 - 1) as usize;
                remaining.swap_remove(pick)
            })
            .collect()
    }
}
