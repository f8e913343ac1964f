//! Bounded random value generation
//!
//! [`NumberGenerator`] produces the integers, decimals, fractions and mixed
//! numbers that the question builders put in front of students. Every draw
//! goes through the owned [`RandomSource`].
//!
//! All `min`/`max` pairs are inclusive. Passing `min > max` is a caller bug
//! and panics.

use crate::config::{FractionBounds, MixedNumberBounds};
use crate::random::{RandomSource, RngSource};
use crate::types::{DenominatorMode, Fraction};
use rand_chacha::ChaCha8Rng;

/// Generates bounded random numbers
#[derive(Debug, Clone)]
pub struct NumberGenerator<R = RngSource<ChaCha8Rng>> {
    source: R,
}

impl NumberGenerator {
    /// Generator backed by an entropy-seeded ChaCha8 engine
    pub fn from_entropy() -> Self {
        Self::new(RngSource::from_entropy())
    }

    /// Generator backed by a ChaCha8 engine with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngSource::seeded(seed))
    }
}

impl<R: RandomSource> NumberGenerator<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Uniform integer in `[min, max]`
    ///
    /// # Panics
    /// Panics if `min > max`.
    pub fn integer(&mut self, min: i64, max: i64) -> i64 {
        self.draw(min, max)
    }

    /// A fractional multiplier in `[0, 1)` times an integer drawn from `[min, max]`.
    ///
    /// The result takes its sign from the integer factor and is not uniform
    /// over `[min, max]`; values cluster toward zero.
    ///
    /// # Panics
    /// Panics if `min > max`.
    pub fn decimal(&mut self, min: i64, max: i64) -> f64 {
        let multiplier = self.source.next_unit();
        let factor = self.draw(min, max);
        let value = multiplier * factor as f64;
        // no negative zero in prompts
        if value == 0.0 { 0.0 } else { value }
    }

    /// Random fraction with `|numerator| <= denominator` when denominators are random.
    ///
    /// A random denominator is drawn from `[2, max_denominator]` and the
    /// numerator from `[min_numerator, min(max_numerator, denominator - 1)]`.
    /// With [`DenominatorMode::Common`] the denominator is replaced and the
    /// numerator redrawn from `[1, min(max_numerator, denominator)]`.
    ///
    /// # Examples
    /// ```
    /// use number_sense::generator::NumberGenerator;
    /// use number_sense::config::FractionBounds;
    /// use number_sense::types::DenominatorMode;
    ///
    /// let mut generator = NumberGenerator::seeded(7);
    /// let fraction = generator.fraction(&FractionBounds::default(), DenominatorMode::Common(8));
    /// assert_eq!(fraction.denominator(), 8);
    /// assert!((1..=8).contains(&fraction.numerator()));
    /// ```
    ///
    /// # Panics
    /// Panics if the numerator range is empty for the drawn denominator.
    pub fn fraction(&mut self, bounds: &FractionBounds, mode: DenominatorMode) -> Fraction {
        let mut denominator = self.draw(2, bounds.max_denominator);
        let mut numerator = self.draw(
            bounds.min_numerator,
            bounds.max_numerator.min(denominator - 1),
        );

        match mode {
            DenominatorMode::Common(required) => {
                denominator = required;
                numerator = self.draw(1, bounds.max_numerator.min(denominator));
            }
            DenominatorMode::Random => {
                if numerator.abs() > denominator {
                    numerator = denominator;
                }
            }
        }

        log::trace!("fraction {}/{}", numerator, denominator);
        Fraction::new(numerator, denominator)
    }

    /// Random mixed number, returned as a single improper fraction.
    ///
    /// The fractional part is always proper: its numerator is clamped to
    /// `denominator - 1` and made non-negative before it is combined with the
    /// whole part as `whole * denominator + numerator`.
    ///
    /// # Panics
    /// Panics if any of the ranges in `bounds` is empty.
    pub fn mixed_number(&mut self, bounds: &MixedNumberBounds, mode: DenominatorMode) -> Fraction {
        let whole = self.draw(bounds.min_whole, bounds.max_whole);
        let mut numerator = self.draw(1, bounds.max_numerator);
        let mut denominator = self.draw(2, bounds.max_denominator);

        if let DenominatorMode::Common(required) = mode {
            denominator = required;
            numerator = self.draw(1, bounds.max_numerator.min(denominator));
        }

        if numerator >= denominator {
            numerator = denominator - 1;
        }

        if whole < 0 {
            numerator = numerator.abs();
        }

        log::trace!("mixed number {} {}/{}", whole, numerator, denominator);
        Fraction::new(whole * denominator + numerator, denominator)
    }

    /// Uniform integer in `[min, max]`; positive with the default `[1, 10]` range
    ///
    /// # Panics
    /// Panics if `min > max`.
    pub fn absolute_value(&mut self, min: i64, max: i64) -> i64 {
        self.draw(min, max)
    }

    /// Uniform integer in `[min, max]` written over 1
    ///
    /// # Panics
    /// Panics if `min > max`.
    pub fn integer_as_fraction(&mut self, min: i64, max: i64) -> Fraction {
        Fraction::whole(self.draw(min, max))
    }

    /// Up to `count` distinct integers from `[min, max]` in random order
    ///
    /// # Panics
    /// Panics if `min > max`.
    pub fn distinct_integers(&mut self, min: i64, max: i64, count: usize) -> Vec<i64> {
        assert_range(min, max);
        // the full i64 range has one more value than usize can count
        let span = i128::from(max) - i128::from(min) + 1;
        let length = usize::try_from(span).unwrap_or(usize::MAX);
        self.source
            .sample_indices(length, count.min(length))
            .into_iter()
            .map(|index| (i128::from(min) + index as i128) as i64)
            .collect()
    }

    /// Index in `[0, choices)` used to pick between value kinds
    pub(crate) fn choice(&mut self, choices: usize) -> usize {
        self.draw(0, choices as i64 - 1) as usize
    }

    fn draw(&mut self, min: i64, max: i64) -> i64 {
        assert_range(min, max);
        self.source.next_in_range(min, max)
    }
}

fn assert_range(min: i64, max: i64) {
    assert!(min <= max, "invalid range: min {} is above max {}", min, max);
}
