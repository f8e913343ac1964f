//! Question builders
//!
//! [`QuestionBuilder`] picks values for a mastery level, works out the
//! correct answer and formats both as text. Unknown levels never fail; they
//! produce [`Question::invalid_level`].

mod comparison;
mod ordering;

use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, GeneratorConfig};
use crate::generator::NumberGenerator;
use crate::random::{RandomSource, RngSource};
use crate::types::{DenominatorMode, MasteryLevel, Question};

/// Builds ordering and comparison questions
#[derive(Debug, Clone)]
pub struct QuestionBuilder<R = RngSource<ChaCha8Rng>> {
    numbers: NumberGenerator<R>,
    config: GeneratorConfig,
}

impl QuestionBuilder {
    /// Builder with default bounds and an entropy-seeded engine
    pub fn new() -> Self {
        Self::with_source(RngSource::from_entropy())
    }

    /// Builder with default bounds and a fixed seed
    ///
    /// # Examples
    /// ```
    /// use number_sense::{MasteryLevel, QuestionBuilder};
    ///
    /// let first = QuestionBuilder::seeded(42).ordering_question(MasteryLevel::Level2, false);
    /// let second = QuestionBuilder::seeded(42).ordering_question(MasteryLevel::Level2, false);
    /// assert_eq!(first, second);
    /// ```
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(RngSource::seeded(seed))
    }
}

impl Default for QuestionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> QuestionBuilder<R> {
    /// Builder with default bounds drawing from `source`
    pub fn with_source(source: R) -> Self {
        Self {
            numbers: NumberGenerator::new(source),
            config: GeneratorConfig::default(),
        }
    }

    /// Builder with custom bounds. The configuration is validated first.
    pub fn with_config(source: R, config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            numbers: NumberGenerator::new(source),
            config,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The value generator the builder draws from
    pub fn numbers(&mut self) -> &mut NumberGenerator<R> {
        &mut self.numbers
    }

    /// Comparison in a real-world context. Not authored yet: always returns
    /// an empty question.
    pub fn real_world_comparison_question<L>(
        &mut self,
        _level: L,
        _same_denominator: bool,
    ) -> Question
    where
        L: TryInto<MasteryLevel>,
    {
        Question::empty()
    }

    fn denominator_mode(&mut self, same_denominator: bool) -> DenominatorMode {
        if !same_denominator {
            return DenominatorMode::Random;
        }
        let denominator = match self.config.common_denominator {
            Some(denominator) => denominator,
            None => self.numbers.integer(2, self.config.fraction.max_denominator),
        };
        DenominatorMode::Common(denominator)
    }
}

/// Resolve a level, logging the fallback when it is not a known level
fn resolve_level<L: TryInto<MasteryLevel>>(level: L, builder: &str) -> Option<MasteryLevel> {
    match level.try_into() {
        Ok(level) => Some(level),
        Err(_) => {
            log::warn!("{} question requested for an invalid mastery level", builder);
            None
        }
    }
}
