//! Type definitions for generated practice questions
//!
//! This module defines the values a question can hold, the difficulty tiers
//! that select them, and the prompt/answer pair handed back to callers.

use std::fmt;

use serde::Serialize;

/// Prompt shown when a caller asks for a mastery level that does not exist
pub const INVALID_LEVEL_PROMPT: &str = "Please select a valid mastery level.";

/// Answer paired with [`INVALID_LEVEL_PROMPT`]
pub const INVALID_LEVEL_ANSWER: &str = "Invalid level.";

/// Answer given when both compared values have the same decimal value
pub const EQUAL_VALUES_ANSWER: &str = "Both values are equal.";

/// An unreduced fraction. The denominator is always at least 1; the sign of
/// the value lives on the numerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Create a fraction
    ///
    /// # Panics
    /// Panics if `denominator` is less than 1.
    pub fn new(numerator: i64, denominator: i64) -> Self {
        assert!(
            denominator >= 1,
            "fraction denominator must be at least 1, got {denominator}"
        );
        Self {
            numerator,
            denominator,
        }
    }

    /// Create a fraction, returning `None` when the denominator is below 1
    pub fn try_new(numerator: i64, denominator: i64) -> Option<Self> {
        (denominator >= 1).then_some(Self {
            numerator,
            denominator,
        })
    }

    /// A whole number written over 1
    pub fn whole(value: i64) -> Self {
        Self::new(value, 1)
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// The quotient `numerator / denominator`
    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Whole part, truncated toward zero
    pub fn whole_part(&self) -> i64 {
        self.numerator / self.denominator
    }

    /// Remainder left after [`Fraction::whole_part`]; carries the numerator's sign
    pub fn remainder(&self) -> i64 {
        self.numerator % self.denominator
    }
}

/// A value that can appear in a question.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RationalValue {
    /// Plain integer
    Integer(i64),
    /// Decimal number
    Decimal(f64),
    /// Fraction or mixed number (mixed numbers are stored in improper form)
    Fraction(Fraction),
}

impl From<i64> for RationalValue {
    fn from(value: i64) -> Self {
        RationalValue::Integer(value)
    }
}

impl From<f64> for RationalValue {
    fn from(value: f64) -> Self {
        RationalValue::Decimal(value)
    }
}

impl From<Fraction> for RationalValue {
    fn from(value: Fraction) -> Self {
        RationalValue::Fraction(value)
    }
}

/// Difficulty tier for a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum MasteryLevel {
    /// Whole numbers
    Level1,
    /// Integers
    Level2,
    /// Positive and negative fractions
    Level3,
    /// Mixed rational numbers
    Level4,
    /// Absolute values
    Level5,
}

impl MasteryLevel {
    /// Every level, lowest first
    pub const ALL: [MasteryLevel; 5] = [
        MasteryLevel::Level1,
        MasteryLevel::Level2,
        MasteryLevel::Level3,
        MasteryLevel::Level4,
        MasteryLevel::Level5,
    ];

    /// The 1-based ordinal of this level
    pub fn ordinal(self) -> u8 {
        match self {
            MasteryLevel::Level1 => 1,
            MasteryLevel::Level2 => 2,
            MasteryLevel::Level3 => 3,
            MasteryLevel::Level4 => 4,
            MasteryLevel::Level5 => 5,
        }
    }
}

impl fmt::Display for MasteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level{}", self.ordinal())
    }
}

/// Returned when an ordinal does not name a mastery level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLevel(pub u8);

impl fmt::Display for InvalidLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid mastery level: {}", self.0)
    }
}

impl std::error::Error for InvalidLevel {}

impl TryFrom<u8> for MasteryLevel {
    type Error = InvalidLevel;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        MasteryLevel::ALL
            .into_iter()
            .find(|level| level.ordinal() == ordinal)
            .ok_or(InvalidLevel(ordinal))
    }
}

/// How denominators are chosen for fractions and mixed numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DenominatorMode {
    /// Draw a fresh denominator for each value
    #[default]
    Random,
    /// Use this denominator for every value
    Common(i64),
}

/// A generated question: prompt text and the matching answer text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    prompt: String,
    answer: String,
}

impl Question {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    /// The question returned for a level that does not exist
    pub fn invalid_level() -> Self {
        Self::new(INVALID_LEVEL_PROMPT, INVALID_LEVEL_ANSWER)
    }

    /// A question with no prompt and no answer
    pub fn empty() -> Self {
        Self::new("", "")
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// True when both prompt and answer are empty
    pub fn is_empty(&self) -> bool {
        self.prompt.is_empty() && self.answer.is_empty()
    }
}

/// A comparison answer read back from text
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComparisonAnswer {
    /// Both values are equal
    Equal,
    /// Left value is less than the right value
    Less(f64, f64),
    /// Left value is greater than the right value
    Greater(f64, f64),
}
