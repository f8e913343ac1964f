//! Value text parsing module
//!
//! Reads the display forms written by this crate back into values, so a
//! question's prompt and answer can be checked. Entry points are
//! [`parse_value`], [`parse_fraction`], [`parse_value_list`] and
//! [`parse_comparison`].

mod combinators;

use std::fmt;

use winnow::Parser;

use crate::types::{ComparisonAnswer, Fraction, RationalValue};
use combinators::{NumberToken, parse_comparison_answer, parse_number, parse_number_list};

/// Error type for value parsing
#[derive(Debug, Clone, PartialEq)]
pub enum ValueError {
    /// The text is not an integer, decimal, fraction or mixed number
    UnsupportedValueKind(String),
    /// A fraction in the text has a denominator below 1
    InvalidDenominator(String),
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::UnsupportedValueKind(text) => {
                write!(f, "Unsupported value kind: '{}'", text)
            }
            ValueError::InvalidDenominator(text) => {
                write!(f, "Denominator must be at least 1: '{}'", text)
            }
        }
    }
}

impl std::error::Error for ValueError {}

type Result<T> = std::result::Result<T, ValueError>;

/// Parse one value in display form
///
/// # Examples
/// ```
/// use number_sense::parser::parse_value;
/// use number_sense::types::{Fraction, RationalValue};
///
/// assert_eq!(parse_value("3 1/2").unwrap(), RationalValue::Fraction(Fraction::new(7, 2)));
/// assert_eq!(parse_value("-7").unwrap(), RationalValue::Integer(-7));
/// assert!(parse_value("seven").is_err());
/// ```
pub fn parse_value(text: &str) -> Result<RationalValue> {
    let mut input = text.trim();
    let token = parse_number
        .parse_next(&mut input)
        .map_err(|_| ValueError::UnsupportedValueKind(text.to_string()))?;
    if !input.is_empty() {
        return Err(ValueError::UnsupportedValueKind(text.to_string()));
    }
    token_to_value(token, text)
}

/// Parse one value as a fraction; integers come back over 1
pub fn parse_fraction(text: &str) -> Result<Fraction> {
    match parse_value(text)? {
        RationalValue::Fraction(fraction) => Ok(fraction),
        RationalValue::Integer(value) => Ok(Fraction::whole(value)),
        RationalValue::Decimal(_) => Err(ValueError::UnsupportedValueKind(text.to_string())),
    }
}

/// Parse a `", "`-separated list of values. Empty text is an empty list.
pub fn parse_value_list(text: &str) -> Result<Vec<RationalValue>> {
    let mut input = text.trim();
    let tokens = parse_number_list
        .parse_next(&mut input)
        .map_err(|_| ValueError::UnsupportedValueKind(text.to_string()))?;
    if !input.is_empty() {
        return Err(ValueError::UnsupportedValueKind(input.to_string()));
    }
    tokens
        .into_iter()
        .map(|token| token_to_value(token, text))
        .collect()
}

/// Parse the answer of a comparison question
pub fn parse_comparison(text: &str) -> Result<ComparisonAnswer> {
    let mut input = text.trim();
    let answer = parse_comparison_answer
        .parse_next(&mut input)
        .map_err(|_| ValueError::UnsupportedValueKind(text.to_string()))?;
    if !input.is_empty() {
        return Err(ValueError::UnsupportedValueKind(text.to_string()));
    }
    Ok(answer)
}

fn token_to_value(token: NumberToken, text: &str) -> Result<RationalValue> {
    let fraction = |numerator, denominator| {
        Fraction::try_new(numerator, denominator)
            .map(RationalValue::Fraction)
            .ok_or_else(|| ValueError::InvalidDenominator(text.to_string()))
    };

    match token {
        NumberToken::Integer(value) => Ok(RationalValue::Integer(value)),
        NumberToken::Decimal(value) => Ok(RationalValue::Decimal(value)),
        NumberToken::Ratio(numerator, denominator) => fraction(numerator, denominator),
        NumberToken::Mixed(whole, numerator, denominator) => {
            let magnitude = whole.abs() * denominator + numerator;
            fraction(if whole < 0 { -magnitude } else { magnitude }, denominator)
        }
    }
}
