use winnow::ascii::{dec_int, digit1};
use winnow::combinator::{alt, opt, separated};
use winnow::error::ErrMode;
use winnow::token::literal;
use winnow::{ModalResult, Parser};

use crate::types::{ComparisonAnswer, EQUAL_VALUES_ANSWER};

/// A number as written, before denominators are checked
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberToken {
    /// `whole numerator/denominator`
    Mixed(i64, i64, i64),
    /// `numerator/denominator`
    Ratio(i64, i64),
    /// `-2.25`
    Decimal(f64),
    /// `-7`
    Integer(i64),
}

/// Parse `3 1/2`
pub fn parse_mixed(input: &mut &str) -> ModalResult<NumberToken> {
    (dec_int, ' ', dec_int, '/', dec_int)
        .map(|(whole, _, numerator, _, denominator)| {
            NumberToken::Mixed(whole, numerator, denominator)
        })
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Parse `-1/4`
pub fn parse_ratio(input: &mut &str) -> ModalResult<NumberToken> {
    (dec_int, '/', dec_int)
        .map(|(numerator, _, denominator)| NumberToken::Ratio(numerator, denominator))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Parse a decimal with a fractional part, such as `-2.25`
pub fn parse_decimal(input: &mut &str) -> ModalResult<NumberToken> {
    (opt('-'), digit1, '.', digit1)
        .take()
        .try_map(str::parse::<f64>)
        .map(NumberToken::Decimal)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Parse a signed integer
pub fn parse_integer(input: &mut &str) -> ModalResult<NumberToken> {
    dec_int
        .map(NumberToken::Integer)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Parse any supported number. Longer forms are tried first.
pub fn parse_number(input: &mut &str) -> ModalResult<NumberToken> {
    alt((parse_mixed, parse_ratio, parse_decimal, parse_integer)).parse_next(input)
}

/// Parse numbers separated by `", "`
pub fn parse_number_list(input: &mut &str) -> ModalResult<Vec<NumberToken>> {
    separated(0.., parse_number, ", ").parse_next(input)
}

/// Parse a decimal operand of a comparison answer, such as `-3` or `0.25`
fn parse_operand(input: &mut &str) -> ModalResult<f64> {
    (opt('-'), digit1, opt(('.', digit1)))
        .take()
        .try_map(str::parse::<f64>)
        .parse_next(input)
}

/// Parse `a < b`, `a > b` or the equal-values sentence
pub fn parse_comparison_answer(input: &mut &str) -> ModalResult<ComparisonAnswer> {
    let inequality = (parse_operand, alt((" < ", " > ")), parse_operand).map(
        |(left, operator, right)| {
            if operator == " < " {
                ComparisonAnswer::Less(left, right)
            } else {
                ComparisonAnswer::Greater(left, right)
            }
        },
    );

    alt((
        literal(EQUAL_VALUES_ANSWER).value(ComparisonAnswer::Equal),
        inequality,
    ))
    .parse_next(input)
}
