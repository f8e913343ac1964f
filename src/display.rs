//! Display forms and decimal values
//!
//! Single dispatch point for turning a [`RationalValue`] into prompt text and
//! into the decimal used for sorting and comparison.

use std::cmp::Ordering;
use std::fmt;

use crate::types::{EQUAL_VALUES_ANSWER, Fraction, RationalValue};

/// Fractions render as a whole number when the denominator is 1, as a mixed
/// number (`3 1/2`) or whole number when the whole part is positive, and as
/// `numerator/denominator` otherwise. Negative values never render as mixed
/// numbers.
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.whole_part();
        let remainder = self.remainder();

        if self.denominator() == 1 {
            write!(f, "{}", whole)
        } else if whole > 0 && remainder != 0 {
            write!(f, "{} {}/{}", whole, remainder, self.denominator())
        } else if whole > 0 {
            write!(f, "{}", whole)
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl fmt::Display for RationalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RationalValue::Integer(value) => write!(f, "{}", value),
            RationalValue::Decimal(value) => write!(f, "{}", value),
            RationalValue::Fraction(fraction) => write!(f, "{}", fraction),
        }
    }
}

impl RationalValue {
    /// Decimal value used for sorting and comparison.
    ///
    /// Fractions give their signed quotient. Integers and decimals give their
    /// magnitude, so `-3` and `3` compare as equal.
    pub fn decimal_value(&self) -> f64 {
        match self {
            RationalValue::Fraction(fraction) => fraction.value(),
            RationalValue::Integer(value) => value.unsigned_abs() as f64,
            RationalValue::Decimal(value) => value.abs(),
        }
    }
}

/// Join values with `", "` using their display forms
pub fn join_values<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Stable sort by a float key
pub fn sort_by_float<T>(values: &mut [T], key: impl Fn(&T) -> f64) {
    values.sort_by(|a, b| key(a).total_cmp(&key(b)));
}

/// Compare two values by decimal value and render the answer text.
///
/// Both sides of the inequality are written as decimal values, not in the
/// values' display forms.
///
/// # Examples
/// ```
/// use number_sense::display::compare_values;
/// use number_sense::types::{Fraction, RationalValue};
///
/// let half = RationalValue::Fraction(Fraction::new(1, 2));
/// assert_eq!(compare_values(&half, &RationalValue::Integer(2)), "0.5 < 2");
/// ```
pub fn compare_values(first: &RationalValue, second: &RationalValue) -> String {
    let left = first.decimal_value();
    let right = second.decimal_value();

    match left.partial_cmp(&right) {
        Some(Ordering::Equal) => EQUAL_VALUES_ANSWER.to_string(),
        Some(Ordering::Less) => format!("{} < {}", left, right),
        _ => format!("{} > {}", left, right),
    }
}
