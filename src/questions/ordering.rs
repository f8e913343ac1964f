use std::fmt;

use super::{QuestionBuilder, resolve_level};
use crate::display::{join_values, sort_by_float};
use crate::random::RandomSource;
use crate::types::{Fraction, MasteryLevel, Question, RationalValue};

impl<R: RandomSource> QuestionBuilder<R> {
    /// Ask the student to put a set of numbers in order from least to greatest.
    ///
    /// | Level | Values | Sorted by |
    /// |-------|--------|-----------|
    /// | 1 | distinct whole numbers from the pool | value |
    /// | 2 | integers, repeats allowed | magnitude |
    /// | 3 | fractions and whole numbers; some draws add nothing | value |
    /// | 4 | mixed numbers, fractions and whole numbers | value |
    /// | 5 | level 4 values plus plain positive integers | magnitude |
    ///
    /// With `same_denominator` every fraction and mixed number in the
    /// question shares one denominator.
    pub fn ordering_question<L>(&mut self, level: L, same_denominator: bool) -> Question
    where
        L: TryInto<MasteryLevel>,
    {
        let Some(level) = resolve_level(level, "Ordering") else {
            return Question::invalid_level();
        };

        let question = match level {
            MasteryLevel::Level1 => self.order_whole_numbers(),
            MasteryLevel::Level2 => self.order_integers(),
            MasteryLevel::Level3 => self.order_fractions(same_denominator),
            MasteryLevel::Level4 => self.order_rational_numbers(same_denominator),
            MasteryLevel::Level5 => self.order_absolute_values(same_denominator),
        };

        log::debug!("Ordering question at {}: {}", level, question.prompt());
        question
    }

    fn order_whole_numbers(&mut self) -> Question {
        let pool = self.config.whole_number_pool;
        let count = self.config.ordering_count;
        let numbers: Vec<RationalValue> = self
            .numbers
            .distinct_integers(pool.min, pool.max, count)
            .into_iter()
            .map(RationalValue::Integer)
            .collect();

        ordering("whole numbers", numbers, RationalValue::decimal_value)
    }

    fn order_integers(&mut self) -> Question {
        let range = self.config.integer;
        let numbers: Vec<RationalValue> = (0..self.config.ordering_count)
            .map(|_| RationalValue::Integer(self.numbers.integer(range.min, range.max)))
            .collect();

        ordering("integers", numbers, RationalValue::decimal_value)
    }

    fn order_fractions(&mut self, same_denominator: bool) -> Question {
        let mode = self.denominator_mode(same_denominator);
        let bounds = self.config.fraction;
        let range = self.config.integer;

        let mut fractions = Vec::with_capacity(self.config.ordering_count);
        for _ in 0..self.config.ordering_count {
            match self.numbers.choice(3) {
                0 => fractions.push(self.numbers.fraction(&bounds, mode)),
                1 => fractions.push(self.numbers.integer_as_fraction(range.min, range.max)),
                // A third of the draws add nothing, so the list can come up short.
                _ => {}
            }
        }

        ordering("fractions", fractions, Fraction::value)
    }

    fn order_rational_numbers(&mut self, same_denominator: bool) -> Question {
        let mode = self.denominator_mode(same_denominator);
        let (fraction_bounds, mixed_bounds) = (self.config.fraction, self.config.mixed_number);
        let range = self.config.integer;

        let numbers: Vec<Fraction> = (0..self.config.ordering_count)
            .map(|_| match self.numbers.choice(3) {
                0 => self.numbers.mixed_number(&mixed_bounds, mode),
                1 => self.numbers.fraction(&fraction_bounds, mode),
                _ => self.numbers.integer_as_fraction(range.min, range.max),
            })
            .collect();

        ordering("numbers", numbers, Fraction::value)
    }

    fn order_absolute_values(&mut self, same_denominator: bool) -> Question {
        let mode = self.denominator_mode(same_denominator);
        let (fraction_bounds, mixed_bounds) = (self.config.fraction, self.config.mixed_number);
        let (range, absolute) = (self.config.integer, self.config.absolute_value);

        let numbers: Vec<RationalValue> = (0..self.config.ordering_count)
            .map(|_| match self.numbers.choice(4) {
                0 => self.numbers.mixed_number(&mixed_bounds, mode).into(),
                1 => self.numbers.fraction(&fraction_bounds, mode).into(),
                2 => self.numbers.integer_as_fraction(range.min, range.max).into(),
                _ => {
                    let value = self.numbers.absolute_value(absolute.min, absolute.max);
                    RationalValue::Integer(value)
                }
            })
            .collect();

        ordering("absolute values", numbers, |value| value.decimal_value().abs())
    }
}

/// Format an ordering question; the answer is `values` stably sorted by `key`
fn ordering<T>(kind: &str, values: Vec<T>, key: impl Fn(&T) -> f64) -> Question
where
    T: Clone + fmt::Display,
{
    let mut sorted = values.clone();
    sort_by_float(&mut sorted, key);

    Question::new(
        format!(
            "Order the following {} from least to greatest: {}",
            kind,
            join_values(&values)
        ),
        join_values(&sorted),
    )
}
