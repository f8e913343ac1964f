use super::{QuestionBuilder, resolve_level};
use crate::display::compare_values;
use crate::random::RandomSource;
use crate::types::{DenominatorMode, MasteryLevel, Question, RationalValue};

impl<R: RandomSource> QuestionBuilder<R> {
    /// Ask the student to compare two values.
    ///
    /// Level 1 compares natural numbers, level 2 integers, level 3 decimals,
    /// level 4 fractions and level 5 a decimal against a fraction. The answer
    /// is `"Both values are equal."` or an inequality between the two decimal
    /// values, such as `"0.5 < 2"`.
    pub fn comparison_question<L>(&mut self, level: L) -> Question
    where
        L: TryInto<MasteryLevel>,
    {
        let Some(level) = resolve_level(level, "Comparison") else {
            return Question::invalid_level();
        };

        let (kind, first, second): (&str, RationalValue, RationalValue) = match level {
            MasteryLevel::Level1 => {
                let range = self.config.natural;
                let first = self.numbers.integer(range.min, range.max);
                let second = self.numbers.integer(range.min, range.max);
                ("natural numbers", first.into(), second.into())
            }
            MasteryLevel::Level2 => {
                let range = self.config.integer;
                let first = self.numbers.integer(range.min, range.max);
                let second = self.numbers.integer(range.min, range.max);
                ("integers", first.into(), second.into())
            }
            MasteryLevel::Level3 => {
                let range = self.config.decimal;
                let first = self.numbers.decimal(range.min, range.max);
                let second = self.numbers.decimal(range.min, range.max);
                ("decimals", first.into(), second.into())
            }
            MasteryLevel::Level4 => {
                let bounds = self.config.fraction;
                let first = self.numbers.fraction(&bounds, DenominatorMode::Random);
                let second = self.numbers.fraction(&bounds, DenominatorMode::Random);
                ("fractions", first.into(), second.into())
            }
            MasteryLevel::Level5 => {
                let (range, bounds) = (self.config.decimal, self.config.fraction);
                let decimal = self.numbers.decimal(range.min, range.max);
                let fraction = self.numbers.fraction(&bounds, DenominatorMode::Random);
                ("decimal and fraction", decimal.into(), fraction.into())
            }
        };

        let question = comparison(kind, &first, &second);
        log::debug!("Comparison question at {}: {}", level, question.prompt());
        question
    }
}

fn comparison(kind: &str, first: &RationalValue, second: &RationalValue) -> Question {
    Question::new(
        format!("Compare the following {}: {} and {}.", kind, first, second),
        compare_values(first, second),
    )
}
