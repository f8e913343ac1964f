use number_sense::{
    ComparisonAnswer, MasteryLevel, Question, QuestionBuilder, SequenceSource, parse_comparison,
};

fn scripted(ints: Vec<i64>, units: Vec<f64>) -> QuestionBuilder<SequenceSource> {
    QuestionBuilder::with_source(SequenceSource::new(ints).with_units(units))
}

#[test]
fn test_equal_integers() {
    let question = scripted(vec![5, 5], vec![]).comparison_question(MasteryLevel::Level2);
    assert_eq!(question.prompt(), "Compare the following integers: 5 and 5.");
    assert_eq!(question.answer(), "Both values are equal.");
}

#[test]
fn test_opposite_integers_compare_equal() {
    let question = scripted(vec![-3, 3], vec![]).comparison_question(MasteryLevel::Level2);
    assert_eq!(question.prompt(), "Compare the following integers: -3 and 3.");
    assert_eq!(question.answer(), "Both values are equal.");
}

#[test]
fn test_integer_answer_uses_magnitudes() {
    let question = scripted(vec![-7, 2], vec![]).comparison_question(MasteryLevel::Level2);
    assert_eq!(question.answer(), "7 > 2");
}

#[test]
fn test_natural_numbers() {
    let question = scripted(vec![4, 12], vec![]).comparison_question(MasteryLevel::Level1);
    assert_eq!(question.prompt(), "Compare the following natural numbers: 4 and 12.");
    assert_eq!(question.answer(), "4 < 12");
}

#[test]
fn test_decimals() {
    let question = scripted(vec![4, -8], vec![0.5, 0.25]).comparison_question(MasteryLevel::Level3);
    assert_eq!(question.prompt(), "Compare the following decimals: 2 and -2.");
    assert_eq!(question.answer(), "Both values are equal.");

    let question = scripted(vec![5, 6], vec![0.5, 0.5]).comparison_question(MasteryLevel::Level3);
    assert_eq!(question.prompt(), "Compare the following decimals: 2.5 and 3.");
    assert_eq!(question.answer(), "2.5 < 3");
}

#[test]
fn test_fractions() {
    // denominator 4, numerator 1; denominator 2, numerator 1
    let question = scripted(vec![4, 1, 2, 1], vec![]).comparison_question(MasteryLevel::Level4);
    assert_eq!(question.prompt(), "Compare the following fractions: 1/4 and 1/2.");
    assert_eq!(question.answer(), "0.25 < 0.5");
}

#[test]
fn test_decimal_and_fraction() {
    // decimal 0.5 * 3, then fraction 1/4
    let question = scripted(vec![3, 4, 1], vec![0.5]).comparison_question(MasteryLevel::Level5);
    assert_eq!(
        question.prompt(),
        "Compare the following decimal and fraction: 1.5 and 1/4."
    );
    assert_eq!(question.answer(), "1.5 > 0.25");
}

#[test]
fn test_answers_agree_with_their_operands() {
    for seed in 0..200 {
        for level in MasteryLevel::ALL {
            let question = QuestionBuilder::seeded(seed).comparison_question(level);
            assert!(question.prompt().starts_with("Compare the following "));
            assert!(question.prompt().ends_with('.'));

            match parse_comparison(question.answer()).unwrap() {
                ComparisonAnswer::Equal => {}
                ComparisonAnswer::Less(left, right) => assert!(left < right, "{question:?}"),
                ComparisonAnswer::Greater(left, right) => assert!(left > right, "{question:?}"),
            }
        }
    }
}

#[test]
fn test_natural_numbers_stay_in_range() {
    for seed in 0..200 {
        let question = QuestionBuilder::seeded(seed).comparison_question(MasteryLevel::Level1);
        let operands = question
            .prompt()
            .trim_start_matches("Compare the following natural numbers: ")
            .trim_end_matches('.');
        for operand in operands.split(" and ") {
            let value: i64 = operand.parse().unwrap();
            assert!((1..=20).contains(&value), "{operand}");
        }
    }
}

#[test]
fn test_invalid_level_falls_back() {
    let mut builder = QuestionBuilder::seeded(8);
    for level in [0u8, 6, 255] {
        assert_eq!(builder.comparison_question(level), Question::invalid_level());
    }
}

#[test]
fn test_real_world_comparison_is_empty() {
    let mut builder = QuestionBuilder::seeded(8);
    for level in MasteryLevel::ALL {
        for same_denominator in [false, true] {
            let question = builder.real_world_comparison_question(level, same_denominator);
            assert!(question.is_empty());
            assert_eq!(question.prompt(), "");
            assert_eq!(question.answer(), "");
        }
    }
    assert!(builder.real_world_comparison_question(9u8, true).is_empty());
}

#[test]
fn test_entropy_seeded_builder() {
    let question = QuestionBuilder::new().comparison_question(MasteryLevel::Level1);
    assert!(parse_comparison(question.answer()).is_ok());

    let question = QuestionBuilder::default().comparison_question(MasteryLevel::Level4);
    assert!(parse_comparison(question.answer()).is_ok());
}
