use std::fs;

use number_sense::config::{ConfigError, GeneratorConfig, MAX_WHOLE_NUMBER_POOL, Range};
use number_sense::{MasteryLevel, QuestionBuilder, RngSource};

#[test]
fn test_empty_toml_keeps_defaults() {
    let config = GeneratorConfig::from_toml_str("").unwrap();
    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn test_overrides_sections() {
    let config = GeneratorConfig::from_toml_str(
        r#"
ordering_count = 4
common_denominator = 6

[natural]
min = 1
max = 50

[fraction]
max_denominator = 12

[mixed_number]
min_whole = 0
"#,
    )
    .unwrap();

    assert_eq!(config.ordering_count, 4);
    assert_eq!(config.common_denominator, Some(6));
    assert_eq!(config.natural, Range::new(1, 50));
    assert_eq!(config.fraction.max_denominator, 12);
    assert_eq!(config.fraction.min_numerator, -10);
    assert_eq!(config.mixed_number.min_whole, 0);
    assert_eq!(config.mixed_number.max_whole, 5);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = GeneratorConfig::from_toml_str("theme = \"dark\"").unwrap();
    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn test_wrong_types_are_parse_errors() {
    let result = GeneratorConfig::from_toml_str("[integer]\nmin = \"low\"");
    assert!(matches!(result, Err(ConfigError::ParseError(_))));

    let result = GeneratorConfig::from_toml_str("integer = 3");
    assert!(matches!(result, Err(ConfigError::ParseError(_))));

    let result = GeneratorConfig::from_toml_str("not toml [");
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn test_invalid_bounds_are_rejected() {
    let result = GeneratorConfig::from_toml_str("[integer]\nmin = 10\nmax = -10");
    assert_eq!(
        result,
        Err(ConfigError::InvertedRange {
            field: "integer",
            min: 10,
            max: -10
        })
    );

    let result = GeneratorConfig::from_toml_str("common_denominator = 0");
    assert_eq!(
        result,
        Err(ConfigError::OutOfBounds {
            field: "common_denominator",
            value: 0
        })
    );

    let result = GeneratorConfig::from_toml_str("ordering_count = -1");
    assert!(matches!(result, Err(ConfigError::OutOfBounds { .. })));
}

#[test]
fn test_error_messages() {
    let error = ConfigError::InvertedRange {
        field: "decimal",
        min: 2,
        max: 1,
    };
    assert_eq!(error.to_string(), "Range decimal has min 2 above max 1");
}

#[test]
fn test_from_path() {
    let path = std::env::temp_dir()
        .join(format!("number-sense-config-{}.toml", std::process::id()));
    fs::write(&path, "[absolute_value]\nmin = 2\nmax = 4\n").unwrap();
    let config = GeneratorConfig::from_path(&path);
    fs::remove_file(&path).unwrap();

    assert_eq!(config.unwrap().absolute_value, Range::new(2, 4));
    assert!(matches!(
        GeneratorConfig::from_path("/definitely/missing/number-sense.toml"),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_builder_rejects_invalid_config() {
    let mut config = GeneratorConfig::default();
    config.whole_number_pool = Range::new(1, 3);
    assert!(QuestionBuilder::with_config(RngSource::seeded(1), config).is_err());
}

#[test]
fn test_builder_uses_configured_ranges() {
    let config = GeneratorConfig::from_toml_str("[natural]\nmin = 7\nmax = 7").unwrap();
    let mut builder = QuestionBuilder::with_config(RngSource::seeded(4), config).unwrap();
    assert_eq!(builder.config().natural, Range::new(7, 7));
    assert_eq!(builder.numbers().integer(7, 7), 7);
    let question = builder.comparison_question(MasteryLevel::Level1);
    assert_eq!(question.prompt(), "Compare the following natural numbers: 7 and 7.");
    assert_eq!(question.answer(), "Both values are equal.");
}

#[test]
fn test_extreme_pool_bounds_are_rejected() {
    let result = GeneratorConfig::from_toml_str(
        "[whole_number_pool]\nmin = -9223372036854775808\nmax = 9223372036854775807",
    );
    assert_eq!(
        result,
        Err(ConfigError::OutOfBounds {
            field: "whole_number_pool.max",
            value: i64::MAX
        })
    );
    assert_eq!(Range::new(i64::MIN, i64::MAX).len(), 1_i128 << 64);
}

#[test]
fn test_oversized_pool_is_rejected() {
    let result =
        GeneratorConfig::from_toml_str("[whole_number_pool]\nmin = 0\nmax = 100000000000");
    assert!(matches!(
        result,
        Err(ConfigError::OutOfBounds {
            field: "whole_number_pool.max",
            ..
        })
    ));

    let limit = (MAX_WHOLE_NUMBER_POOL - 1) as i64;
    let text = format!("[whole_number_pool]\nmin = 0\nmax = {}", limit);
    let config = GeneratorConfig::from_toml_str(&text);
    assert_eq!(config.unwrap().whole_number_pool.len(), MAX_WHOLE_NUMBER_POOL);
}

#[test]
fn test_large_pool_orders_without_allocating_it() {
    let config =
        GeneratorConfig::from_toml_str("[whole_number_pool]\nmin = 1\nmax = 999999").unwrap();
    let mut builder = QuestionBuilder::with_config(RngSource::seeded(3), config).unwrap();
    let question = builder.ordering_question(MasteryLevel::Level1, false);
    assert!(question.prompt().starts_with("Order the following whole numbers"));
    assert_eq!(question.answer().split(", ").count(), 5);
}
