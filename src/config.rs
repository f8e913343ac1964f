//! Generation bounds for the question builders
//!
//! Every range the builders draw from lives in [`GeneratorConfig`]. The
//! defaults match the classroom ranges; a hosting application can override
//! any of them from TOML.

use std::fmt;
use std::fs;
use std::path::Path;

/// Error type for configuration loading
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The configuration file could not be read
    Io(String),
    /// The TOML text is malformed or a key has the wrong type
    ParseError(String),
    /// A range has its lower bound above its upper bound
    InvertedRange { field: &'static str, min: i64, max: i64 },
    /// A value is outside what the generators accept
    OutOfBounds { field: &'static str, value: i64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Error reading configuration: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "Error parsing configuration: {}", msg),
            ConfigError::InvertedRange { field, min, max } => {
                write!(f, "Range {} has min {} above max {}", field, min, max)
            }
            ConfigError::OutOfBounds { field, value } => {
                write!(f, "Value {} is out of bounds for {}", value, field)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

type Result<T> = std::result::Result<T, ConfigError>;

/// Largest whole-number pool a configuration may name
pub const MAX_WHOLE_NUMBER_POOL: i128 = 1_000_000;

/// Inclusive integer range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub min: i64,
    pub max: i64,
}

impl Range {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Number of integers in the range
    pub fn len(&self) -> i128 {
        (i128::from(self.max) - i128::from(self.min) + 1).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn validate(&self, field: &'static str) -> Result<()> {
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Bounds for a single fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FractionBounds {
    pub min_numerator: i64,
    pub max_numerator: i64,
    pub max_denominator: i64,
}

impl Default for FractionBounds {
    fn default() -> Self {
        Self {
            min_numerator: -10,
            max_numerator: 10,
            max_denominator: 10,
        }
    }
}

impl FractionBounds {
    fn validate(&self) -> Result<()> {
        if self.max_denominator < 2 {
            return Err(ConfigError::OutOfBounds {
                field: "fraction.max_denominator",
                value: self.max_denominator,
            });
        }
        // The numerator upper bound is capped at denominator - 1, which can be as low as 1.
        let smallest_cap = self.max_numerator.min(1);
        if self.min_numerator > smallest_cap {
            return Err(ConfigError::InvertedRange {
                field: "fraction.numerator",
                min: self.min_numerator,
                max: smallest_cap,
            });
        }
        if self.max_numerator < 1 {
            return Err(ConfigError::OutOfBounds {
                field: "fraction.max_numerator",
                value: self.max_numerator,
            });
        }
        Ok(())
    }
}

/// Bounds for a mixed number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixedNumberBounds {
    pub min_whole: i64,
    pub max_whole: i64,
    pub max_numerator: i64,
    pub max_denominator: i64,
}

impl Default for MixedNumberBounds {
    fn default() -> Self {
        Self {
            min_whole: -5,
            max_whole: 5,
            max_numerator: 5,
            max_denominator: 10,
        }
    }
}

impl MixedNumberBounds {
    fn validate(&self) -> Result<()> {
        Range::new(self.min_whole, self.max_whole).validate("mixed_number.whole")?;
        if self.max_numerator < 1 {
            return Err(ConfigError::OutOfBounds {
                field: "mixed_number.max_numerator",
                value: self.max_numerator,
            });
        }
        if self.max_denominator < 2 {
            return Err(ConfigError::OutOfBounds {
                field: "mixed_number.max_denominator",
                value: self.max_denominator,
            });
        }
        Ok(())
    }
}

/// All bounds used by the question builders
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Integers for Level2 questions and integer-valued fractions
    pub integer: Range,
    /// Natural numbers compared at Level1
    pub natural: Range,
    /// Range of the integer factor of a generated decimal
    pub decimal: Range,
    /// Plain integers mixed into Level5 ordering
    pub absolute_value: Range,
    /// Whole numbers sampled without replacement at Level1 ordering
    pub whole_number_pool: Range,
    pub fraction: FractionBounds,
    pub mixed_number: MixedNumberBounds,
    /// Values drawn per ordering question
    pub ordering_count: usize,
    /// Denominator shared by all fractions when a question asks for one.
    /// `None` draws a fresh common denominator per question.
    pub common_denominator: Option<i64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            integer: Range::new(-10, 10),
            natural: Range::new(1, 20),
            decimal: Range::new(-10, 10),
            absolute_value: Range::new(1, 10),
            whole_number_pool: Range::new(1, 10),
            fraction: FractionBounds::default(),
            mixed_number: MixedNumberBounds::default(),
            ordering_count: 5,
            common_denominator: None,
        }
    }
}

impl GeneratorConfig {
    /// Load a configuration from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            log::error!("Failed to read generator config {}: {}", path.display(), e);
            ConfigError::Io(format!("{}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    ///
    /// # Examples
    /// ```
    /// use number_sense::config::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::from_toml_str("[integer]\nmin = -20\nmax = 20").unwrap();
    /// assert_eq!(config.integer.min, -20);
    /// assert_eq!(config.ordering_count, 5);
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let parsed_toml: toml::Value = toml::from_str(toml_str).map_err(|e| {
            log::error!("Failed to parse generator config: {}", e);
            ConfigError::ParseError(e.to_string())
        })?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| ConfigError::ParseError("Root is not a table".to_string()))?;

        let mut config = GeneratorConfig::default();

        for (key, value) in table {
            match key.as_str() {
                "integer" => apply_range(&mut config.integer, value, key)?,
                "natural" => apply_range(&mut config.natural, value, key)?,
                "decimal" => apply_range(&mut config.decimal, value, key)?,
                "absolute_value" => apply_range(&mut config.absolute_value, value, key)?,
                "whole_number_pool" => apply_range(&mut config.whole_number_pool, value, key)?,
                "fraction" => {
                    let section = as_table(value, key)?;
                    read_int(section, "min_numerator", &mut config.fraction.min_numerator)?;
                    read_int(section, "max_numerator", &mut config.fraction.max_numerator)?;
                    read_int(section, "max_denominator", &mut config.fraction.max_denominator)?;
                }
                "mixed_number" => {
                    let section = as_table(value, key)?;
                    let bounds = &mut config.mixed_number;
                    read_int(section, "min_whole", &mut bounds.min_whole)?;
                    read_int(section, "max_whole", &mut bounds.max_whole)?;
                    read_int(section, "max_numerator", &mut bounds.max_numerator)?;
                    read_int(section, "max_denominator", &mut bounds.max_denominator)?;
                }
                "ordering_count" => {
                    let count = value.as_integer().ok_or_else(|| {
                        ConfigError::ParseError("ordering_count is not an integer".to_string())
                    })?;
                    config.ordering_count = usize::try_from(count).map_err(|_| {
                        ConfigError::OutOfBounds {
                            field: "ordering_count",
                            value: count,
                        }
                    })?;
                }
                "common_denominator" => {
                    let denominator = value.as_integer().ok_or_else(|| {
                        ConfigError::ParseError("common_denominator is not an integer".to_string())
                    })?;
                    config.common_denominator = Some(denominator);
                }
                other => log::warn!("Ignoring unknown generator config key: {}", other),
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Check every bound against what the generators accept
    pub fn validate(&self) -> Result<()> {
        self.integer.validate("integer")?;
        self.natural.validate("natural")?;
        self.decimal.validate("decimal")?;
        self.absolute_value.validate("absolute_value")?;
        self.whole_number_pool.validate("whole_number_pool")?;
        self.fraction.validate()?;
        self.mixed_number.validate()?;

        if self.whole_number_pool.len() > MAX_WHOLE_NUMBER_POOL {
            return Err(ConfigError::OutOfBounds {
                field: "whole_number_pool.max",
                value: self.whole_number_pool.max,
            });
        }
        if self.whole_number_pool.len() < self.ordering_count as i128 {
            return Err(ConfigError::OutOfBounds {
                field: "ordering_count",
                value: i64::try_from(self.ordering_count).unwrap_or(i64::MAX),
            });
        }

        if let Some(denominator) = self.common_denominator {
            if denominator < 1 {
                return Err(ConfigError::OutOfBounds {
                    field: "common_denominator",
                    value: denominator,
                });
            }
        }

        Ok(())
    }
}

fn as_table<'a>(value: &'a toml::Value, key: &str) -> Result<&'a toml::value::Table> {
    value
        .as_table()
        .ok_or_else(|| ConfigError::ParseError(format!("{} is not a table", key)))
}

fn read_int(table: &toml::value::Table, key: &str, target: &mut i64) -> Result<()> {
    if let Some(value) = table.get(key) {
        *target = value
            .as_integer()
            .ok_or_else(|| ConfigError::ParseError(format!("{} is not an integer", key)))?;
    }
    Ok(())
}

fn apply_range(range: &mut Range, value: &toml::Value, key: &str) -> Result<()> {
    let section = as_table(value, key)?;
    read_int(section, "min", &mut range.min)?;
    read_int(section, "max", &mut range.max)?;
    Ok(())
}
