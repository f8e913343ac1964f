pub mod config;
pub mod display;
pub mod generator;
pub mod parser;
pub mod questions;
pub mod random;
pub mod types;

// 导出主要 API
pub use config::{ConfigError, GeneratorConfig};
pub use generator::NumberGenerator;
pub use parser::{ValueError, parse_comparison, parse_fraction, parse_value, parse_value_list};
pub use questions::QuestionBuilder;
pub use random::{RandomSource, RngSource, SequenceSource};
pub use types::*;
