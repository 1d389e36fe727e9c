//! Afriscope Core — error taxonomy, boundary types, pattern configuration.

pub mod config;
pub mod error;
pub mod types;

pub use config::{CountryPatterns, ExtractionConfig, IndicatorPatterns, PatternGroup};
pub use error::{Error, Result};
pub use types::{Pillar, Report, Signal};
