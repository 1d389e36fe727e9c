//! Pattern-table configuration for country detection and indicator extraction.
//!
//! Tables are immutable after construction and shared by `Arc` into the
//! matcher and extractor. Both tables are ordered `Vec`s rather than maps:
//! country iteration order is the documented tie-break, and indicator groups
//! are tried in configured order.

use serde::{Deserialize, Serialize};

/// Surface forms that signal a country's presence in text.
///
/// Forms are lower-cased literals, possibly multi-word ("cape town").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryPatterns {
    /// 3-letter ISO-like country code.
    pub code: String,
    pub surface_forms: Vec<String>,
}

/// One regex with the capture group holding the numeric value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternGroup {
    pub pattern: String,
    /// 1-based capture group index parsed as the indicator value.
    pub value_group: usize,
}

/// Pattern groups configured for a single indicator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorPatterns {
    pub name: String,
    pub groups: Vec<PatternGroup>,
}

/// Full extraction configuration: country table, indicator table, and the
/// minimum country score below which detection reports nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    pub countries: Vec<CountryPatterns>,
    pub indicators: Vec<IndicatorPatterns>,
    /// A single weak single-word hit (score < 5) is not trusted.
    pub min_country_score: u32,
}

impl ExtractionConfig {
    pub fn new(
        countries: Vec<CountryPatterns>,
        indicators: Vec<IndicatorPatterns>,
        min_country_score: u32,
    ) -> Self {
        Self {
            countries,
            indicators,
            min_country_score,
        }
    }
}
