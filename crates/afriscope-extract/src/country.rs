//! Country detection by scored surface-form matching.

use std::sync::Arc;

use tracing::debug;

use afriscope_core::ExtractionConfig;

/// Points for a surface form made of exactly two words. Multi-word forms are
/// far less likely to be false positives than single short tokens.
const TWO_WORD_SCORE: u32 = 10;
/// Points for any other surface form.
const SINGLE_WORD_SCORE: u32 = 5;

/// Scores free text against per-country surface forms and picks a winner.
pub struct CountryMatcher {
    config: Arc<ExtractionConfig>,
}

impl CountryMatcher {
    pub fn new(config: Arc<ExtractionConfig>) -> Self {
        Self { config }
    }

    /// Detect which country the text concerns.
    ///
    /// Returns `None` when the best score is strictly below the configured
    /// minimum. Ties resolve to the earliest country in table order.
    pub fn detect(&self, text: &str) -> Option<String> {
        let lower = text.to_lowercase();

        let mut best_code: Option<&str> = None;
        let mut best_score = 0u32;

        for country in &self.config.countries {
            let mut score = 0u32;
            for form in &country.surface_forms {
                if lower.contains(form.as_str()) {
                    score += if form.split_whitespace().count() == 2 {
                        TWO_WORD_SCORE
                    } else {
                        SINGLE_WORD_SCORE
                    };
                }
            }
            if score > best_score {
                best_score = score;
                best_code = Some(country.code.as_str());
            }
        }

        if best_score < self.config.min_country_score {
            debug!("No country detected (best score {})", best_score);
            return None;
        }

        best_code.map(|code| code.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::default_config;

    fn matcher() -> CountryMatcher {
        CountryMatcher::new(default_config())
    }

    #[test]
    fn test_single_city_hit() {
        assert_eq!(matcher().detect("lagos"), Some("NGA".to_string()));
    }

    #[test]
    fn test_no_detection() {
        assert_eq!(matcher().detect("the weather is nice today"), None);
    }

    #[test]
    fn test_two_word_form() {
        assert_eq!(
            matcher().detect("University of Cape Town held a conference"),
            Some("ZAF".to_string())
        );
    }

    #[test]
    fn test_multiple_forms_outscore_single() {
        // "nigeria" + "nigerian" + "lagos" = 15 beats a lone "nairobi" = 5.
        let text = "Nigerian officials in Lagos said Nigeria will expand EMR coverage, \
                     citing a visit to Nairobi";
        assert_eq!(matcher().detect(text), Some("NGA".to_string()));
    }

    #[test]
    fn test_tie_resolves_to_table_order() {
        // One single-word form each; NGA precedes KEN in the table.
        assert_eq!(matcher().detect("flights from abuja to mombasa"), Some("NGA".to_string()));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(matcher().detect("KENYA announced a policy"), Some("KEN".to_string()));
    }
}
