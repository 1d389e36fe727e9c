//! Indicator extraction: regex pattern groups over report text.

use std::sync::Arc;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use afriscope_core::{Error, ExtractionConfig, Pillar, Result, Signal};

/// Strategy for scoring confidence of an extracted indicator.
///
/// The current model is a placeholder that ignores match quality; keeping it
/// behind a trait lets a calibrated scorer replace it without touching
/// extraction control flow.
pub trait ConfidenceModel: Send + Sync {
    fn score(&self, indicator_name: &str, matched_text: &str) -> f64;
}

/// Fixed confidence for every successful match.
pub struct FixedConfidence {
    value: f64,
}

impl FixedConfidence {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl Default for FixedConfidence {
    fn default() -> Self {
        Self { value: 0.8 }
    }
}

impl ConfidenceModel for FixedConfidence {
    fn score(&self, _indicator_name: &str, _matched_text: &str) -> f64 {
        self.value
    }
}

/// Classify an indicator into a pillar by keyword rule on its name.
///
/// Infrastructure check first, then training, else the regulatory default.
pub fn classify_pillar(indicator_name: &str) -> Pillar {
    if indicator_name.contains("emr") || indicator_name.contains("telemedicine") {
        Pillar::PhysicalInfrastructure
    } else if indicator_name.contains("certification") || indicator_name.contains("training") {
        Pillar::HumanCapital
    } else {
        Pillar::RegulatoryInfrastructure
    }
}

/// Collapse whitespace runs to single spaces so regexes are robust to
/// embedded newlines and formatting.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

struct CompiledGroup {
    regex: Regex,
    value_group: usize,
}

struct CompiledIndicator {
    name: String,
    pillar: Pillar,
    groups: Vec<CompiledGroup>,
}

/// Applies the configured pattern groups to text and emits signals.
pub struct IndicatorExtractor {
    indicators: Vec<CompiledIndicator>,
    confidence: Arc<dyn ConfidenceModel>,
}

impl IndicatorExtractor {
    /// Compile the configured patterns with the default fixed confidence.
    pub fn new(config: Arc<ExtractionConfig>) -> Result<Self> {
        Self::with_confidence(config, Arc::new(FixedConfidence::default()))
    }

    /// Compile the configured patterns with a caller-supplied scoring model.
    ///
    /// An invalid pattern fails here, before any report is processed.
    pub fn with_confidence(
        config: Arc<ExtractionConfig>,
        confidence: Arc<dyn ConfidenceModel>,
    ) -> Result<Self> {
        let mut indicators = Vec::with_capacity(config.indicators.len());
        for indicator in &config.indicators {
            let mut groups = Vec::with_capacity(indicator.groups.len());
            for group in &indicator.groups {
                let regex = RegexBuilder::new(&group.pattern)
                    .case_insensitive(true)
                    .dot_matches_new_line(true)
                    .build()
                    .map_err(|e| {
                        Error::Pattern(format!("{}: {}", indicator.name, e))
                    })?;
                groups.push(CompiledGroup {
                    regex,
                    value_group: group.value_group,
                });
            }
            indicators.push(CompiledIndicator {
                name: indicator.name.clone(),
                pillar: classify_pillar(&indicator.name),
                groups,
            });
        }
        Ok(Self {
            indicators,
            confidence,
        })
    }

    /// Extract all indicator signals from text for the given country.
    ///
    /// Every group of every indicator is checked (no short-circuit), and all
    /// non-overlapping matches of each group are kept. A capture that fails
    /// numeric parsing is skipped; extraction is best-effort.
    pub fn extract(&self, text: &str, country_iso: &str) -> Vec<Signal> {
        let text = collapse_whitespace(text);
        let mut signals = Vec::new();

        for indicator in &self.indicators {
            for group in &indicator.groups {
                for caps in group.regex.captures_iter(&text) {
                    let capture = match caps.get(group.value_group) {
                        Some(m) => m.as_str(),
                        None => continue,
                    };
                    let value: f64 = match capture.parse() {
                        Ok(v) => v,
                        Err(_) => {
                            debug!(
                                "Unparseable capture for {}: {:?}",
                                indicator.name, capture
                            );
                            continue;
                        }
                    };
                    let matched = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
                    signals.push(Signal {
                        indicator_name: indicator.name.clone(),
                        indicator_value: value,
                        pillar: indicator.pillar,
                        confidence_score: self.confidence.score(&indicator.name, matched),
                        extracted_text: matched.to_string(),
                        country_iso: country_iso.to_string(),
                    });
                }
            }
        }

        signals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::default_config;
    use afriscope_core::{IndicatorPatterns, PatternGroup};

    fn extractor() -> IndicatorExtractor {
        IndicatorExtractor::new(default_config()).unwrap()
    }

    #[test]
    fn test_classify_pillar() {
        assert_eq!(
            classify_pillar("emr_adoption_rate"),
            Pillar::PhysicalInfrastructure
        );
        assert_eq!(
            classify_pillar("telemedicine_facility_count"),
            Pillar::PhysicalInfrastructure
        );
        assert_eq!(
            classify_pillar("clinical_ai_certification_programs"),
            Pillar::HumanCapital
        );
        assert_eq!(
            classify_pillar("health_workforce_training_budget"),
            Pillar::HumanCapital
        );
        assert_eq!(
            classify_pillar("health_data_protection_policies"),
            Pillar::RegulatoryInfrastructure
        );
    }

    #[test]
    fn test_emr_percentage() {
        let signals = extractor().extract(
            "A survey found 62.5% of district hospitals had implemented EMR systems.",
            "GHA",
        );
        let emr: Vec<_> = signals
            .iter()
            .filter(|s| s.indicator_name == "emr_adoption_rate")
            .collect();
        assert_eq!(emr.len(), 1);
        assert_eq!(emr[0].indicator_value, 62.5);
        assert_eq!(emr[0].pillar, Pillar::PhysicalInfrastructure);
        assert_eq!(emr[0].confidence_score, 0.8);
        assert_eq!(emr[0].country_iso, "GHA");
        assert!(emr[0].extracted_text.to_lowercase().contains("emr"));
    }

    #[test]
    fn test_whitespace_collapse() {
        let signals = extractor().extract(
            "The ministry launched 7 new\n   AI training\nprograms this year.",
            "UGA",
        );
        assert!(signals
            .iter()
            .any(|s| s.indicator_name == "clinical_ai_certification_programs"
                && s.indicator_value == 7.0));
    }

    #[test]
    fn test_no_matches() {
        let signals = extractor().extract("Nothing quantitative here.", "KEN");
        assert!(signals.is_empty());
    }

    #[test]
    fn test_duplicate_matches_not_merged() {
        let signals = extractor().extract(
            "EMR adoption reached 40%. A later audit put EMR coverage at 45%.",
            "RWA",
        );
        let emr: Vec<_> = signals
            .iter()
            .filter(|s| s.indicator_name == "emr_adoption_rate")
            .collect();
        assert_eq!(emr.len(), 2);
        let values: Vec<f64> = emr.iter().map(|s| s.indicator_value).collect();
        assert!(values.contains(&40.0));
        assert!(values.contains(&45.0));
    }

    #[test]
    fn test_unparseable_capture_skipped() {
        // A group that captures non-numeric text must be dropped silently.
        let config = Arc::new(ExtractionConfig::new(
            vec![],
            vec![IndicatorPatterns {
                name: "broken_indicator".into(),
                groups: vec![PatternGroup {
                    pattern: r"adoption of (\w+) systems".into(),
                    value_group: 1,
                }],
            }],
            5,
        ));
        let extractor = IndicatorExtractor::new(config).unwrap();
        let signals = extractor.extract("adoption of EMR systems", "KEN");
        assert!(signals.is_empty());
    }

    #[test]
    fn test_invalid_pattern_fails_at_construction() {
        let config = Arc::new(ExtractionConfig::new(
            vec![],
            vec![IndicatorPatterns {
                name: "bad".into(),
                groups: vec![PatternGroup {
                    pattern: r"(\d+".into(),
                    value_group: 1,
                }],
            }],
            5,
        ));
        assert!(matches!(
            IndicatorExtractor::new(config),
            Err(Error::Pattern(_))
        ));
    }

    #[test]
    fn test_custom_confidence_model() {
        struct Halved;
        impl ConfidenceModel for Halved {
            fn score(&self, _: &str, _: &str) -> f64 {
                0.4
            }
        }
        let extractor =
            IndicatorExtractor::with_confidence(default_config(), Arc::new(Halved)).unwrap();
        let signals = extractor.extract("EMR adoption reached 40%.", "KEN");
        assert!(!signals.is_empty());
        assert!(signals.iter().all(|s| s.confidence_score == 0.4));
    }
}
