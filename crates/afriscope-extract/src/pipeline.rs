//! Report-level extraction: resolve the country, then extract indicators.

use std::sync::Arc;

use tracing::debug;

use afriscope_core::{ExtractionConfig, Report, Result, Signal};

use crate::country::CountryMatcher;
use crate::indicator::{ConfidenceModel, IndicatorExtractor};

/// Composition root: country detection followed by indicator extraction.
pub struct ExtractionPipeline {
    matcher: CountryMatcher,
    extractor: IndicatorExtractor,
}

impl ExtractionPipeline {
    pub fn new(config: Arc<ExtractionConfig>) -> Result<Self> {
        Ok(Self {
            matcher: CountryMatcher::new(config.clone()),
            extractor: IndicatorExtractor::new(config)?,
        })
    }

    pub fn with_confidence(
        config: Arc<ExtractionConfig>,
        confidence: Arc<dyn ConfidenceModel>,
    ) -> Result<Self> {
        Ok(Self {
            matcher: CountryMatcher::new(config.clone()),
            extractor: IndicatorExtractor::with_confidence(config, confidence)?,
        })
    }

    /// Process one report. Returns an empty vec when no country is resolved;
    /// extraction quality depends on country context, so we do not guess.
    pub fn process(&self, report: &Report) -> Vec<Signal> {
        let text = format!("{} {}", report.title, report.body);

        let country = match self.matcher.detect(&text) {
            Some(code) => code,
            None => {
                debug!("No country resolved for report {:?}; skipping extraction", report.title);
                return Vec::new();
            }
        };

        let signals = self.extractor.extract(&text, &country);
        debug!(
            "Extracted {} signal(s) for {} from report {:?}",
            signals.len(),
            country,
            report.title
        );
        signals
    }
}
