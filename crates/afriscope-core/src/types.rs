//! Boundary types shared across the pipeline: reports in, signals out.

use serde::{Deserialize, Serialize};

/// A raw intelligence report to process. Transient; consumed once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub body: String,
}

impl Report {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Infrastructure-capability pillar an indicator belongs to.
///
/// `EconomicMarket` is part of the pillar taxonomy but has no text-pattern
/// source, so the extractor never emits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    PhysicalInfrastructure,
    HumanCapital,
    RegulatoryInfrastructure,
    EconomicMarket,
}

impl Pillar {
    /// Wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pillar::PhysicalInfrastructure => "physical_infrastructure",
            Pillar::HumanCapital => "human_capital",
            Pillar::RegulatoryInfrastructure => "regulatory_infrastructure",
            Pillar::EconomicMarket => "economic_market",
        }
    }
}

/// A single extracted quantitative observation with provenance.
///
/// Multiple signals may share the same `indicator_name` when several pattern
/// groups match distinct spans; deduplication is the downstream aggregator's
/// job, not ours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    pub indicator_name: String,
    pub indicator_value: f64,
    pub pillar: Pillar,
    /// Fixed-strategy confidence in [0, 1].
    pub confidence_score: f64,
    /// Full matched span the value was parsed from.
    pub extracted_text: String,
    pub country_iso: String,
}
