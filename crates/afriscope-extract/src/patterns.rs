//! Built-in pattern tables: country surface forms and indicator regexes.
//!
//! These are the defaults a process uses when no external configuration is
//! supplied. Country order matters: it is the documented tie-break for
//! equal detection scores.

use std::sync::Arc;

use once_cell::sync::Lazy;

use afriscope_core::{CountryPatterns, ExtractionConfig, IndicatorPatterns, PatternGroup};

/// Minimum summed surface-form score required to trust a detection.
pub const MIN_COUNTRY_SCORE: u32 = 5;

// Country name, demonym, and major-city forms. Lower-case literals; a
// two-word form scores 10, anything else 5.
const COUNTRY_FORMS: &[(&str, &[&str])] = &[
    ("NGA", &["nigeria", "nigerian", "lagos", "abuja"]),
    ("ZAF", &["south africa", "south african", "cape town", "johannesburg", "pretoria"]),
    ("KEN", &["kenya", "kenyan", "nairobi", "mombasa"]),
    ("GHA", &["ghana", "ghanaian", "accra", "kumasi"]),
    ("EGY", &["egypt", "egyptian", "cairo", "alexandria"]),
    ("ETH", &["ethiopia", "ethiopian", "addis ababa"]),
    ("TZA", &["tanzania", "tanzanian", "dar es salaam", "dodoma"]),
    ("UGA", &["uganda", "ugandan", "kampala"]),
    ("RWA", &["rwanda", "rwandan", "kigali"]),
    ("SEN", &["senegal", "senegalese", "dakar"]),
    ("MAR", &["morocco", "moroccan", "rabat", "casablanca"]),
    ("TUN", &["tunisia", "tunisian", "tunis"]),
    ("CIV", &["ivory coast", "ivorian", "abidjan"]),
    ("ZMB", &["zambia", "zambian", "lusaka"]),
];

// Indicator name → (regex, 1-based capture group holding the value).
// All groups for an indicator are tried; matching is case-insensitive over
// whitespace-collapsed text.
const INDICATOR_GROUPS: &[(&str, &[(&str, usize)])] = &[
    (
        "emr_adoption_rate",
        &[
            (r"(\d+(?:\.\d+)?)\s*%[^.]*?\bemr\b", 1),
            (r"\bemr\b[^.]*?(\d+(?:\.\d+)?)\s*%", 1),
            (r"electronic medical records?[^.]*?(\d+(?:\.\d+)?)\s*%", 1),
        ],
    ),
    (
        "telemedicine_facility_count",
        &[
            (r"(\d+)\s+(?:health\s+)?(?:facilities|clinics|hospitals|sites)[^.]*?\btelemedicine\b", 1),
            (r"\btelemedicine\b[^.]*?(\d+)\s+(?:health\s+)?(?:facilities|clinics|hospitals|sites)", 1),
        ],
    ),
    (
        "clinical_ai_certification_programs",
        &[
            (r"(\d+)\s+(?:new\s+)?(?:clinical\s+)?ai\s+training\s+programs?", 1),
            (r"(\d+)\s+(?:new\s+)?(?:clinical\s+)?(?:ai\s+)?certification\s+programs?", 1),
            (r"trained\s+(\d+(?:\.\d+)?)\s+(?:clinicians|health workers|clinical staff)", 1),
        ],
    ),
    (
        "health_data_protection_policies",
        &[
            (r"(\d+)\s+(?:new\s+)?(?:health\s+)?data\s+(?:protection|privacy)\s+(?:policies|laws|regulations|acts)", 1),
            (r"(?:enacted|passed|adopted)\s+(\d+)\s+[^.]*?(?:policies|laws|regulations)", 1),
        ],
    ),
    (
        "ai_governance_frameworks",
        &[
            (r"(\d+)\s+(?:national\s+)?(?:health\s+)?ai\s+governance\s+frameworks?", 1),
            (r"(\d+)\s+(?:national\s+)?digital\s+health\s+strateg(?:y|ies)", 1),
        ],
    ),
];

fn build_default_config() -> ExtractionConfig {
    let countries = COUNTRY_FORMS
        .iter()
        .map(|(code, forms)| CountryPatterns {
            code: (*code).to_string(),
            surface_forms: forms.iter().map(|f| (*f).to_string()).collect(),
        })
        .collect();

    let indicators = INDICATOR_GROUPS
        .iter()
        .map(|(name, groups)| IndicatorPatterns {
            name: (*name).to_string(),
            groups: groups
                .iter()
                .map(|(pattern, value_group)| PatternGroup {
                    pattern: (*pattern).to_string(),
                    value_group: *value_group,
                })
                .collect(),
        })
        .collect();

    ExtractionConfig::new(countries, indicators, MIN_COUNTRY_SCORE)
}

static DEFAULT_CONFIG: Lazy<Arc<ExtractionConfig>> = Lazy::new(|| Arc::new(build_default_config()));

/// Shared handle to the built-in pattern tables.
pub fn default_config() -> Arc<ExtractionConfig> {
    DEFAULT_CONFIG.clone()
}
