use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use psora_core::models::severity::{AgeBand, SeverityTier};

use crate::error::InstrumentError;

/// Static treatment guidance for one tier and age band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecommendationSet {
    pub tier: SeverityTier,
    pub age_band: AgeBand,
    pub headline: String,
    /// Treatment options, in the order they should be considered.
    pub treatments: Vec<String>,
    /// Age-specific considerations. Empty for adults.
    pub caveats: Vec<String>,
    pub monitoring: Vec<String>,
    pub goals: Vec<String>,
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn headline(tier: SeverityTier) -> &'static str {
    match tier {
        SeverityTier::Mild => "First-line Treatment (Mild Psoriasis)",
        SeverityTier::Moderate => "Treatment Options (Moderate Psoriasis)",
        SeverityTier::Severe => "Treatment Options (Severe Psoriasis)",
    }
}

fn treatments(tier: SeverityTier) -> &'static [&'static str] {
    match tier {
        SeverityTier::Mild => &[
            "Medium-potency topical corticosteroids",
            "Vitamin D analogs (calcipotriol)",
            "Combination products (calcipotriol/betamethasone)",
            "Topical calcineurin inhibitors (face/flexures)",
            "Regular emollients and moisturizers",
            "Lifestyle modifications",
        ],
        SeverityTier::Moderate => &[
            "Optimize topical therapy",
            "NB-UVB phototherapy",
            "Consider systemic therapy if inadequate response",
            "Methotrexate 15-25mg weekly",
            "Apremilast 30mg twice daily",
            "Acitretin (if appropriate)",
        ],
        SeverityTier::Severe => &[
            "Biologic therapy preferred",
            "Conventional systemics if biologics contraindicated",
            "Combination approaches may be needed",
            "IL-17 inhibitors: Ixekizumab, Secukinumab",
            "IL-23 inhibitors: Guselkumab, Risankizumab",
            "TNF inhibitors: Adalimumab, Etanercept",
        ],
    }
}

fn caveats(age_band: AgeBand) -> &'static [&'static str] {
    match age_band {
        AgeBand::Pediatric => &[
            "Topical therapy preferred as first-line approach in children",
            "Limited systemic options: methotrexate and some biologics approved",
            "Weight-based dosing required for all medications",
            "Psychological support for school-age children",
            "Growth monitoring during systemic therapy",
        ],
        AgeBand::Adult => &[],
        AgeBand::Elderly => &[
            "Screen for cardiovascular, renal and hepatic comorbidities",
            "Review all concurrent medications for interactions",
            "Lower initial doses may be appropriate",
            "More frequent safety assessments",
            "Increased susceptibility to infections",
        ],
    }
}

const MONITORING: [&str; 8] = [
    "Baseline complete blood count",
    "Baseline comprehensive metabolic panel",
    "Baseline liver function tests",
    "Infectious disease screening",
    "Clinical assessment every 4-12 weeks",
    "Laboratory monitoring per medication",
    "PASI assessment at each visit",
    "Safety monitoring for adverse events",
];

const GOALS: [&str; 4] = [
    "PASI 75 response (75% improvement)",
    "Absolute PASI of 2-3 or less (almost clear skin)",
    "DLQI improvement of at least 5 points",
    "Symptom relief (itch, pain)",
];

static TABLE: LazyLock<Vec<RecommendationSet>> = LazyLock::new(|| {
    SeverityTier::ALL
        .iter()
        .flat_map(|tier| {
            AgeBand::ALL.iter().map(move |band| RecommendationSet {
                tier: *tier,
                age_band: *band,
                headline: headline(*tier).to_string(),
                treatments: lines(treatments(*tier)),
                caveats: lines(caveats(*band)),
                monitoring: lines(&MONITORING),
                goals: lines(&GOALS),
            })
        })
        .collect()
});

/// Look up the recommendation set for a tier and age band.
pub fn get_recommendations(
    tier: SeverityTier,
    age_band: AgeBand,
) -> Result<RecommendationSet, InstrumentError> {
    TABLE
        .iter()
        .find(|entry| entry.tier == tier && entry.age_band == age_band)
        .cloned()
        .ok_or_else(|| InstrumentError::UnsupportedLookup {
            tier: tier.to_string(),
            age_band: age_band.to_string(),
        })
}

/// String-keyed lookup for callers holding raw tier and band names.
pub fn lookup_recommendations(
    tier: &str,
    age_band: &str,
) -> Result<RecommendationSet, InstrumentError> {
    let unsupported = || InstrumentError::UnsupportedLookup {
        tier: tier.to_string(),
        age_band: age_band.to_string(),
    };
    let tier = tier.parse::<SeverityTier>().map_err(|_| unsupported())?;
    let age_band = age_band.parse::<AgeBand>().map_err(|_| unsupported())?;
    get_recommendations(tier, age_band)
}
