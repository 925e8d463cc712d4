use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ensure_in_range, InstrumentError};
use crate::scoring::{Domain, Item, ScoreRange, ScoreType};
use crate::Instrument;

pub const MAX_BSA: f64 = 100.0;

/// Body regions for visual BSA estimation, with their share of total body
/// surface (rule of nines).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BsaRegion {
    HeadNeck,
    BothArms,
    Chest,
    Abdomen,
    UpperBack,
    LowerBack,
    BothLegs,
    Genitals,
}

impl BsaRegion {
    pub const ALL: [BsaRegion; 8] = [
        Self::HeadNeck,
        Self::BothArms,
        Self::Chest,
        Self::Abdomen,
        Self::UpperBack,
        Self::LowerBack,
        Self::BothLegs,
        Self::Genitals,
    ];

    /// Percent of total body surface. The eight proportions sum to 100.
    pub fn proportion(&self) -> u32 {
        match self {
            Self::HeadNeck => 9,
            Self::BothArms => 18,
            Self::Chest => 9,
            Self::Abdomen => 9,
            Self::UpperBack => 9,
            Self::LowerBack => 9,
            Self::BothLegs => 36,
            Self::Genitals => 1,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::HeadNeck => "head_neck",
            Self::BothArms => "both_arms",
            Self::Chest => "chest",
            Self::Abdomen => "abdomen",
            Self::UpperBack => "upper_back",
            Self::LowerBack => "lower_back",
            Self::BothLegs => "both_legs",
            Self::Genitals => "genitals",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::HeadNeck => "Head & Neck",
            Self::BothArms => "Both Arms",
            Self::Chest => "Chest",
            Self::Abdomen => "Abdomen",
            Self::UpperBack => "Upper Back",
            Self::LowerBack => "Lower Back",
            Self::BothLegs => "Both Legs",
            Self::Genitals => "Genitals",
        }
    }
}

/// Both BSA methods side by side, plus the reported total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BsaResult {
    /// Palm method result, when a palm count was given.
    pub palm: Option<f64>,
    /// Regional method result, when region estimates were given.
    pub regional: Option<f64>,
    /// `max(palm, regional)` in `[0, 100]`; 0 when nothing was assessed.
    pub total: f64,
}

impl BsaResult {
    pub fn is_assessed(&self) -> bool {
        self.palm.is_some() || self.regional.is_some()
    }

    /// `None` until a method has input or while the total is still 0.
    pub fn interpretation(&self) -> Option<BsaInterpretation> {
        (self.is_assessed() && self.total > 0.0)
            .then(|| BsaInterpretation::from_total(self.total))
    }
}

/// Severity reading of a BSA total on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BsaInterpretation {
    /// Below 3%
    Mild,
    /// 3% to 10% inclusive
    Moderate,
    /// Above 10%
    Severe,
}

impl BsaInterpretation {
    pub fn from_total(total: f64) -> Self {
        if total < 3.0 {
            Self::Mild
        } else if total <= 10.0 {
            Self::Moderate
        } else {
            Self::Severe
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mild => "Mild Psoriasis",
            Self::Moderate => "Moderate Psoriasis",
            Self::Severe => "Severe Psoriasis",
        }
    }

    /// Recommended approach for this band.
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            Self::Mild => &[
                "Topical corticosteroids (medium potency)",
                "Vitamin D analogs (calcipotriol)",
                "Topical calcineurin inhibitors",
                "Regular moisturizers",
            ],
            Self::Moderate => &[
                "Optimize topical therapy",
                "Consider phototherapy (NB-UVB)",
                "Systemic therapy if topicals inadequate",
                "Specialist consultation",
            ],
            Self::Severe => &[
                "Systemic therapy indicated",
                "Biologic therapy consideration",
                "Immediate specialist referral",
                "Comprehensive monitoring",
            ],
        }
    }
}

/// Palm method: each patient palm (with fingers) is about 1% BSA.
pub fn palm_method(palm_count: u32) -> Result<f64, InstrumentError> {
    ensure_in_range("palm_count", f64::from(palm_count), 0.0, MAX_BSA)?;
    Ok(f64::from(palm_count))
}

/// Regional method: affected share of each region scaled by its body
/// proportion, summed.
pub fn regional_method(estimates: &BTreeMap<BsaRegion, u32>) -> Result<f64, InstrumentError> {
    // Summed in hundredths of a percent so the result is exact.
    let mut hundredths = 0u32;
    for (region, affected) in estimates {
        ensure_in_range(
            format!("{}.affected_percentage", region.id()),
            f64::from(*affected),
            0.0,
            100.0,
        )?;
        hundredths += affected * region.proportion();
    }
    Ok(f64::from(hundredths) / 100.0)
}

/// Run whichever methods have input and keep the larger result.
pub fn estimate_bsa(
    palm_count: Option<u32>,
    regional_estimates: Option<&BTreeMap<BsaRegion, u32>>,
) -> Result<BsaResult, InstrumentError> {
    let palm = palm_count.map(palm_method).transpose()?;
    let regional = regional_estimates.map(regional_method).transpose()?;

    let total = palm
        .unwrap_or(0.0)
        .max(regional.unwrap_or(0.0))
        .clamp(0.0, MAX_BSA);

    tracing::debug!(?palm, ?regional, total, "estimated BSA");
    Ok(BsaResult {
        palm,
        regional,
        total,
    })
}

/// Total body surface area affected, in `[0, 100]`.
pub fn compute_bsa(
    palm_count: Option<u32>,
    regional_estimates: Option<&BTreeMap<BsaRegion, u32>>,
) -> Result<f64, InstrumentError> {
    estimate_bsa(palm_count, regional_estimates).map(|r| r.total)
}

/// BSA as a registry instrument: the palm count plus one item per region.
pub struct Bsa;

impl Instrument for Bsa {
    fn id(&self) -> &str {
        "bsa"
    }

    fn name(&self) -> &str {
        "BSA"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let percentage = ScoreRange::whole(0.0, 100.0);

            let regional_items = BsaRegion::ALL
                .iter()
                .map(|region| {
                    Item::new(
                        region.id(),
                        &format!("Percentage of {} affected", region.name()),
                        ScoreType::Percentage,
                        percentage,
                    )
                    .with_description(format!(
                        "Normal proportion: {}% of total body",
                        region.proportion()
                    ))
                })
                .collect();

            vec![
                Domain {
                    id: "palm_method".to_string(),
                    name: "Palm Method".to_string(),
                    items: vec![Item::new(
                        "palm_count",
                        "Number of palm-sized areas affected",
                        ScoreType::Count,
                        percentage,
                    )
                    .with_description("One palm including fingers = 1% BSA")],
                    composite_score_type: Some(ScoreType::Percentage),
                    composite_range: Some(ScoreRange::continuous(0.0, MAX_BSA)),
                    description: None,
                },
                Domain {
                    id: "regional_method".to_string(),
                    name: "Visual Estimation by Body Region".to_string(),
                    items: regional_items,
                    composite_score_type: Some(ScoreType::Percentage),
                    composite_range: Some(ScoreRange::continuous(0.0, MAX_BSA)),
                    description: Some(
                        "Final BSA is the larger of the palm and regional results".to_string(),
                    ),
                },
            ]
        });
        &DOMAINS
    }
}
