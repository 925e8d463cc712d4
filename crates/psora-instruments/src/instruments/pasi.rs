use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ensure_in_range, InstrumentError};
use crate::scoring::{Domain, Item, ScoreRange, ScoreType};
use crate::Instrument;

/// Highest possible PASI: full weight × max severity (12) × max area score (6).
pub const MAX_PASI: f64 = 72.0;

/// Upper bound of each clinical severity rating.
pub const MAX_RATING: u8 = 4;

const SEVERITY_LABELS: [&str; 5] = ["None", "Slight", "Moderate", "Severe", "Very Severe"];

/// Body regions scored by PASI, with the Fredriksson–Pettersson weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PasiRegion {
    Head,
    UpperLimbs,
    Trunk,
    LowerLimbs,
}

impl PasiRegion {
    pub const ALL: [PasiRegion; 4] = [
        Self::Head,
        Self::UpperLimbs,
        Self::Trunk,
        Self::LowerLimbs,
    ];

    /// Region weight in tenths. Kept integral so totals are exact.
    fn weight_tenths(&self) -> u32 {
        match self {
            Self::Head => 1,
            Self::UpperLimbs => 2,
            Self::Trunk => 3,
            Self::LowerLimbs => 4,
        }
    }

    pub fn weight(&self) -> f64 {
        f64::from(self.weight_tenths()) / 10.0
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::UpperLimbs => "upper_limbs",
            Self::Trunk => "trunk",
            Self::LowerLimbs => "lower_limbs",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Head => "Head/Neck",
            Self::UpperLimbs => "Upper Limbs",
            Self::Trunk => "Trunk",
            Self::LowerLimbs => "Lower Limbs",
        }
    }
}

/// Clinician ratings for one body region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegionRating {
    pub region: PasiRegion,
    /// Percent of the region affected, 0–100.
    #[serde(default)]
    pub area_percentage: u8,
    #[serde(default)]
    pub erythema: u8,
    #[serde(default)]
    pub induration: u8,
    #[serde(default)]
    pub desquamation: u8,
}

impl RegionRating {
    pub fn new(
        region: PasiRegion,
        area_percentage: u8,
        erythema: u8,
        induration: u8,
        desquamation: u8,
    ) -> Self {
        Self {
            region,
            area_percentage,
            erythema,
            induration,
            desquamation,
        }
    }

    /// A region left at its defaults. Contributes nothing to the total.
    pub fn clear(region: PasiRegion) -> Self {
        Self::new(region, 0, 0, 0, 0)
    }

    fn validate(&self) -> Result<(), InstrumentError> {
        let id = self.region.id();
        let max = f64::from(MAX_RATING);
        ensure_in_range(format!("{id}.erythema"), f64::from(self.erythema), 0.0, max)?;
        ensure_in_range(format!("{id}.induration"), f64::from(self.induration), 0.0, max)?;
        ensure_in_range(
            format!("{id}.desquamation"),
            f64::from(self.desquamation),
            0.0,
            max,
        )?;
        ensure_in_range(
            format!("{id}.area_percentage"),
            f64::from(self.area_percentage),
            0.0,
            100.0,
        )
    }

    pub fn severity_sum(&self) -> u8 {
        self.erythema
            .saturating_add(self.induration)
            .saturating_add(self.desquamation)
    }
}

/// One row of the regional breakdown table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegionBreakdown {
    pub region: PasiRegion,
    pub name: String,
    pub erythema: u8,
    pub induration: u8,
    pub desquamation: u8,
    pub area_percentage: u8,
    pub area_score: u8,
    pub severity_sum: u8,
    pub weight: f64,
    pub regional_pasi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PasiResult {
    pub regions: Vec<RegionBreakdown>,
    /// Always within `[0, 72]`.
    pub total: f64,
}

impl PasiResult {
    pub fn interpretation(&self) -> PasiInterpretation {
        PasiInterpretation::from_total(self.total)
    }
}

/// Severity reading of a PASI total on its own, independent of BSA and DLQI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PasiInterpretation {
    /// Below 5
    Mild,
    /// 5 up to 10
    Moderate,
    /// 10 and above
    Severe,
}

impl PasiInterpretation {
    pub fn from_total(total: f64) -> Self {
        if total < 5.0 {
            Self::Mild
        } else if total < 10.0 {
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

    pub fn description(&self) -> &'static str {
        match self {
            Self::Mild => "Topical therapy typically appropriate",
            Self::Moderate => "Consider phototherapy or systemic therapy",
            Self::Severe => "Systemic therapy typically indicated",
        }
    }

    /// Typical treatment approach for this band.
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            Self::Mild => &[
                "Topical corticosteroids (medium potency)",
                "Vitamin D analogs",
                "Topical calcineurin inhibitors",
                "Regular emollients",
            ],
            Self::Moderate => &[
                "Optimize topical therapy",
                "NB-UVB phototherapy",
                "Consider systemic therapy",
                "Specialist consultation",
            ],
            Self::Severe => &[
                "Systemic therapy or biologics",
                "Specialist referral required",
                "Comprehensive monitoring",
                "Consider clinical trial participation",
            ],
        }
    }
}

/// Band a region's affected percentage into the PASI area score (0–6).
pub fn area_score(percentage: u8) -> Result<u8, InstrumentError> {
    let score = match percentage {
        0 => 0,
        1..=9 => 1,
        10..=29 => 2,
        30..=49 => 3,
        50..=69 => 4,
        70..=89 => 5,
        90..=100 => 6,
        _ => {
            return Err(InstrumentError::out_of_range(
                "area_percentage",
                f64::from(percentage),
                0.0,
                100.0,
            ));
        }
    };
    Ok(score)
}

/// Compute the Psoriasis Area and Severity Index.
///
/// Each of the four regions must appear exactly once; order is free and is
/// preserved in the breakdown. Ratings outside their band are rejected, not
/// clamped.
pub fn compute_pasi(regions: &[RegionRating; 4]) -> Result<PasiResult, InstrumentError> {
    let mut seen = Vec::with_capacity(regions.len());
    let mut breakdown = Vec::with_capacity(regions.len());
    let mut total_tenths = 0u32;

    for rating in regions {
        if seen.contains(&rating.region) {
            return Err(InstrumentError::Duplicate(format!(
                "PASI region '{}'",
                rating.region.id()
            )));
        }
        seen.push(rating.region);
        rating.validate()?;

        let area = area_score(rating.area_percentage)?;
        let severity_sum = rating.severity_sum();
        let regional_tenths =
            rating.region.weight_tenths() * u32::from(severity_sum) * u32::from(area);
        total_tenths += regional_tenths;

        breakdown.push(RegionBreakdown {
            region: rating.region,
            name: rating.region.name().to_string(),
            erythema: rating.erythema,
            induration: rating.induration,
            desquamation: rating.desquamation,
            area_percentage: rating.area_percentage,
            area_score: area,
            severity_sum,
            weight: rating.region.weight(),
            regional_pasi: f64::from(regional_tenths) / 10.0,
        });
    }

    let total = f64::from(total_tenths) / 10.0;
    tracing::debug!(total, "computed PASI");
    Ok(PasiResult {
        regions: breakdown,
        total,
    })
}

/// Treatment response relative to a baseline PASI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PasiResponse {
    pub baseline: f64,
    pub current: f64,
    /// Percent improvement from baseline. Negative when the disease worsened.
    pub improvement_percent: f64,
    pub pasi50: bool,
    pub pasi75: bool,
    pub pasi90: bool,
    pub pasi100: bool,
}

/// Compare a follow-up PASI against the baseline (PASI 50/75/90/100).
pub fn pasi_response(baseline: f64, current: f64) -> Result<PasiResponse, InstrumentError> {
    ensure_in_range("current", current, 0.0, MAX_PASI)?;
    if baseline.is_nan() || baseline <= 0.0 || baseline > MAX_PASI {
        return Err(InstrumentError::out_of_range(
            "baseline",
            baseline,
            f64::MIN_POSITIVE,
            MAX_PASI,
        ));
    }

    let improvement_percent = (baseline - current) / baseline * 100.0;
    Ok(PasiResponse {
        baseline,
        current,
        improvement_percent,
        pasi50: improvement_percent >= 50.0,
        pasi75: improvement_percent >= 75.0,
        pasi90: improvement_percent >= 90.0,
        pasi100: current == 0.0,
    })
}

/// PASI as a registry instrument: one domain per body region.
pub struct Pasi;

impl Instrument for Pasi {
    fn id(&self) -> &str {
        "pasi"
    }

    fn name(&self) -> &str {
        "PASI"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let rating = ScoreRange::whole(0.0, f64::from(MAX_RATING));
            let percentage = ScoreRange::whole(0.0, 100.0);

            PasiRegion::ALL
                .iter()
                .map(|region| {
                    let id = region.id();
                    Domain {
                        id: id.to_string(),
                        name: region.name().to_string(),
                        items: vec![
                            Item::new(
                                &format!("{id}_erythema"),
                                "Erythema (Redness)",
                                ScoreType::Rating,
                                rating,
                            )
                            .with_options(&SEVERITY_LABELS),
                            Item::new(
                                &format!("{id}_induration"),
                                "Induration (Thickness)",
                                ScoreType::Rating,
                                rating,
                            )
                            .with_options(&SEVERITY_LABELS),
                            Item::new(
                                &format!("{id}_desquamation"),
                                "Desquamation (Scaling)",
                                ScoreType::Rating,
                                rating,
                            )
                            .with_options(&SEVERITY_LABELS),
                            Item::new(
                                &format!("{id}_area"),
                                "Area Affected (%)",
                                ScoreType::Percentage,
                                percentage,
                            )
                            .with_description(
                                "0%: 0, <10%: 1, 10-29%: 2, 30-49%: 3, 50-69%: 4, 70-89%: 5, 90-100%: 6",
                            ),
                        ],
                        composite_score_type: Some(ScoreType::Composite),
                        composite_range: Some(ScoreRange::continuous(
                            0.0,
                            region.weight() * MAX_PASI,
                        )),
                        description: Some(format!("Region weight {}", region.weight())),
                    }
                })
                .collect()
        });
        &DOMAINS
    }
}
