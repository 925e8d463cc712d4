use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;
use crate::scoring::{Domain, Item, ScoreRange, ScoreType};
use crate::Instrument;

/// Highest reachable matrix score (all positive findings, no exclusions).
pub const MAX_DIAGNOSTIC_SCORE: i32 = 38;

const HIGH_PROBABILITY_THRESHOLD: i32 = 18;
const MODERATE_PROBABILITY_THRESHOLD: i32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MatrixSection {
    PrimaryFeatures,
    PathognomonicSigns,
    AssociatedFeatures,
    ClinicalHistory,
    SymptomCharacteristics,
    ExclusionCriteria,
}

impl MatrixSection {
    pub const ALL: [MatrixSection; 6] = [
        Self::PrimaryFeatures,
        Self::PathognomonicSigns,
        Self::AssociatedFeatures,
        Self::ClinicalHistory,
        Self::SymptomCharacteristics,
        Self::ExclusionCriteria,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::PrimaryFeatures => "primary_features",
            Self::PathognomonicSigns => "pathognomonic_signs",
            Self::AssociatedFeatures => "associated_features",
            Self::ClinicalHistory => "clinical_history",
            Self::SymptomCharacteristics => "symptom_characteristics",
            Self::ExclusionCriteria => "exclusion_criteria",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::PrimaryFeatures => "Primary Clinical Features",
            Self::PathognomonicSigns => "Pathognomonic Signs",
            Self::AssociatedFeatures => "Associated Features",
            Self::ClinicalHistory => "Clinical History",
            Self::SymptomCharacteristics => "Symptom Characteristics",
            Self::ExclusionCriteria => "Exclusion Criteria",
        }
    }
}

struct Question {
    section: MatrixSection,
    text: &'static str,
    /// Points added on "yes". Negative for exclusion criteria.
    weight: i32,
}

const QUESTIONS: [Question; 19] = [
    Question {
        section: MatrixSection::PrimaryFeatures,
        text: "Are plaques well-demarcated, thick, and red on elbows, knees or face?",
        weight: 3,
    },
    Question {
        section: MatrixSection::PrimaryFeatures,
        text: "Are the scales silvery-white, thick, and easily scraped off?",
        weight: 3,
    },
    Question {
        section: MatrixSection::PrimaryFeatures,
        text: "Are lesions mainly on flexural or inverse sites?",
        weight: 3,
    },
    Question {
        section: MatrixSection::PrimaryFeatures,
        text: "Are lesions symmetrical on both sides of the body?",
        weight: 3,
    },
    Question {
        section: MatrixSection::PathognomonicSigns,
        text: "Does gentle scraping of scale cause pinpoint bleeding (Auspitz sign)?",
        weight: 4,
    },
    Question {
        section: MatrixSection::PathognomonicSigns,
        text: "Do new lesions appear along trauma or scratch lines (Koebner phenomenon)?",
        weight: 4,
    },
    Question {
        section: MatrixSection::AssociatedFeatures,
        text: "Are there nail changes or joint symptoms?",
        weight: 3,
    },
    Question {
        section: MatrixSection::AssociatedFeatures,
        text: "Is there a persistent, thick, scaly plaque on the scalp?",
        weight: 3,
    },
    Question {
        section: MatrixSection::ClinicalHistory,
        text: "Have lesions lasted more than 6 weeks?",
        weight: 2,
    },
    Question {
        section: MatrixSection::ClinicalHistory,
        text: "Family history of psoriasis (parent, sibling, child)?",
        weight: 3,
    },
    Question {
        section: MatrixSection::ClinicalHistory,
        text: "Did symptoms start at typical ages (20-30 or 50-60 years)?",
        weight: 2,
    },
    Question {
        section: MatrixSection::ClinicalHistory,
        text: "Any recent triggers (skin injury, stress, new medications, strep throat)?",
        weight: 1,
    },
    Question {
        section: MatrixSection::SymptomCharacteristics,
        text: "Is itching mild or absent?",
        weight: 2,
    },
    Question {
        section: MatrixSection::SymptomCharacteristics,
        text: "Are the patches thick, dry, and raised (not oozing or crusting)?",
        weight: 2,
    },
    Question {
        section: MatrixSection::ExclusionCriteria,
        text: "Are lesions mainly on flexor areas (inside elbows or knees)?",
        weight: -3,
    },
    Question {
        section: MatrixSection::ExclusionCriteria,
        text: "Are lesions oozing, crusting, or weeping?",
        weight: -3,
    },
    Question {
        section: MatrixSection::ExclusionCriteria,
        text: "Has a fungal infection been confirmed by KOH test or culture?",
        weight: -5,
    },
    Question {
        section: MatrixSection::ExclusionCriteria,
        text: "Is there a clear pattern matching a chemical or allergen exposure?",
        weight: -2,
    },
    Question {
        section: MatrixSection::ExclusionCriteria,
        text: "Is itching severe, especially at night?",
        weight: -2,
    },
];

/// The set of matrix questions answered "yes", by 1-based question number.
/// Every other question counts as "no".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosticAnswers {
    pub yes: BTreeSet<u8>,
}

impl DiagnosticAnswers {
    pub fn with_yes(numbers: impl IntoIterator<Item = u8>) -> Self {
        Self {
            yes: numbers.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Probability {
    Low,
    Moderate,
    High,
}

impl Probability {
    pub fn from_total(total: i32) -> Self {
        if total >= HIGH_PROBABILITY_THRESHOLD {
            Self::High
        } else if total >= MODERATE_PROBABILITY_THRESHOLD {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High probability of psoriasis",
            Self::Moderate => "Moderate probability of psoriasis",
            Self::Low => "Low probability: features not typical for psoriasis",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionScore {
    pub section: MatrixSection,
    pub name: String,
    pub score: i32,
    /// Best score the section can contribute. Zero for exclusion criteria.
    pub max: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosticResult {
    pub sections: Vec<SectionScore>,
    pub total: i32,
    pub max_total: i32,
    pub probability: Probability,
}

/// Score the visual diagnostic matrix.
pub fn score_diagnostic(answers: &DiagnosticAnswers) -> Result<DiagnosticResult, InstrumentError> {
    if let Some(unknown) = answers
        .yes
        .iter()
        .find(|n| **n == 0 || usize::from(**n) > QUESTIONS.len())
    {
        return Err(InstrumentError::UnknownItem {
            instrument_id: "diagnostic".to_string(),
            item_id: format!("q{unknown}"),
        });
    }

    let sections: Vec<SectionScore> = MatrixSection::ALL
        .iter()
        .map(|section| {
            let in_section = || {
                QUESTIONS
                    .iter()
                    .enumerate()
                    .filter(move |(_, q)| q.section == *section)
            };
            let score = in_section()
                .filter(|(i, _)| answers.yes.contains(&(*i as u8 + 1)))
                .map(|(_, q)| q.weight)
                .sum();
            let max = in_section().map(|(_, q)| q.weight.max(0)).sum();
            SectionScore {
                section: *section,
                name: section.name().to_string(),
                score,
                max,
            }
        })
        .collect();

    let total = sections.iter().map(|s| s.score).sum();
    let probability = Probability::from_total(total);
    tracing::debug!(total, ?probability, "scored diagnostic matrix");

    Ok(DiagnosticResult {
        sections,
        total,
        max_total: MAX_DIAGNOSTIC_SCORE,
        probability,
    })
}

/// The visual diagnostic matrix as a registry instrument.
pub struct DiagnosticMatrix;

impl Instrument for DiagnosticMatrix {
    fn id(&self) -> &str {
        "diagnostic"
    }

    fn name(&self) -> &str {
        "Psoriasis Diagnostic Matrix"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let binary = ScoreRange::whole(0.0, 1.0);

            MatrixSection::ALL
                .iter()
                .map(|section| {
                    let items = QUESTIONS
                        .iter()
                        .enumerate()
                        .filter(|(_, q)| q.section == *section)
                        .map(|(i, q)| {
                            Item::new(&format!("q{}", i + 1), q.text, ScoreType::Binary, binary)
                                .with_options(&["No", "Yes"])
                                .with_description(format!("Yes adds {} points", q.weight))
                        })
                        .collect();

                    Domain {
                        id: section.id().to_string(),
                        name: section.name().to_string(),
                        items,
                        composite_score_type: Some(ScoreType::Composite),
                        composite_range: None,
                        description: None,
                    }
                })
                .collect()
        });
        &DOMAINS
    }
}
