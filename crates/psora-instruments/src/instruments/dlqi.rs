use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;
use crate::scoring::{Domain, Item, ScoreRange, ScoreType};
use crate::Instrument;

pub const QUESTION_COUNT: usize = 10;
pub const MAX_DLQI: u8 = 30;

const STANDARD_OPTIONS: [&str; 4] = ["Not at all", "A little", "A lot", "Very much"];
const SPECIAL_OPTIONS: [&str; 4] = ["Not relevant", "Not at all", "A little", "A lot"];

/// Life domains the ten questions are grouped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DlqiDomain {
    SymptomsAndFeelings,
    DailyActivities,
    Leisure,
    WorkSchool,
    PersonalRelationships,
    Treatment,
}

impl DlqiDomain {
    pub const ALL: [DlqiDomain; 6] = [
        Self::SymptomsAndFeelings,
        Self::DailyActivities,
        Self::Leisure,
        Self::WorkSchool,
        Self::PersonalRelationships,
        Self::Treatment,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::SymptomsAndFeelings => "symptoms_and_feelings",
            Self::DailyActivities => "daily_activities",
            Self::Leisure => "leisure",
            Self::WorkSchool => "work_school",
            Self::PersonalRelationships => "personal_relationships",
            Self::Treatment => "treatment",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SymptomsAndFeelings => "Symptoms and Feelings",
            Self::DailyActivities => "Daily Activities",
            Self::Leisure => "Leisure",
            Self::WorkSchool => "Work/School",
            Self::PersonalRelationships => "Personal Relationships",
            Self::Treatment => "Treatment",
        }
    }
}

struct Question {
    domain: DlqiDomain,
    text: &'static str,
    /// Questions 7–10 lead with a "Not relevant" option.
    special: bool,
}

impl Question {
    fn options(&self) -> &'static [&'static str; 4] {
        if self.special {
            &SPECIAL_OPTIONS
        } else {
            &STANDARD_OPTIONS
        }
    }

    fn max_score(&self) -> u8 {
        if self.special { 2 } else { 3 }
    }
}

const QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        domain: DlqiDomain::SymptomsAndFeelings,
        text: "Over the last week, how itchy, sore, painful or stinging has your skin been?",
        special: false,
    },
    Question {
        domain: DlqiDomain::SymptomsAndFeelings,
        text: "Over the last week, how embarrassed or self conscious have you been because of your skin?",
        special: false,
    },
    Question {
        domain: DlqiDomain::DailyActivities,
        text: "Over the last week, how much has your skin interfered with you going shopping or looking after your home or garden?",
        special: false,
    },
    Question {
        domain: DlqiDomain::DailyActivities,
        text: "Over the last week, how much has your skin influenced the clothes you wear?",
        special: false,
    },
    Question {
        domain: DlqiDomain::Leisure,
        text: "Over the last week, how much has your skin affected any social or leisure activities?",
        special: false,
    },
    Question {
        domain: DlqiDomain::Leisure,
        text: "Over the last week, how much has your skin made it difficult for you to do any sport?",
        special: false,
    },
    Question {
        domain: DlqiDomain::WorkSchool,
        text: "Over the last week, has your skin prevented you from working or studying?",
        special: true,
    },
    Question {
        domain: DlqiDomain::PersonalRelationships,
        text: "Over the last week, how much has your skin created problems with your partner or any of your close friends or relatives?",
        special: true,
    },
    Question {
        domain: DlqiDomain::PersonalRelationships,
        text: "Over the last week, how much has your skin caused any sexual difficulties?",
        special: true,
    },
    Question {
        domain: DlqiDomain::Treatment,
        text: "Over the last week, how much of a problem has the treatment for your skin been (e.g. making your home messy, or time consuming)?",
        special: true,
    },
];

/// A selected answer. `Selected(i)` is the position in the question's option
/// list as shown to the patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DlqiAnswer {
    NotRelevant,
    Selected(u8),
}

/// Score contributed by one answer to question `number` (1-based).
pub fn score_answer(number: usize, answer: DlqiAnswer) -> Result<u8, InstrumentError> {
    let question = number
        .checked_sub(1)
        .and_then(|i| QUESTIONS.get(i))
        .ok_or_else(|| InstrumentError::UnknownItem {
            instrument_id: "dlqi".to_string(),
            item_id: format!("q{number}"),
        })?;
    let field = format!("q{number}");

    match (answer, question.special) {
        (DlqiAnswer::NotRelevant, true) | (DlqiAnswer::Selected(0), true) => Ok(0),
        (DlqiAnswer::NotRelevant, false) => Err(InstrumentError::InvalidInput {
            field: format!("{field} (no 'Not relevant' option)"),
            value: -1.0,
            min: 0.0,
            max: 3.0,
        }),
        (DlqiAnswer::Selected(i), special) => {
            if i > 3 {
                return Err(InstrumentError::out_of_range(field, f64::from(i), 0.0, 3.0));
            }
            Ok(if special { i - 1 } else { i })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainScore {
    pub domain: DlqiDomain,
    pub name: String,
    pub score: u8,
    pub max: u8,
    pub answered: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DlqiResult {
    /// Sum of answered questions, within `[0, 30]`.
    pub total: u8,
    /// Questions with any selection, within `[0, 10]`.
    pub answered_count: u8,
    /// Only domains with at least one answered question, in questionnaire order.
    pub domain_scores: Vec<DomainScore>,
}

impl DlqiResult {
    /// Distinguishes "zero impact" from "not yet assessed".
    pub fn is_assessed(&self) -> bool {
        self.answered_count > 0
    }

    pub fn impact(&self) -> Option<DlqiImpact> {
        self.is_assessed().then(|| DlqiImpact::from_total(self.total))
    }
}

/// Aggregate up to ten answers. `None` entries are unanswered and excluded
/// from both the total and the answered count.
pub fn compute_dlqi(answers: &[Option<DlqiAnswer>]) -> Result<DlqiResult, InstrumentError> {
    if answers.len() > QUESTION_COUNT {
        return Err(InstrumentError::out_of_range(
            "answers.len",
            answers.len() as f64,
            0.0,
            QUESTION_COUNT as f64,
        ));
    }

    let mut total = 0u8;
    let mut answered_count = 0u8;
    let mut domain_scores: Vec<DomainScore> = Vec::new();

    for (index, answer) in answers.iter().enumerate() {
        let Some(answer) = answer else {
            continue;
        };
        let score = score_answer(index + 1, *answer)?;
        total += score;
        answered_count += 1;

        let question = &QUESTIONS[index];
        match domain_scores.iter_mut().find(|d| d.domain == question.domain) {
            Some(entry) => {
                entry.score += score;
                entry.answered += 1;
            }
            None => domain_scores.push(DomainScore {
                domain: question.domain,
                name: question.domain.name().to_string(),
                score,
                max: domain_max(question.domain),
                answered: 1,
            }),
        }
    }
    domain_scores.sort_by_key(|d| d.domain);

    tracing::debug!(total, answered_count, "computed DLQI");
    Ok(DlqiResult {
        total,
        answered_count,
        domain_scores,
    })
}

fn domain_max(domain: DlqiDomain) -> u8 {
    QUESTIONS
        .iter()
        .filter(|q| q.domain == domain)
        .map(Question::max_score)
        .sum()
}

/// Five-band interpretation of the DLQI total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DlqiImpact {
    /// 0–1
    NoEffect,
    /// 2–5
    Small,
    /// 6–10
    Moderate,
    /// 11–20
    VeryLarge,
    /// 21–30
    ExtremelyLarge,
}

impl DlqiImpact {
    pub fn from_total(total: u8) -> Self {
        match total {
            0..=1 => Self::NoEffect,
            2..=5 => Self::Small,
            6..=10 => Self::Moderate,
            11..=20 => Self::VeryLarge,
            _ => Self::ExtremelyLarge,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NoEffect => "No Impact on Quality of Life",
            Self::Small => "Small Impact on Quality of Life",
            Self::Moderate => "Moderate Impact on Quality of Life",
            Self::VeryLarge => "Large Impact on Quality of Life",
            Self::ExtremelyLarge => "Extremely Large Impact on Quality of Life",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::NoEffect => "The psoriasis has no impact on the patient's life.",
            Self::Small => "The psoriasis has a small impact on the patient's life.",
            Self::Moderate => "The psoriasis has a moderate impact on the patient's life.",
            Self::VeryLarge => "The psoriasis has a large impact on the patient's life.",
            Self::ExtremelyLarge => {
                "The psoriasis has an extremely large impact on the patient's life."
            }
        }
    }
}

/// Dermatology Life Quality Index questionnaire.
pub struct Dlqi;

impl Instrument for Dlqi {
    fn id(&self) -> &str {
        "dlqi"
    }

    fn name(&self) -> &str {
        "DLQI"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let ordinal = ScoreRange::whole(0.0, 3.0);

            DlqiDomain::ALL
                .iter()
                .map(|domain| {
                    let items = QUESTIONS
                        .iter()
                        .enumerate()
                        .filter(|(_, q)| q.domain == *domain)
                        .map(|(i, q)| {
                            Item::new(&format!("q{}", i + 1), q.text, ScoreType::Ordinal, ordinal)
                                .with_options(q.options())
                        })
                        .collect();

                    Domain {
                        id: domain.id().to_string(),
                        name: domain.name().to_string(),
                        items,
                        composite_score_type: Some(ScoreType::Composite),
                        composite_range: Some(ScoreRange::whole(
                            0.0,
                            f64::from(domain_max(*domain)),
                        )),
                        description: None,
                    }
                })
                .collect()
        });
        &DOMAINS
    }
}
