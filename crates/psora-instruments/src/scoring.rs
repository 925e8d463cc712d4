use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The kind of value an instrument item accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreType {
    /// Clinical severity rating (PASI erythema/induration/desquamation, 0–4).
    Rating,
    /// Percentage of a region or of the whole body (0–100).
    Percentage,
    /// Count of palm-sized areas.
    Count,
    /// Position in an item's answer list (DLQI questions).
    Ordinal,
    /// Yes/no answer (0 or 1), weighted by the item.
    Binary,
    /// Derived composite (PASI total, DLQI total, matrix total).
    Composite,
}

/// Defines the valid range for a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    /// Integer range with unit step.
    pub const fn whole(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: Some(1.0),
        }
    }

    /// Continuous range without a step constraint.
    pub const fn continuous(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: None,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() || value < self.min || value > self.max {
            return false;
        }
        match self.step {
            Some(step) => {
                let remainder = (value - self.min) % step;
                remainder < 1e-9 || (step - remainder) < 1e-9
            }
            None => true,
        }
    }
}

/// One data-entry item of an instrument: a rating, a percentage, a question.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub score_type: ScoreType,
    pub range: ScoreRange,
    /// Answer labels, in ordinal order, for items picked from a list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    pub description: Option<String>,
}

impl Item {
    pub(crate) fn new(id: &str, name: &str, score_type: ScoreType, range: ScoreRange) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            score_type,
            range,
            options: Vec::new(),
            description: None,
        }
    }

    pub(crate) fn with_options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|o| o.to_string()).collect();
        self
    }

    pub(crate) fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A group of items within an instrument (a body region, a DLQI domain, a
/// matrix section).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub items: Vec<Item>,
    pub composite_score_type: Option<ScoreType>,
    pub composite_range: Option<ScoreRange>,
    pub description: Option<String>,
}

/// A raw item value provided by the user for validation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub item_id: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub item_id: String,
    pub value: f64,
    pub expected_range: ScoreRange,
    pub score_type: ScoreType,
    pub message: String,
}
