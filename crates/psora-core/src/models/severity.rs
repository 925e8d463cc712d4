use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Overall disease severity. Always derived from scores, never entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityTier {
    Mild,
    Moderate,
    Severe,
}

impl SeverityTier {
    pub const ALL: [SeverityTier; 3] = [Self::Mild, Self::Moderate, Self::Severe];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mild => "Mild Psoriasis",
            Self::Moderate => "Moderate Psoriasis",
            Self::Severe => "Severe Psoriasis",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::InvalidField {
                field: "tier".to_string(),
                message: format!("unknown severity tier '{s}'"),
            })
    }
}

/// Age grouping used to pick age-specific recommendation caveats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AgeBand {
    /// Under 18.
    Pediatric,
    Adult,
    /// 65 and over.
    Elderly,
}

impl AgeBand {
    pub const ALL: [AgeBand; 3] = [Self::Pediatric, Self::Adult, Self::Elderly];

    pub fn from_age(age: u8) -> Self {
        match age {
            0..18 => Self::Pediatric,
            18..65 => Self::Adult,
            _ => Self::Elderly,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pediatric => "pediatric",
            Self::Adult => "adult",
            Self::Elderly => "elderly",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeBand {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::InvalidField {
                field: "age_band".to_string(),
                message: format!("unknown age band '{s}'"),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DiseaseDuration {
    /// Less than two years since onset.
    NewOnset,
    Established,
}

impl DiseaseDuration {
    pub fn from_years(years: u8) -> Self {
        if years < 2 {
            Self::NewOnset
        } else {
            Self::Established
        }
    }
}
