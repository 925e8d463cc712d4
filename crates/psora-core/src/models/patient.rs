use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::severity::{AgeBand, DiseaseDuration};
use crate::error::CoreError;

/// Oldest age the registration form accepts.
pub const MAX_AGE: u8 = 120;

/// Longest disease duration, in years, the registration form accepts.
pub const MAX_DISEASE_DURATION_YEARS: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
    Other,
}

/// Demographics captured at registration.
///
/// Created once and read-only afterward. Only `name`, `age` and `sex` gate
/// progression to scoring; the rest is carried into the report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientProfile {
    #[serde(default)]
    pub name: String,
    /// Age in years. Zero means not entered.
    #[serde(default)]
    pub age: u8,
    #[serde(default)]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub mrn: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub disease_duration_years: Option<u8>,
    #[serde(default)]
    pub current_treatment: Option<String>,
    #[serde(default)]
    pub assessment_date: Option<jiff::civil::Date>,
}

impl PatientProfile {
    pub fn new(name: impl Into<String>, age: u8, sex: Sex) -> Self {
        Self {
            name: name.into(),
            age,
            sex: Some(sex),
            ..Self::default()
        }
    }

    /// Names of the required fields that are still missing.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name".to_string());
        }
        if self.age == 0 {
            missing.push("age".to_string());
        }
        if self.sex.is_none() {
            missing.push("sex".to_string());
        }
        missing
    }

    /// Gate for downstream scoring: every required field present and every
    /// optional numeric field inside its band.
    pub fn ensure_complete(&self) -> Result<(), CoreError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CoreError::IncompleteAssessment { missing });
        }
        if self.age > MAX_AGE {
            return Err(CoreError::InvalidField {
                field: "age".to_string(),
                message: format!("{} is outside [1, {MAX_AGE}]", self.age),
            });
        }
        if let Some(years) = self.disease_duration_years
            && years > MAX_DISEASE_DURATION_YEARS
        {
            return Err(CoreError::InvalidField {
                field: "disease_duration_years".to_string(),
                message: format!("{years} is outside [0, {MAX_DISEASE_DURATION_YEARS}]"),
            });
        }
        Ok(())
    }

    pub fn age_band(&self) -> AgeBand {
        AgeBand::from_age(self.age)
    }

    /// `None` when the duration was not recorded.
    pub fn disease_duration(&self) -> Option<DiseaseDuration> {
        self.disease_duration_years.map(DiseaseDuration::from_years)
    }
}
