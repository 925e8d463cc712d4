use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::patient::{MAX_AGE, MAX_DISEASE_DURATION_YEARS};

/// Field names of the registration form. Match the `PatientProfile` keys.
pub mod field {
    pub const NAME: &str = "name";
    pub const AGE: &str = "age";
    pub const SEX: &str = "sex";
    pub const MRN: &str = "mrn";
    pub const CONTACT: &str = "contact";
    pub const EMAIL: &str = "email";
    pub const DISEASE_DURATION_YEARS: &str = "disease_duration_years";
    pub const CURRENT_TREATMENT: &str = "current_treatment";
    pub const ASSESSMENT_DATE: &str = "assessment_date";
}

/// Input kind of a data-entry field, with its valid range or choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    Text,
    Integer { min: i64, max: i64 },
    Choice { options: Vec<String> },
    Date,
}

/// One entry of a plain data-entry schema, consumed by whatever
/// presentation layer renders the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSpec {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    fn new(id: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            required,
        }
    }
}

/// Build the patient registration form schema.
pub fn registration_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new(field::NAME, "Patient Name", FieldKind::Text, true),
        FieldSpec::new(
            field::AGE,
            "Age (years)",
            FieldKind::Integer {
                min: 1,
                max: i64::from(MAX_AGE),
            },
            true,
        ),
        FieldSpec::new(
            field::SEX,
            "Biological Sex",
            FieldKind::Choice {
                options: vec!["male".to_string(), "female".to_string(), "other".to_string()],
            },
            true,
        ),
        FieldSpec::new(field::MRN, "Medical Record Number", FieldKind::Text, false),
        FieldSpec::new(field::CONTACT, "Contact Number", FieldKind::Text, false),
        FieldSpec::new(field::EMAIL, "Email", FieldKind::Text, false),
        FieldSpec::new(
            field::DISEASE_DURATION_YEARS,
            "Disease Duration (years)",
            FieldKind::Integer {
                min: 0,
                max: i64::from(MAX_DISEASE_DURATION_YEARS),
            },
            false,
        ),
        FieldSpec::new(
            field::CURRENT_TREATMENT,
            "Current Treatment",
            FieldKind::Text,
            false,
        ),
        FieldSpec::new(field::ASSESSMENT_DATE, "Assessment Date", FieldKind::Date, false),
    ]
}
