use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("assessment incomplete, missing required fields: {}", missing.join(", "))]
    IncompleteAssessment { missing: Vec<String> },

    #[error("invalid {field}: {message}")]
    InvalidField { field: String, message: String },
}
