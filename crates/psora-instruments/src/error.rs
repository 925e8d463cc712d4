use thiserror::Error;

use psora_core::error::CoreError;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("{field} = {value} is outside [{min}, {max}]")]
    InvalidInput {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("no recommendations defined for tier '{tier}' and age band '{age_band}'")]
    UnsupportedLookup { tier: String, age_band: String },

    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("unknown item '{item_id}' for instrument '{instrument_id}'")]
    UnknownItem {
        instrument_id: String,
        item_id: String,
    },

    #[error("duplicate entry for {0}")]
    Duplicate(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl InstrumentError {
    pub(crate) fn out_of_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::InvalidInput {
            field: field.into(),
            value,
            min,
            max,
        }
    }
}

/// Reject `value` unless it lies in `[min, max]`.
pub(crate) fn ensure_in_range(
    field: impl Into<String>,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), InstrumentError> {
    if value.is_nan() || value < min || value > max {
        return Err(InstrumentError::out_of_range(field, value, min, max));
    }
    Ok(())
}
