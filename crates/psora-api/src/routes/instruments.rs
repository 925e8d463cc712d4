use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use psora_instruments::error::InstrumentError;
use psora_instruments::scoring::{Domain, ScoreEntry, ValidationError};
use psora_instruments::{all_instruments, get_instrument, Instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    domains: Vec<Domain>,
}

#[derive(Serialize)]
pub struct ValidationReport {
    valid: bool,
    errors: Vec<ValidationError>,
    unknown_items: Vec<String>,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
        })
        .collect();
    Json(instruments)
}

fn find(id: &str) -> Result<Box<dyn Instrument>, ApiError> {
    get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()).into())
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = find(&id)?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        domains: instrument.domains().to_vec(),
    }))
}

/// Check raw item values against an instrument's schema without scoring.
pub async fn validate_scores(
    Path(id): Path<String>,
    Json(scores): Json<Vec<ScoreEntry>>,
) -> Result<Json<ValidationReport>, ApiError> {
    let instrument = find(&id)?;

    let errors = instrument.validate_scores(&scores);
    let unknown_items = instrument.unknown_items(&scores);
    Ok(Json(ValidationReport {
        valid: errors.is_empty() && unknown_items.is_empty(),
        errors,
        unknown_items,
    }))
}
