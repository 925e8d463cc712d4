use axum::Json;
use serde::Deserialize;

use psora_instruments::instruments::diagnostic::{
    score_diagnostic, DiagnosticAnswers, DiagnosticResult,
};
use psora_instruments::instruments::subtype::{identify_subtypes, PsoriasisType, SubtypeFinding};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct SubtypeRequest {
    pub types: Vec<PsoriasisType>,
}

pub async fn score_matrix(
    Json(answers): Json<DiagnosticAnswers>,
) -> Result<Json<DiagnosticResult>, ApiError> {
    let result = score_diagnostic(&answers)?;
    tracing::info!(total = result.total, probability = ?result.probability, "scored diagnostic matrix");
    Ok(Json(result))
}

pub async fn identify(Json(req): Json<SubtypeRequest>) -> Json<Vec<SubtypeFinding>> {
    let findings = identify_subtypes(&req.types);
    for alert in findings.iter().filter_map(|f| f.alert) {
        tracing::warn!(alert = ?alert, "subtype requires escalation");
    }
    Json(findings)
}
