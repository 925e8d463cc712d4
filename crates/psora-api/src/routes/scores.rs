use std::collections::BTreeMap;

use axum::Json;
use serde::{Deserialize, Serialize};

use psora_core::models::severity::SeverityTier;
use psora_instruments::classify_severity;
use psora_instruments::instruments::bsa::{
    estimate_bsa, BsaInterpretation, BsaRegion, BsaResult,
};
use psora_instruments::instruments::dlqi::{compute_dlqi, DlqiAnswer, DlqiImpact, DlqiResult};
use psora_instruments::instruments::pasi::{
    compute_pasi, PasiInterpretation, PasiResult, RegionRating,
};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct PasiRequest {
    pub regions: [RegionRating; 4],
}

#[derive(Debug, Default, Deserialize)]
pub struct BsaRequest {
    #[serde(default)]
    pub palm_count: Option<u32>,
    /// Affected percentage of each assessed region.
    #[serde(default)]
    pub regional: Option<BTreeMap<BsaRegion, u32>>,
}

#[derive(Serialize)]
pub struct PasiScoreResponse {
    #[serde(flatten)]
    result: PasiResult,
    interpretation: PasiInterpretation,
    interpretation_label: &'static str,
    interpretation_description: &'static str,
    treatment_approach: &'static [&'static str],
}

#[derive(Serialize)]
pub struct BsaScoreResponse {
    #[serde(flatten)]
    result: BsaResult,
    interpretation: Option<BsaInterpretation>,
    interpretation_label: Option<&'static str>,
    treatment_approach: &'static [&'static str],
}

#[derive(Debug, Deserialize)]
pub struct DlqiRequest {
    /// One slot per question, in order; `null` for unanswered.
    pub answers: Vec<Option<DlqiAnswer>>,
}

#[derive(Serialize)]
pub struct DlqiResponse {
    #[serde(flatten)]
    result: DlqiResult,
    impact: Option<DlqiImpact>,
    impact_label: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct SeverityRequest {
    pub pasi: f64,
    pub bsa: f64,
    pub dlqi: u8,
}

#[derive(Serialize)]
pub struct SeverityResponse {
    tier: SeverityTier,
    label: &'static str,
}

pub async fn score_pasi(
    Json(req): Json<PasiRequest>,
) -> Result<Json<PasiScoreResponse>, ApiError> {
    let result = compute_pasi(&req.regions)?;
    let interpretation = result.interpretation();
    tracing::info!(total = result.total, ?interpretation, "scored PASI");
    Ok(Json(PasiScoreResponse {
        result,
        interpretation,
        interpretation_label: interpretation.label(),
        interpretation_description: interpretation.description(),
        treatment_approach: interpretation.recommendations(),
    }))
}

pub async fn score_bsa(Json(req): Json<BsaRequest>) -> Result<Json<BsaScoreResponse>, ApiError> {
    let result = estimate_bsa(req.palm_count, req.regional.as_ref())?;
    let interpretation = result.interpretation();
    tracing::info!(total = result.total, ?interpretation, "estimated BSA");
    Ok(Json(BsaScoreResponse {
        result,
        interpretation,
        interpretation_label: interpretation.map(|i| i.label()),
        treatment_approach: interpretation
            .map(|i| i.recommendations())
            .unwrap_or_default(),
    }))
}

pub async fn score_dlqi(Json(req): Json<DlqiRequest>) -> Result<Json<DlqiResponse>, ApiError> {
    let result = compute_dlqi(&req.answers)?;
    let impact = result.impact();
    tracing::info!(total = result.total, answered = result.answered_count, "scored DLQI");
    Ok(Json(DlqiResponse {
        result,
        impact,
        impact_label: impact.map(|i| i.label()),
    }))
}

pub async fn score_severity(
    Json(req): Json<SeverityRequest>,
) -> Result<Json<SeverityResponse>, ApiError> {
    let tier = classify_severity(req.pasi, req.bsa, req.dlqi)?;
    tracing::info!(tier = ?tier, "classified");
    Ok(Json(SeverityResponse {
        tier,
        label: tier.label(),
    }))
}
