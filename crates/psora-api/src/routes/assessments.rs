use axum::Json;
use serde::Deserialize;

use psora_core::models::patient::PatientProfile;
use psora_instruments::assessment::{AssessmentOutcome, AssessmentState};
use psora_instruments::error::InstrumentError;
use psora_instruments::instruments::bsa::estimate_bsa;
use psora_instruments::instruments::diagnostic::{score_diagnostic, DiagnosticAnswers};
use psora_instruments::instruments::dlqi::{compute_dlqi, DlqiAnswer};
use psora_instruments::instruments::pasi::{compute_pasi, RegionRating};
use psora_instruments::instruments::subtype::{identify_subtypes, PsoriasisType};

use super::scores::BsaRequest;
use crate::error::ApiError;

/// Raw inputs of one assessment. Each instrument section is optional;
/// absent sections count as not assessed.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AssessmentRequest {
    pub patient: Option<PatientProfile>,
    pub diagnostic: Option<DiagnosticAnswers>,
    pub subtypes: Vec<PsoriasisType>,
    pub pasi: Option<[RegionRating; 4]>,
    pub bsa: Option<BsaRequest>,
    pub dlqi: Option<Vec<Option<DlqiAnswer>>>,
}

impl AssessmentRequest {
    /// Score every supplied section and fold the results into a state.
    pub fn into_state(self) -> Result<AssessmentState, InstrumentError> {
        let mut state = AssessmentState::new();
        if let Some(patient) = self.patient {
            state = state.with_patient(patient);
        }
        if let Some(answers) = &self.diagnostic {
            state = state.with_diagnostic(score_diagnostic(answers)?);
        }
        if !self.subtypes.is_empty() {
            state = state.with_subtypes(identify_subtypes(&self.subtypes));
        }
        if let Some(regions) = &self.pasi {
            state = state.with_pasi(compute_pasi(regions)?);
        }
        if let Some(bsa) = &self.bsa {
            state = state.with_bsa(estimate_bsa(bsa.palm_count, bsa.regional.as_ref())?);
        }
        if let Some(answers) = &self.dlqi {
            state = state.with_dlqi(compute_dlqi(answers)?);
        }
        Ok(state)
    }
}

pub async fn assessment_outcome(
    Json(req): Json<AssessmentRequest>,
) -> Result<Json<AssessmentOutcome>, ApiError> {
    let outcome = req.into_state()?.outcome()?;
    tracing::info!(
        tier = ?outcome.tier,
        age_band = ?outcome.age_band,
        pasi = outcome.pasi,
        bsa = outcome.bsa,
        dlqi = outcome.dlqi,
        "classified"
    );
    Ok(Json(outcome))
}
