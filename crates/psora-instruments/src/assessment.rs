//! Immutable assessment state threaded through the workflow.
//!
//! Each `with_*` call consumes the state and returns a new one carrying the
//! extra result. Scoring functions never see or touch the state; callers
//! compute a result and attach it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use psora_core::models::patient::PatientProfile;
use psora_core::models::severity::{AgeBand, DiseaseDuration, SeverityTier};

use crate::error::InstrumentError;
use crate::instruments::bsa::BsaResult;
use crate::instruments::diagnostic::DiagnosticResult;
use crate::instruments::dlqi::{DlqiImpact, DlqiResult};
use crate::instruments::pasi::PasiResult;
use crate::instruments::subtype::SubtypeFinding;
use crate::recommendations::{get_recommendations, RecommendationSet};
use crate::severity::classify_severity;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentState {
    #[serde(default)]
    pub patient: Option<PatientProfile>,
    #[serde(default)]
    pub diagnostic: Option<DiagnosticResult>,
    #[serde(default)]
    pub subtypes: Vec<SubtypeFinding>,
    #[serde(default)]
    pub pasi: Option<PasiResult>,
    #[serde(default)]
    pub bsa: Option<BsaResult>,
    #[serde(default)]
    pub dlqi: Option<DlqiResult>,
}

impl AssessmentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patient(self, patient: PatientProfile) -> Self {
        Self {
            patient: Some(patient),
            ..self
        }
    }

    pub fn with_diagnostic(self, diagnostic: DiagnosticResult) -> Self {
        Self {
            diagnostic: Some(diagnostic),
            ..self
        }
    }

    pub fn with_subtypes(self, subtypes: Vec<SubtypeFinding>) -> Self {
        Self { subtypes, ..self }
    }

    pub fn with_pasi(self, pasi: PasiResult) -> Self {
        Self {
            pasi: Some(pasi),
            ..self
        }
    }

    pub fn with_bsa(self, bsa: BsaResult) -> Self {
        Self {
            bsa: Some(bsa),
            ..self
        }
    }

    pub fn with_dlqi(self, dlqi: DlqiResult) -> Self {
        Self {
            dlqi: Some(dlqi),
            ..self
        }
    }

    /// PASI total, 0 when not assessed.
    pub fn pasi_total(&self) -> f64 {
        self.pasi.as_ref().map_or(0.0, |p| p.total)
    }

    /// BSA total, 0 when not assessed.
    pub fn bsa_total(&self) -> f64 {
        self.bsa.as_ref().map_or(0.0, |b| b.total)
    }

    /// DLQI total, 0 when not assessed.
    pub fn dlqi_total(&self) -> u8 {
        self.dlqi.as_ref().map_or(0, |d| d.total)
    }

    /// The registered patient, once every required field is present.
    pub fn registered_patient(&self) -> Result<&PatientProfile, InstrumentError> {
        let patient = self.patient.as_ref().ok_or_else(|| {
            psora_core::error::CoreError::IncompleteAssessment {
                missing: vec!["patient".to_string()],
            }
        })?;
        patient.ensure_complete()?;
        Ok(patient)
    }

    /// Classify the current scores and look up the matching guidance.
    pub fn outcome(&self) -> Result<AssessmentOutcome, InstrumentError> {
        let patient = self.registered_patient()?;
        let age_band = patient.age_band();

        let pasi = self.pasi_total();
        let bsa = self.bsa_total();
        let dlqi = self.dlqi_total();
        let tier = classify_severity(pasi, bsa, dlqi)?;

        Ok(AssessmentOutcome {
            tier,
            tier_label: tier.label().to_string(),
            age_band,
            disease_duration: patient.disease_duration(),
            pasi,
            bsa,
            dlqi,
            dlqi_impact: self.dlqi.as_ref().and_then(DlqiResult::impact),
            recommendations: get_recommendations(tier, age_band)?,
        })
    }

    /// Everything a printable report needs, stamped with a fresh id.
    pub fn report(&self) -> Result<AssessmentReport, InstrumentError> {
        let outcome = self.outcome()?;
        let patient = self.registered_patient()?.clone();
        Ok(AssessmentReport {
            id: Uuid::new_v4(),
            generated_at: jiff::Timestamp::now(),
            patient,
            dlqi_impact_label: outcome.dlqi_impact.map(|i| i.label().to_string()),
            outcome,
            diagnostic: self.diagnostic.clone(),
            subtypes: self.subtypes.clone(),
            pasi: self.pasi.clone(),
            bsa: self.bsa.clone(),
            dlqi: self.dlqi.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentOutcome {
    pub tier: SeverityTier,
    pub tier_label: String,
    pub age_band: AgeBand,
    pub disease_duration: Option<DiseaseDuration>,
    pub pasi: f64,
    pub bsa: f64,
    pub dlqi: u8,
    /// `None` when no DLQI question was answered.
    pub dlqi_impact: Option<DlqiImpact>,
    pub recommendations: RecommendationSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentReport {
    pub id: Uuid,
    pub generated_at: jiff::Timestamp,
    pub patient: PatientProfile,
    pub outcome: AssessmentOutcome,
    pub dlqi_impact_label: Option<String>,
    pub diagnostic: Option<DiagnosticResult>,
    pub subtypes: Vec<SubtypeFinding>,
    pub pasi: Option<PasiResult>,
    pub bsa: Option<BsaResult>,
    pub dlqi: Option<DlqiResult>,
}
