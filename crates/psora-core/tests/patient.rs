use psora_core::error::CoreError;
use psora_core::models::patient::{PatientProfile, Sex};
use psora_core::models::severity::{AgeBand, DiseaseDuration, SeverityTier};
use psora_core::schema::{registration_fields, FieldKind};

#[test]
fn complete_profile_passes_gate() {
    let patient = PatientProfile::new("Jane Doe", 42, Sex::Female);
    assert!(patient.ensure_complete().is_ok());
}

#[test]
fn empty_profile_lists_every_missing_field() {
    let err = PatientProfile::default().ensure_complete().unwrap_err();
    match err {
        CoreError::IncompleteAssessment { missing } => {
            assert_eq!(missing, vec!["name", "age", "sex"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn whitespace_name_counts_as_missing() {
    let patient = PatientProfile::new("   ", 30, Sex::Male);
    assert_eq!(patient.missing_fields(), vec!["name"]);
}

#[test]
fn age_above_limit_is_rejected() {
    let patient = PatientProfile::new("Old Timer", 121, Sex::Other);
    assert!(matches!(
        patient.ensure_complete(),
        Err(CoreError::InvalidField { ref field, .. }) if field == "age"
    ));
}

#[test]
fn disease_duration_above_limit_is_rejected() {
    let patient = PatientProfile {
        disease_duration_years: Some(51),
        ..PatientProfile::new("Pat", 40, Sex::Male)
    };
    assert!(patient.ensure_complete().is_err());
}

#[test]
fn age_band_boundaries() {
    assert_eq!(AgeBand::from_age(1), AgeBand::Pediatric);
    assert_eq!(AgeBand::from_age(17), AgeBand::Pediatric);
    assert_eq!(AgeBand::from_age(18), AgeBand::Adult);
    assert_eq!(AgeBand::from_age(64), AgeBand::Adult);
    assert_eq!(AgeBand::from_age(65), AgeBand::Elderly);
    assert_eq!(AgeBand::from_age(120), AgeBand::Elderly);
}

#[test]
fn disease_duration_boundary() {
    let mut patient = PatientProfile::new("Pat", 40, Sex::Male);
    assert_eq!(patient.disease_duration(), None);
    patient.disease_duration_years = Some(1);
    assert_eq!(patient.disease_duration(), Some(DiseaseDuration::NewOnset));
    patient.disease_duration_years = Some(2);
    assert_eq!(patient.disease_duration(), Some(DiseaseDuration::Established));
}

#[test]
fn tier_and_band_parse_case_insensitively() {
    assert_eq!("Severe".parse::<SeverityTier>().unwrap(), SeverityTier::Severe);
    assert_eq!(" elderly ".parse::<AgeBand>().unwrap(), AgeBand::Elderly);
    assert!("critical".parse::<SeverityTier>().is_err());
    assert!("teen".parse::<AgeBand>().is_err());
}

#[test]
fn profile_deserializes_with_missing_optional_fields() {
    let patient: PatientProfile =
        serde_json::from_str(r#"{"name":"Ana","age":33,"sex":"female"}"#).unwrap();
    assert_eq!(patient.sex, Some(Sex::Female));
    assert!(patient.mrn.is_none());
    assert!(patient.ensure_complete().is_ok());
}

#[test]
fn registration_schema_marks_required_fields() {
    let fields = registration_fields();
    let required: Vec<_> = fields
        .iter()
        .filter(|f| f.required)
        .map(|f| f.id.as_str())
        .collect();
    assert_eq!(required, vec!["name", "age", "sex"]);

    let age = fields.iter().find(|f| f.id == "age").unwrap();
    assert_eq!(age.kind, FieldKind::Integer { min: 1, max: 120 });
}
