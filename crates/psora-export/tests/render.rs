use std::collections::BTreeMap;
use std::path::Path;

use psora_core::models::patient::{PatientProfile, Sex};
use psora_export::error::ExportError;
use psora_export::render::{load_template, render_default_report, render_report};
use psora_instruments::assessment::{AssessmentReport, AssessmentState};
use psora_instruments::compute_pasi;
use psora_instruments::instruments::bsa::{estimate_bsa, BsaRegion};
use psora_instruments::instruments::pasi::{PasiRegion, RegionRating};
use psora_instruments::instruments::subtype::{identify_subtypes, PsoriasisType};

fn sample_report() -> AssessmentReport {
    let mut regions = PasiRegion::ALL.map(RegionRating::clear);
    regions[2] = RegionRating::new(PasiRegion::Trunk, 10, 2, 2, 2);

    let estimates = BTreeMap::from([(BsaRegion::Chest, 20)]);
    let patient = PatientProfile {
        mrn: Some("MRN-0042".to_string()),
        ..PatientProfile::new("Jordan Reyes", 15, Sex::Female)
    };

    let mut report = AssessmentState::new()
        .with_patient(patient)
        .with_subtypes(identify_subtypes(&[PsoriasisType::Guttate]))
        .with_pasi(compute_pasi(&regions).unwrap())
        .with_bsa(estimate_bsa(Some(15), Some(&estimates)).unwrap())
        .report()
        .unwrap();
    report.generated_at = "2026-03-01T09:00:00Z".parse::<jiff::Timestamp>().unwrap();
    report
}

#[test]
fn default_template_summarizes_the_assessment() {
    let rendered = render_default_report(&sample_report()).unwrap();

    assert!(rendered.starts_with("# Psoriasis Assessment Report"));
    assert!(rendered.contains("**Generated:** 2026-03-01T09:00:00Z"));
    assert!(rendered.contains("- **Name:** Jordan Reyes"));
    assert!(rendered.contains("- **MRN:** MRN-0042"));
    assert!(rendered.contains("## Severity: Severe Psoriasis"));
    assert!(rendered.contains("| PASI | 3.6 | 0-72 |"));
    assert!(rendered.contains("| Trunk | 10% | 2 | 2 | 2 | 3.6 |"));
    assert!(rendered.contains("- **Guttate Psoriasis:**"));
    assert!(rendered.contains("Weight-based dosing required for all medications"));
}

#[test]
fn sections_without_data_are_omitted() {
    let rendered = render_default_report(&sample_report()).unwrap();
    assert!(!rendered.contains("## Diagnostic Matrix"));
    assert!(!rendered.contains("## DLQI Domains"));
    assert!(!rendered.contains("Quality of life"));
    assert!(!rendered.contains("Disease duration"));
}

#[test]
fn zero_year_disease_duration_is_shown() {
    let mut report = sample_report();
    report.patient.disease_duration_years = Some(0);
    report.outcome.disease_duration = report.patient.disease_duration();

    let rendered = render_default_report(&report).unwrap();
    assert!(rendered.contains("- **Disease duration:** 0 years"));
}

#[test]
fn custom_template_sees_report_fields() {
    let rendered = render_report(
        "custom",
        "{{ patient.name }}: {{ outcome.tier }} ({{ outcome.age_band }})",
        &sample_report(),
    )
    .unwrap();
    assert_eq!(rendered, "Jordan Reyes: severe (pediatric)");
}

#[test]
fn malformed_template_is_a_parse_error() {
    let err = render_report("broken", "{% if patient %}", &sample_report()).unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}

#[test]
fn unknown_variable_is_a_render_error() {
    let err = render_report("missing", "{{ clinic.name }}", &sample_report()).unwrap_err();
    assert!(matches!(err, ExportError::TemplateRender(_)));
}

#[test]
fn missing_template_file_is_reported() {
    let err = load_template(Path::new("/nonexistent/report.md")).unwrap_err();
    assert!(matches!(err, ExportError::TemplateNotFound(_)));
}
