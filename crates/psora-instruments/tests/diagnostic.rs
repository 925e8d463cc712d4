use psora_instruments::error::InstrumentError;
use psora_instruments::instruments::diagnostic::{
    score_diagnostic, DiagnosticAnswers, MatrixSection, Probability, MAX_DIAGNOSTIC_SCORE,
};
use psora_instruments::instruments::subtype::{identify_subtypes, PsoriasisType, SubtypeAlert};

#[test]
fn no_answers_is_low_probability() {
    let result = score_diagnostic(&DiagnosticAnswers::default()).unwrap();
    assert_eq!(result.total, 0);
    assert_eq!(result.probability, Probability::Low);
    assert_eq!(result.sections.len(), MatrixSection::ALL.len());
}

#[test]
fn all_positive_findings_reach_the_maximum() {
    let result = score_diagnostic(&DiagnosticAnswers::with_yes(1..=14)).unwrap();
    assert_eq!(result.total, MAX_DIAGNOSTIC_SCORE);
    assert_eq!(result.max_total, MAX_DIAGNOSTIC_SCORE);
    assert_eq!(result.probability, Probability::High);
    for section in &result.sections {
        assert_eq!(section.score, section.max, "{}", section.name);
    }
}

#[test]
fn exclusion_criteria_subtract() {
    let result = score_diagnostic(&DiagnosticAnswers::with_yes(1..=19)).unwrap();
    // 38 - (3 + 3 + 5 + 2 + 2)
    assert_eq!(result.total, 23);

    let exclusions = result
        .sections
        .iter()
        .find(|s| s.section == MatrixSection::ExclusionCriteria)
        .unwrap();
    assert_eq!(exclusions.score, -15);
    assert_eq!(exclusions.max, 0);
}

#[test]
fn probability_thresholds() {
    assert_eq!(Probability::from_total(18), Probability::High);
    assert_eq!(Probability::from_total(17), Probability::Moderate);
    assert_eq!(Probability::from_total(12), Probability::Moderate);
    assert_eq!(Probability::from_total(11), Probability::Low);
    assert_eq!(Probability::from_total(-15), Probability::Low);
}

#[test]
fn moderate_case() {
    // Plaques, scale, Auspitz sign, six weeks: 3 + 3 + 4 + 2
    let result = score_diagnostic(&DiagnosticAnswers::with_yes([1, 2, 5, 9])).unwrap();
    assert_eq!(result.total, 12);
    assert_eq!(result.probability, Probability::Moderate);
}

#[test]
fn unknown_question_numbers_are_rejected() {
    for number in [0, 20] {
        assert!(matches!(
            score_diagnostic(&DiagnosticAnswers::with_yes([number])),
            Err(InstrumentError::UnknownItem { .. })
        ));
    }
}

#[test]
fn subtypes_keep_first_seen_order_without_repeats() {
    let findings = identify_subtypes(&[
        PsoriasisType::Nail,
        PsoriasisType::Plaque,
        PsoriasisType::Nail,
    ]);
    let kinds: Vec<_> = findings.iter().map(|f| f.subtype).collect();
    assert_eq!(kinds, vec![PsoriasisType::Nail, PsoriasisType::Plaque]);
    assert!(findings.iter().all(|f| f.alert.is_none()));
}

#[test]
fn severe_subtypes_carry_alerts() {
    let findings = identify_subtypes(&[
        PsoriasisType::Erythrodermic,
        PsoriasisType::Pustular,
        PsoriasisType::PsoriaticArthritis,
    ]);
    let alerts: Vec<_> = findings.iter().map(|f| f.alert).collect();
    assert_eq!(
        alerts,
        vec![
            Some(SubtypeAlert::Emergency),
            Some(SubtypeAlert::Urgent),
            Some(SubtypeAlert::RheumatologyReferral),
        ]
    );
    assert!(findings[0].locations.iter().any(|l| l.contains("Whole Body")));
}

#[test]
fn no_subtypes_selected() {
    assert!(identify_subtypes(&[]).is_empty());
}
