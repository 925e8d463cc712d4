use std::collections::BTreeMap;

use psora_instruments::compute_bsa;
use psora_instruments::error::InstrumentError;
use psora_instruments::instruments::bsa::{
    estimate_bsa, regional_method, BsaInterpretation, BsaRegion,
};

#[test]
fn proportions_sum_to_100() {
    let sum: u32 = BsaRegion::ALL.iter().map(BsaRegion::proportion).sum();
    assert_eq!(sum, 100);
}

#[test]
fn no_input_is_zero() {
    let result = estimate_bsa(None, None).unwrap();
    assert_eq!(result.total, 0.0);
    assert!(!result.is_assessed());
}

#[test]
fn palm_wins_when_larger() {
    let estimates = BTreeMap::from([
        (BsaRegion::BothArms, 50),
        (BsaRegion::UpperBack, 30),
        (BsaRegion::Genitals, 30),
    ]);
    assert_eq!(regional_method(&estimates).unwrap(), 12.0);

    let result = estimate_bsa(Some(15), Some(&estimates)).unwrap();
    assert_eq!(result.palm, Some(15.0));
    assert_eq!(result.regional, Some(12.0));
    assert_eq!(result.total, 15.0);
    assert_eq!(compute_bsa(Some(15), Some(&estimates)).unwrap(), 15.0);
}

#[test]
fn regional_wins_when_larger() {
    let estimates = BTreeMap::from([(BsaRegion::BothLegs, 50)]);
    assert_eq!(compute_bsa(Some(3), Some(&estimates)).unwrap(), 18.0);
}

#[test]
fn full_coverage_is_100() {
    let estimates: BTreeMap<_, _> = BsaRegion::ALL.iter().map(|r| (*r, 100)).collect();
    assert_eq!(compute_bsa(None, Some(&estimates)).unwrap(), 100.0);
}

#[test]
fn palm_count_above_100_is_rejected() {
    assert!(matches!(
        compute_bsa(Some(101), None),
        Err(InstrumentError::InvalidInput { ref field, .. }) if field == "palm_count"
    ));
}

#[test]
fn regional_percentage_above_100_is_rejected() {
    let estimates = BTreeMap::from([(BsaRegion::Chest, 120)]);
    assert!(matches!(
        compute_bsa(None, Some(&estimates)),
        Err(InstrumentError::InvalidInput { ref field, .. }) if field == "chest.affected_percentage"
    ));
}

#[test]
fn empty_region_map_counts_as_assessed_zero() {
    let result = estimate_bsa(None, Some(&BTreeMap::new())).unwrap();
    assert!(result.is_assessed());
    assert_eq!(result.total, 0.0);
}

#[test]
fn interpretation_bands() {
    let cases = [
        (0.5, BsaInterpretation::Mild),
        (2.99, BsaInterpretation::Mild),
        (3.0, BsaInterpretation::Moderate),
        (10.0, BsaInterpretation::Moderate),
        (10.01, BsaInterpretation::Severe),
        (100.0, BsaInterpretation::Severe),
    ];
    for (total, expected) in cases {
        assert_eq!(BsaInterpretation::from_total(total), expected, "total {total}");
    }
    assert_eq!(
        BsaInterpretation::Severe.recommendations()[0],
        "Systemic therapy indicated"
    );
}

#[test]
fn interpretation_needs_affected_surface() {
    assert_eq!(estimate_bsa(None, None).unwrap().interpretation(), None);
    assert_eq!(estimate_bsa(Some(0), None).unwrap().interpretation(), None);

    let result = estimate_bsa(Some(10), None).unwrap();
    assert_eq!(result.interpretation(), Some(BsaInterpretation::Moderate));

    let estimates = BTreeMap::from([(BsaRegion::Genitals, 100)]);
    let result = estimate_bsa(None, Some(&estimates)).unwrap();
    assert_eq!(result.interpretation(), Some(BsaInterpretation::Mild));
}
