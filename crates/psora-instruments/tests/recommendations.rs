use psora_core::models::severity::{AgeBand, SeverityTier};
use psora_instruments::error::InstrumentError;
use psora_instruments::get_recommendations;
use psora_instruments::recommendations::lookup_recommendations;

#[test]
fn every_tier_and_band_has_an_entry() {
    for tier in SeverityTier::ALL {
        for band in AgeBand::ALL {
            let set = get_recommendations(tier, band).unwrap();
            assert_eq!(set.tier, tier);
            assert_eq!(set.age_band, band);
            assert!(!set.headline.is_empty());
            assert!(!set.treatments.is_empty());
            assert!(!set.monitoring.is_empty());
            assert!(!set.goals.is_empty());
        }
    }
}

#[test]
fn pediatric_caveats_mention_weight_based_dosing() {
    let set = get_recommendations(SeverityTier::Mild, AgeBand::Pediatric).unwrap();
    assert!(set.caveats.iter().any(|c| c.contains("Weight-based dosing")));
}

#[test]
fn elderly_caveats_mention_comorbidities() {
    let set = get_recommendations(SeverityTier::Severe, AgeBand::Elderly).unwrap();
    assert!(set.caveats.iter().any(|c| c.contains("comorbidities")));
}

#[test]
fn adults_have_no_caveats() {
    let set = get_recommendations(SeverityTier::Moderate, AgeBand::Adult).unwrap();
    assert!(set.caveats.is_empty());
}

#[test]
fn severe_tier_leads_with_biologics() {
    let set = get_recommendations(SeverityTier::Severe, AgeBand::Adult).unwrap();
    assert_eq!(set.treatments[0], "Biologic therapy preferred");
}

#[test]
fn lookup_is_deterministic() {
    let a = get_recommendations(SeverityTier::Moderate, AgeBand::Elderly).unwrap();
    let b = get_recommendations(SeverityTier::Moderate, AgeBand::Elderly).unwrap();
    assert_eq!(a, b);
}

#[test]
fn string_lookup_accepts_any_case() {
    let set = lookup_recommendations("Severe", "pediatric").unwrap();
    assert_eq!(set.tier, SeverityTier::Severe);
    assert_eq!(set.age_band, AgeBand::Pediatric);
}

#[test]
fn string_lookup_rejects_unknown_names() {
    match lookup_recommendations("critical", "adult") {
        Err(InstrumentError::UnsupportedLookup { tier, age_band }) => {
            assert_eq!(tier, "critical");
            assert_eq!(age_band, "adult");
        }
        other => panic!("expected unsupported lookup, got {other:?}"),
    }
    assert!(matches!(
        lookup_recommendations("mild", "infant"),
        Err(InstrumentError::UnsupportedLookup { .. })
    ));
}
