use std::collections::BTreeMap;

use proptest::prelude::*;

use psora_instruments::instruments::bsa::{BsaRegion, MAX_BSA};
use psora_instruments::instruments::dlqi::{DlqiAnswer, MAX_DLQI};
use psora_instruments::instruments::pasi::{PasiRegion, RegionRating, MAX_PASI};
use psora_instruments::{classify_severity, compute_bsa, compute_dlqi, compute_pasi};

fn region_rating(region: PasiRegion) -> impl Strategy<Value = RegionRating> {
    (0u8..=100, 0u8..=4, 0u8..=4, 0u8..=4).prop_map(move |(area, e, i, d)| {
        RegionRating::new(region, area, e, i, d)
    })
}

fn all_regions() -> impl Strategy<Value = [RegionRating; 4]> {
    (
        region_rating(PasiRegion::Head),
        region_rating(PasiRegion::UpperLimbs),
        region_rating(PasiRegion::Trunk),
        region_rating(PasiRegion::LowerLimbs),
    )
        .prop_map(|(a, b, c, d)| [a, b, c, d])
}

/// Total before and after `change` is applied to the region at `index`.
fn raise(
    regions: [RegionRating; 4],
    index: usize,
    change: impl FnOnce(&mut RegionRating),
) -> (f64, f64) {
    let before = compute_pasi(&regions).unwrap().total;
    let mut raised = regions;
    change(&mut raised[index]);
    (before, compute_pasi(&raised).unwrap().total)
}

fn region_estimates() -> impl Strategy<Value = BTreeMap<BsaRegion, u32>> {
    proptest::collection::btree_map(
        proptest::sample::select(BsaRegion::ALL.to_vec()),
        0u32..=100,
        0..=4,
    )
}

fn dlqi_answer() -> impl Strategy<Value = Option<DlqiAnswer>> {
    prop_oneof![
        Just(None),
        (0u8..=3).prop_map(|i| Some(DlqiAnswer::Selected(i))),
    ]
}

proptest! {
    #[test]
    fn pasi_stays_within_bounds(regions in all_regions()) {
        let total = compute_pasi(&regions).unwrap().total;
        prop_assert!((0.0..=MAX_PASI).contains(&total));
    }

    #[test]
    fn pasi_never_drops_when_erythema_rises(
        regions in all_regions(),
        index in 0usize..4,
        step in 1u8..=4,
    ) {
        let (before, after) =
            raise(regions, index, |r| r.erythema = (r.erythema + step).min(4));
        prop_assert!(after >= before);
    }

    #[test]
    fn pasi_never_drops_when_induration_rises(
        regions in all_regions(),
        index in 0usize..4,
        step in 1u8..=4,
    ) {
        let (before, after) =
            raise(regions, index, |r| r.induration = (r.induration + step).min(4));
        prop_assert!(after >= before);
    }

    #[test]
    fn pasi_never_drops_when_desquamation_rises(
        regions in all_regions(),
        index in 0usize..4,
        step in 1u8..=4,
    ) {
        let (before, after) =
            raise(regions, index, |r| r.desquamation = (r.desquamation + step).min(4));
        prop_assert!(after >= before);
    }

    #[test]
    fn pasi_never_drops_when_area_grows(
        regions in all_regions(),
        index in 0usize..4,
        step in 1u8..=100,
    ) {
        let (before, after) =
            raise(regions, index, |r| r.area_percentage = (r.area_percentage + step).min(100));
        prop_assert!(after >= before);
    }

    #[test]
    fn pasi_is_idempotent(regions in all_regions()) {
        prop_assert_eq!(compute_pasi(&regions).unwrap(), compute_pasi(&regions).unwrap());
    }

    #[test]
    fn bsa_stays_within_bounds(palm in proptest::option::of(0u32..=100), estimates in region_estimates()) {
        let total = compute_bsa(palm, Some(&estimates)).unwrap();
        prop_assert!((0.0..=MAX_BSA).contains(&total));
    }

    #[test]
    fn bsa_never_drops_when_palm_count_rises(
        palm in 0u32..100,
        step in 1u32..=100,
        estimates in region_estimates(),
    ) {
        let before = compute_bsa(Some(palm), Some(&estimates)).unwrap();
        let after = compute_bsa(Some((palm + step).min(100)), Some(&estimates)).unwrap();
        prop_assert!(after >= before);
    }

    #[test]
    fn bsa_never_drops_when_one_region_grows(
        estimates in region_estimates(),
        region in proptest::sample::select(BsaRegion::ALL.to_vec()),
        step in 1u32..=100,
        palm in proptest::option::of(0u32..=100),
    ) {
        let before = compute_bsa(palm, Some(&estimates)).unwrap();
        let mut raised = estimates.clone();
        let affected = raised.entry(region).or_insert(0);
        *affected = (*affected + step).min(100);
        let after = compute_bsa(palm, Some(&raised)).unwrap();
        prop_assert!(after >= before);
    }

    #[test]
    fn bsa_never_drops_when_an_absent_region_is_added(
        estimates in region_estimates(),
        region in proptest::sample::select(BsaRegion::ALL.to_vec()),
        affected in 0u32..=100,
    ) {
        let mut without = estimates;
        without.remove(&region);
        let before = compute_bsa(None, Some(&without)).unwrap();

        let mut with = without.clone();
        with.insert(region, affected);
        let after = compute_bsa(None, Some(&with)).unwrap();
        prop_assert!(after >= before);
        let added = f64::from(affected * region.proportion()) / 100.0;
        prop_assert!((after - before - added).abs() < 1e-9);
    }

    #[test]
    fn dlqi_stays_within_bounds(answers in proptest::collection::vec(dlqi_answer(), 0..=10)) {
        let result = compute_dlqi(&answers).unwrap();
        prop_assert!(result.total <= MAX_DLQI);
        prop_assert_eq!(
            usize::from(result.answered_count),
            answers.iter().filter(|a| a.is_some()).count()
        );
    }

    #[test]
    fn severity_never_decreases_as_scores_rise(
        pasi in 0.0f64..=60.0,
        bsa in 0.0f64..=90.0,
        dlqi in 0u8..=25,
    ) {
        let before = classify_severity(pasi, bsa, dlqi).unwrap();
        let after = classify_severity(pasi + 5.0, bsa + 5.0, dlqi + 5).unwrap();
        prop_assert!(after >= before);
    }
}
