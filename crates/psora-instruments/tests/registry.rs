use psora_instruments::scoring::{ScoreEntry, ScoreType};
use psora_instruments::{all_instruments, get_instrument};

fn entry(item_id: &str, value: f64) -> ScoreEntry {
    ScoreEntry {
        item_id: item_id.to_string(),
        value,
    }
}

#[test]
fn registry_lists_every_instrument_once() {
    let ids: Vec<String> = all_instruments().iter().map(|i| i.id().to_string()).collect();
    assert_eq!(ids, vec!["diagnostic", "pasi", "bsa", "dlqi"]);
}

#[test]
fn unknown_instrument_is_none() {
    assert!(get_instrument("pga").is_none());
}

#[test]
fn pasi_schema_has_four_regions_of_four_items() {
    let pasi = get_instrument("pasi").unwrap();
    assert_eq!(pasi.domains().len(), 4);
    for domain in pasi.domains() {
        assert_eq!(domain.items.len(), 4, "{}", domain.id);
    }
    let head = &pasi.domains()[0];
    assert!(head.items.iter().any(|i| i.id == "head_erythema"));
    assert!(
        head.items
            .iter()
            .any(|i| i.id == "head_area" && i.score_type == ScoreType::Percentage)
    );
}

#[test]
fn dlqi_schema_has_ten_questions() {
    let dlqi = get_instrument("dlqi").unwrap();
    let items: Vec<_> = dlqi.domains().iter().flat_map(|d| &d.items).collect();
    assert_eq!(items.len(), 10);
    assert_eq!(items[6].options[0], "Not relevant");
    assert_eq!(items[0].options[0], "Not at all");
}

#[test]
fn diagnostic_schema_has_nineteen_questions() {
    let matrix = get_instrument("diagnostic").unwrap();
    let count: usize = matrix.domains().iter().map(|d| d.items.len()).sum();
    assert_eq!(count, 19);
}

#[test]
fn validate_scores_flags_out_of_range_values() {
    let pasi = get_instrument("pasi").unwrap();
    let errors = pasi.validate_scores(&[
        entry("trunk_erythema", 2.0),
        entry("trunk_induration", 5.0),
        entry("head_area", 100.0),
        entry("head_desquamation", 1.5),
    ]);
    let flagged: Vec<_> = errors.iter().map(|e| e.item_id.as_str()).collect();
    assert_eq!(flagged, vec!["trunk_induration", "head_desquamation"]);
    assert!(errors[0].message.starts_with("PASI:"));
}

#[test]
fn validate_scores_ignores_unknown_items_and_reports_them_separately() {
    let bsa = get_instrument("bsa").unwrap();
    let scores = [entry("palm_count", 12.0), entry("left_foot", 3.0)];
    assert!(bsa.validate_scores(&scores).is_empty());
    assert_eq!(bsa.unknown_items(&scores), vec!["left_foot".to_string()]);
}

#[test]
fn non_finite_values_are_invalid() {
    let dlqi = get_instrument("dlqi").unwrap();
    let errors = dlqi.validate_scores(&[entry("q1", f64::NAN)]);
    assert_eq!(errors.len(), 1);
}
