//! psora-instruments
//!
//! Psoriasis assessment instruments. Pure computation, no I/O. Defines the
//! item schema and scoring rules for PASI, BSA, DLQI and the diagnostic
//! matrix, the Rule of Tens severity classifier, and the static treatment
//! recommendation table.

pub mod assessment;
pub mod error;
pub mod instruments;
pub mod recommendations;
pub mod scoring;
pub mod severity;

use scoring::{Domain, ScoreEntry, ValidationError};

pub use instruments::bsa::compute_bsa;
pub use instruments::dlqi::compute_dlqi;
pub use instruments::pasi::compute_pasi;
pub use recommendations::get_recommendations;
pub use severity::classify_severity;

/// Trait implemented by each assessment instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "pasi", "dlqi").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PASI", "DLQI").
    fn name(&self) -> &str;

    /// The domains and items this instrument collects.
    fn domains(&self) -> &[Domain];

    /// Validate a set of raw item entries against this instrument's schema.
    /// Entries for ids the instrument does not define are ignored.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let all_items: Vec<_> = self.domains().iter().flat_map(|d| &d.items).collect();

        let mut errors = Vec::new();
        for entry in scores {
            if let Some(item) = all_items.iter().find(|i| i.id == entry.item_id)
                && !item.range.contains(entry.value)
            {
                errors.push(ValidationError {
                    item_id: entry.item_id.clone(),
                    value: entry.value,
                    expected_range: item.range,
                    score_type: item.score_type,
                    message: format!(
                        "{}: {} value {} is outside range [{}, {}]",
                        self.name(),
                        item.name,
                        entry.value,
                        item.range.min,
                        item.range.max,
                    ),
                });
            }
        }
        errors
    }

    /// Ids of the entries that match no item of this instrument.
    fn unknown_items(&self, scores: &[ScoreEntry]) -> Vec<String> {
        scores
            .iter()
            .filter(|entry| {
                !self
                    .domains()
                    .iter()
                    .flat_map(|d| &d.items)
                    .any(|i| i.id == entry.item_id)
            })
            .map(|entry| entry.item_id.clone())
            .collect()
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::diagnostic::DiagnosticMatrix),
        Box::new(instruments::pasi::Pasi),
        Box::new(instruments::bsa::Bsa),
        Box::new(instruments::dlqi::Dlqi),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
