//! Overall severity classification by the Rule of Tens.
//!
//! Severe when any of PASI, BSA or DLQI reaches 10; Moderate when any
//! reaches 5; Mild otherwise.

use psora_core::models::severity::SeverityTier;

use crate::error::{ensure_in_range, InstrumentError};
use crate::instruments::bsa::MAX_BSA;
use crate::instruments::dlqi::MAX_DLQI;
use crate::instruments::pasi::MAX_PASI;

const SEVERE_THRESHOLD: f64 = 10.0;
const MODERATE_THRESHOLD: f64 = 5.0;

pub fn classify_severity(pasi: f64, bsa: f64, dlqi: u8) -> Result<SeverityTier, InstrumentError> {
    ensure_in_range("pasi", pasi, 0.0, MAX_PASI)?;
    ensure_in_range("bsa", bsa, 0.0, MAX_BSA)?;
    ensure_in_range("dlqi", f64::from(dlqi), 0.0, f64::from(MAX_DLQI))?;

    let dlqi = f64::from(dlqi);
    let any_at_least = |threshold: f64| pasi >= threshold || bsa >= threshold || dlqi >= threshold;

    let tier = if any_at_least(SEVERE_THRESHOLD) {
        SeverityTier::Severe
    } else if any_at_least(MODERATE_THRESHOLD) {
        SeverityTier::Moderate
    } else {
        SeverityTier::Mild
    };
    tracing::debug!(pasi, bsa, dlqi, %tier, "classified severity");
    Ok(tier)
}
