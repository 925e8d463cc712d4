//! psora-core
//!
//! Pure domain types shared by every Psora crate: the patient profile,
//! derived age and duration bands, the severity tier, and the registration
//! form schema. No scoring logic lives here.

pub mod error;
pub mod models;
pub mod schema;
