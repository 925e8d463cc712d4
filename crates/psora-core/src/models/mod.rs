pub mod patient;
pub mod severity;
