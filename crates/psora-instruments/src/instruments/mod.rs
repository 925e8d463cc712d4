pub mod bsa;
pub mod diagnostic;
pub mod dlqi;
pub mod pasi;
pub mod subtype;
