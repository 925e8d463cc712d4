//! psora-export
//!
//! Assessment report rendering (Tera) and DOCX generation.

pub mod docx;
pub mod error;
pub mod render;
pub mod styles;
