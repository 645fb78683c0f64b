//! Core types for the elr-forge ELR generator.
//!
//! This crate provides the foundational types shared across the
//! generator:
//!
//! - [`PatientRecord`] - A fully resolved set of patient demographic fields
//! - [`PatientInput`] - Partial user input; blank fields are generated later
//! - [`ReportKind`] - The template category (disease + report status)
//! - [`Token`] - The fixed set of placeholder tokens recognized in templates
//! - [`render`] - Single-pass token substitution into a template string
//!
//! # Architecture
//!
//! ```text
//! elr-core (this crate)
//!    │
//!    ├─── elr-generator  (resolves PatientInput into PatientRecord)
//!    │
//!    └─── elr-templates  (maps ReportKind to template text)
//! ```

pub mod patient;
pub mod render;
pub mod report;
pub mod token;

// Re-exports for convenience
pub use patient::{InputError, PatientInput, PatientRecord};
pub use render::render;
pub use report::ReportKind;
pub use token::Token;
