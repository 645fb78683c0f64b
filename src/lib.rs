//! Synthetic HL7 ELR message generation.
//!
//! elr-forge fills a fixed ELR (electronic lab report) template with
//! synthetic patient demographics. Fields the caller supplies are used
//! verbatim; blank fields get plausible fake values; a handful of
//! fields (SSN, email, unit designator, timestamp) are always freshly
//! generated.
//!
//! # Example
//!
//! ```rust
//! use elr_forge::{resolve_and_render, PatientInput, ReportKind};
//!
//! let input = PatientInput {
//!     first_name: "Ana".to_string(),
//!     city: "Athens".to_string(),
//!     ..PatientInput::default()
//! };
//!
//! let elr = resolve_and_render(&input, ReportKind::HepbPrelim).unwrap();
//! assert!(elr.starts_with("MSH|"));
//! assert!(elr.contains("Ana"));
//! ```

pub use elr_core::{render, InputError, PatientInput, PatientRecord, ReportKind, Token};
pub use elr_generator::{FakeProvider, PatientGenerator, SyntheticProvider};
pub use elr_templates::{TemplateBank, TemplateError};

/// Resolve user input into a full patient record and render the ELR
/// template for `kind` from the built-in bank.
///
/// This is the single entry point most callers need: coalesce,
/// generation of the always-random fields, and substitution in one
/// call. The built-in bank covers every [`ReportKind`], so the only
/// error path is unreachable in practice; it exists because custom
/// banks (see [`resolve_and_render_with`]) may be partial.
pub fn resolve_and_render(
    input: &PatientInput,
    kind: ReportKind,
) -> Result<String, TemplateError> {
    let mut generator = PatientGenerator::new();
    resolve_and_render_with(&mut generator, &TemplateBank::builtin(), input, kind)
}

/// [`resolve_and_render`] with an explicit generator and template bank.
///
/// Lets callers seed the generator, inject a custom
/// [`SyntheticProvider`], or render against a custom bank. A bank
/// without a template for `kind` is a configuration error and is
/// propagated, never defaulted.
pub fn resolve_and_render_with<P: SyntheticProvider>(
    generator: &mut PatientGenerator<P>,
    bank: &TemplateBank,
    input: &PatientInput,
    kind: ReportKind,
) -> Result<String, TemplateError> {
    let patient = generator.resolve(input);
    bank.render(kind, &patient)
}
