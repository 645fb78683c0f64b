//! Synthetic patient field generators for elr-forge.
//!
//! This crate produces the fake demographic values that fill an ELR
//! template. The low-level generators in [`fields`] are free functions
//! generic over [`rand::Rng`]; [`PatientGenerator`] ties them together
//! with a [`SyntheticProvider`] and resolves a partial
//! [`PatientInput`](elr_core::PatientInput) into a complete
//! [`PatientRecord`](elr_core::PatientRecord).
//!
//! # Example
//!
//! ```rust
//! use elr_core::PatientInput;
//! use elr_generator::PatientGenerator;
//!
//! let input = PatientInput {
//!     first_name: "Ana".to_string(),
//!     ..PatientInput::default()
//! };
//!
//! let mut generator = PatientGenerator::seeded(42);
//! let patient = generator.resolve(&input);
//!
//! assert_eq!(patient.first_name, "Ana");
//! assert_eq!(patient.ssn.len(), 9);
//! ```

pub mod fields;
pub mod generator;
pub mod provider;
pub mod testing;

// Re-exports for convenience
pub use generator::PatientGenerator;
pub use provider::{FakeProvider, SyntheticProvider};
