//! Patient record generator.

use crate::fields;
use crate::provider::{FakeProvider, SyntheticProvider};
use elr_core::{PatientInput, PatientRecord};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Resolves a partial [`PatientInput`] into a complete
/// [`PatientRecord`], generating synthetic values for every blank
/// field.
///
/// Each user-settable field goes through coalesce: the provided value
/// is used verbatim when it is non-empty after trimming, otherwise a
/// synthetic value is generated. The check trims; the inserted value
/// is not. SSN, email, unit designator and timestamp never come from
/// input and are freshly generated on every call.
///
/// The generator owns its RNG, so sequential calls are independent
/// and a seeded instance replays the same sequence of records.
pub struct PatientGenerator<P = FakeProvider> {
    rng: StdRng,
    provider: P,
}

impl PatientGenerator<FakeProvider> {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            provider: FakeProvider::new(),
        }
    }

    /// Create a deterministic generator from a seed.
    ///
    /// The provider is derived from the same seed, so two generators
    /// built with equal seeds produce identical records (timestamps
    /// excepted, since those also depend on the wall clock).
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            provider: FakeProvider::seeded(seed),
        }
    }
}

impl Default for PatientGenerator<FakeProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SyntheticProvider> PatientGenerator<P> {
    /// Create a generator with a custom provider and OS-seeded RNG.
    pub fn with_provider(provider: P) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            provider,
        }
    }

    /// Create a generator with a custom provider and a seeded RNG.
    pub fn with_provider_seeded(provider: P, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            provider,
        }
    }

    /// Generate a string of exactly `count` random digits.
    pub fn digits(&mut self, count: usize) -> String {
        fields::digits(&mut self.rng, count)
    }

    /// Generate a synthetic surname (provider base + filler letters).
    pub fn random_last_name(&mut self) -> String {
        let base = self.provider.surname();
        fields::random_last_name(&mut self.rng, &base)
    }

    /// Generate a 12-digit timestamp between the epoch and now.
    pub fn timestamp(&mut self) -> String {
        fields::timestamp(&mut self.rng)
    }

    /// Resolve a partial input into a complete patient record.
    pub fn resolve(&mut self, input: &PatientInput) -> PatientRecord {
        PatientRecord {
            first_name: coalesce(&input.first_name, || self.provider.first_name()),
            middle_name: coalesce(&input.middle_name, || self.provider.middle_name()),
            last_name: coalesce(&input.last_name, || {
                let base = self.provider.surname();
                fields::random_last_name(&mut self.rng, &base)
            }),
            suffix: String::new(),
            sex: coalesce(&input.sex, || "M".to_string()),
            ssn: fields::digits(&mut self.rng, 9),
            email: self.provider.email(),
            street: coalesce(&input.street, || self.provider.street_address()),
            state: coalesce(&input.state, || self.provider.state_abbr()),
            city: coalesce(&input.city, || self.provider.city()),
            zipcode: coalesce(&input.zipcode, || fields::digits(&mut self.rng, 5)),
            building_number: format!("unit {}", self.provider.building_number()),
            dob: coalesce(&input.dob, || fields::birth_year(&mut self.rng)),
            timestamp: fields::timestamp(&mut self.rng),
        }
    }
}

/// Use `value` verbatim when non-blank after trimming, else fall back.
fn coalesce(value: &str, fallback: impl FnOnce() -> String) -> String {
    if value.trim().is_empty() {
        fallback()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticProvider;

    fn test_generator() -> PatientGenerator<StaticProvider> {
        PatientGenerator::with_provider_seeded(StaticProvider::default(), 42)
    }

    #[test]
    fn test_resolve_uses_provided_fields_verbatim() {
        let input = PatientInput {
            first_name: "Maria".to_string(),
            city: "  Athens  ".to_string(),
            ..PatientInput::default()
        };

        let patient = test_generator().resolve(&input);

        assert_eq!(patient.first_name, "Maria");
        // Only the blank check trims; the value is kept as-is.
        assert_eq!(patient.city, "  Athens  ");
    }

    #[test]
    fn test_resolve_generates_blank_fields() {
        let input = PatientInput {
            city: "   ".to_string(),
            ..PatientInput::default()
        };

        let patient = test_generator().resolve(&input);

        assert_eq!(patient.city, "Athens"); // from the static provider
        assert_eq!(patient.first_name, "Ana");
        assert_eq!(patient.street, "12 Peach St");
    }

    #[test]
    fn test_resolve_always_generates_restricted_fields() {
        let patient = test_generator().resolve(&PatientInput::default());

        assert_eq!(patient.ssn.len(), 9);
        assert!(patient.ssn.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(patient.email, "ana.diaz@example.com");
        assert_eq!(patient.building_number, "unit 4");
        assert_eq!(patient.timestamp.len(), 12);
    }

    #[test]
    fn test_resolve_fallbacks() {
        let patient = test_generator().resolve(&PatientInput::default());

        assert_eq!(patient.sex, "M");
        assert_eq!(patient.zipcode.len(), 5);
        assert!(patient.zipcode.chars().all(|c| c.is_ascii_digit()));
        assert!(patient.dob.starts_with("19"));
        assert_eq!(patient.dob.len(), 4);
        assert!(patient.suffix.is_empty());
    }

    #[test]
    fn test_resolve_surname_fallback_is_mangled() {
        let patient = test_generator().resolve(&PatientInput::default());

        // "diaz" + 5 filler letters, capitalized
        assert_eq!(patient.last_name.len(), 9);
        assert!(patient.last_name.starts_with('D'));
        assert!(patient.last_name.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_seeded_generators_agree() {
        let input = PatientInput::default();
        let a = PatientGenerator::seeded(42).resolve(&input);
        let b = PatientGenerator::seeded(42).resolve(&input);

        assert_eq!(a.first_name, b.first_name);
        assert_eq!(a.last_name, b.last_name);
        assert_eq!(a.ssn, b.ssn);
        assert_eq!(a.zipcode, b.zipcode);
        assert_eq!(a.email, b.email);
    }
}
