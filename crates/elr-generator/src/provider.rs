//! The synthetic demographic data provider.

use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Source of plausible person-name and address strings.
///
/// Each call may return a different value; no reproducibility is
/// promised by the trait itself. Implementations back the fields the
/// low-level generators in [`fields`](crate::fields) do not cover.
/// Tests can substitute a deterministic implementation (see
/// [`testing::StaticProvider`](crate::testing::StaticProvider)).
pub trait SyntheticProvider {
    /// A plausible given name.
    fn first_name(&mut self) -> String;

    /// A plausible middle name.
    fn middle_name(&mut self) -> String;

    /// A plausible base surname, before filler-letter mangling.
    fn surname(&mut self) -> String;

    /// A plausible email address.
    fn email(&mut self) -> String;

    /// A plausible street address (number and street).
    fn street_address(&mut self) -> String;

    /// A plausible city name.
    fn city(&mut self) -> String;

    /// A plausible two-letter state abbreviation.
    fn state_abbr(&mut self) -> String;

    /// A plausible building number, without any unit prefix.
    fn building_number(&mut self) -> String;
}

/// Default provider backed by the `fake` crate.
pub struct FakeProvider {
    rng: StdRng,
}

impl FakeProvider {
    /// Create a provider seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministic provider from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticProvider for FakeProvider {
    fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    fn middle_name(&mut self) -> String {
        // The name faker has no dedicated middle-name list; given
        // names are what the source data used middle names from.
        FirstName().fake_with_rng(&mut self.rng)
    }

    fn surname(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    fn email(&mut self) -> String {
        SafeEmail().fake_with_rng(&mut self.rng)
    }

    fn street_address(&mut self) -> String {
        let number: String = BuildingNumber().fake_with_rng(&mut self.rng);
        let street: String = StreetName().fake_with_rng(&mut self.rng);
        format!("{number} {street}")
    }

    fn city(&mut self) -> String {
        CityName().fake_with_rng(&mut self.rng)
    }

    fn state_abbr(&mut self) -> String {
        StateAbbr().fake_with_rng(&mut self.rng)
    }

    fn building_number(&mut self) -> String {
        BuildingNumber().fake_with_rng(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_provider_returns_non_blank_values() {
        let mut provider = FakeProvider::seeded(42);

        assert!(!provider.first_name().trim().is_empty());
        assert!(!provider.middle_name().trim().is_empty());
        assert!(!provider.surname().trim().is_empty());
        assert!(provider.email().contains('@'));
        assert!(!provider.street_address().trim().is_empty());
        assert!(!provider.city().trim().is_empty());
        assert!(!provider.building_number().trim().is_empty());
    }

    #[test]
    fn test_state_abbr_is_two_letters() {
        let mut provider = FakeProvider::seeded(42);

        for _ in 0..10 {
            let state = provider.state_abbr();
            assert_eq!(state.len(), 2);
            assert!(state.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_seeded_providers_agree() {
        let mut a = FakeProvider::seeded(7);
        let mut b = FakeProvider::seeded(7);

        assert_eq!(a.first_name(), b.first_name());
        assert_eq!(a.surname(), b.surname());
        assert_eq!(a.city(), b.city());
    }
}
