//! Deterministic test doubles.

use crate::provider::SyntheticProvider;

/// A provider that returns fixed values.
///
/// Used by tests that need full control over the provider-backed
/// fields; the RNG-backed fields (SSN, zipcode, timestamp, filler
/// letters) stay deterministic through a seeded generator instead.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    pub first_name: String,
    pub middle_name: String,
    pub surname: String,
    pub email: String,
    pub street_address: String,
    pub city: String,
    pub state_abbr: String,
    pub building_number: String,
}

impl Default for StaticProvider {
    fn default() -> Self {
        Self {
            first_name: "Ana".to_string(),
            middle_name: "Q".to_string(),
            surname: "Diaz".to_string(),
            email: "ana.diaz@example.com".to_string(),
            street_address: "12 Peach St".to_string(),
            city: "Athens".to_string(),
            state_abbr: "GA".to_string(),
            building_number: "4".to_string(),
        }
    }
}

impl SyntheticProvider for StaticProvider {
    fn first_name(&mut self) -> String {
        self.first_name.clone()
    }

    fn middle_name(&mut self) -> String {
        self.middle_name.clone()
    }

    fn surname(&mut self) -> String {
        self.surname.clone()
    }

    fn email(&mut self) -> String {
        self.email.clone()
    }

    fn street_address(&mut self) -> String {
        self.street_address.clone()
    }

    fn city(&mut self) -> String {
        self.city.clone()
    }

    fn state_abbr(&mut self) -> String {
        self.state_abbr.clone()
    }

    fn building_number(&mut self) -> String {
        self.building_number.clone()
    }
}
