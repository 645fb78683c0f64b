//! Placeholder tokens recognized in ELR templates.

use crate::patient::PatientRecord;

/// A placeholder token in an ELR template.
///
/// The token set is fixed and total: every token maps to exactly one
/// [`PatientRecord`] field, and [`Token::value`] cannot miss. Token
/// texts are pairwise non-substrings of each other, so the replacement
/// order across tokens does not affect the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    FirstName,
    LastName,
    MiddleName,
    Ssn,
    Dob,
    Gender,
    City,
    Email,
    Street,
    UnitAddress,
    StateAddress,
    ZipCode,
    Timestamp,
}

impl Token {
    /// All recognized tokens.
    pub const ALL: [Token; 13] = [
        Token::FirstName,
        Token::LastName,
        Token::MiddleName,
        Token::Ssn,
        Token::Dob,
        Token::Gender,
        Token::City,
        Token::Email,
        Token::Street,
        Token::UnitAddress,
        Token::StateAddress,
        Token::ZipCode,
        Token::Timestamp,
    ];

    /// The literal placeholder text as it appears in template strings.
    pub fn text(self) -> &'static str {
        match self {
            Token::FirstName => "PATIENTFIRSTNAME",
            Token::LastName => "PATIENTLASTNAME",
            Token::MiddleName => "PATIENTMIDDLENAME",
            Token::Ssn => "PATIENTSSN",
            Token::Dob => "PATIENTDOB",
            Token::Gender => "PATIENTGENDER",
            Token::City => "PATIENTCITY",
            Token::Email => "PATIENTEMAIL",
            Token::Street => "PATIENTSTREET",
            Token::UnitAddress => "PATIENTUNITADDRESS",
            Token::StateAddress => "PATIENTSTATEADDRESS",
            Token::ZipCode => "PATIENTZIPCODE",
            Token::Timestamp => "UUIDTIMESTAMP",
        }
    }

    /// The record field this token is replaced with.
    pub fn value(self, patient: &PatientRecord) -> &str {
        match self {
            Token::FirstName => &patient.first_name,
            Token::LastName => &patient.last_name,
            Token::MiddleName => &patient.middle_name,
            Token::Ssn => &patient.ssn,
            Token::Dob => &patient.dob,
            Token::Gender => &patient.sex,
            Token::City => &patient.city,
            Token::Email => &patient.email,
            Token::Street => &patient.street,
            Token::UnitAddress => &patient.building_number,
            Token::StateAddress => &patient.state,
            Token::ZipCode => &patient.zipcode,
            Token::Timestamp => &patient.timestamp,
        }
    }
}
