//! Patient field records.
//!
//! Two shapes live here:
//!
//! - [`PatientInput`] - what the caller supplies; any field may be blank,
//!   and a blank field means "generate a value for me".
//! - [`PatientRecord`] - the finalized record handed to substitution;
//!   every field carries its resolved value.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for loading a [`PatientInput`] from a file.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Error reading the input file
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Unrecognized file extension
    #[error("Unsupported input file extension: {0} (expected .yaml, .yml or .json)")]
    UnsupportedExtension(String),
}

/// Partial patient input as supplied by the caller.
///
/// Every field defaults to the empty string. A field that is empty
/// after trimming is treated as "not provided" and a synthetic value
/// is generated in its place; a non-blank field is used verbatim,
/// including any surrounding whitespace (only the blank check trims).
///
/// SSN, email, unit designator and timestamp are deliberately absent:
/// they are always freshly generated and never taken from input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientInput {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub sex: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    /// Four-digit year of birth.
    pub dob: String,
}

impl PatientInput {
    /// Load a patient input from a YAML or JSON file, keyed on extension.
    pub fn from_file(path: &Path) -> Result<Self, InputError> {
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
            Some("json") => Ok(serde_json::from_str(&content)?),
            other => Err(InputError::UnsupportedExtension(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// A fully resolved patient record, ready for substitution.
///
/// Constructed fresh per generation request, consumed once by
/// [`render`](crate::render::render), then discarded. Every field holds
/// its final value; the suffix field is carried for parity with the
/// source record shape but is always empty and has no token.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientRecord {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub suffix: String,
    pub sex: String,
    pub ssn: String,
    pub email: String,
    pub street: String,
    pub state: String,
    pub city: String,
    pub zipcode: String,
    pub building_number: String,
    pub dob: String,
    pub timestamp: String,
}
