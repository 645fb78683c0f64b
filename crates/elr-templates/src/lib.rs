//! ELR message template bank.
//!
//! A [`TemplateBank`] maps a [`ReportKind`] to the template text to
//! fill. The built-in bank ships two HL7 v2.5.1-style ORU^R01
//! messages embedded at compile time; custom banks load from a YAML
//! file mapping kind names to template strings.
//!
//! A bank that lacks a template for a requested kind is a
//! configuration error: [`TemplateBank::get`] returns
//! [`TemplateError::Missing`] and callers are expected to propagate
//! it, not swallow it. The built-in bank covers every kind by
//! construction (the `match` in `builtin_template` is exhaustive).

use elr_core::{render, PatientRecord, ReportKind};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const HEPB_PRELIM: &str = include_str!("../templates/hepb_prelim.elr");
const HEPB_FINAL: &str = include_str!("../templates/hepb_final.elr");

/// Error type for template bank operations.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Error reading a template bank file
    #[error("Failed to read template bank file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a template bank file
    #[error("Failed to parse template bank YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The bank has no template for the requested kind
    #[error("No template configured for report kind: {0}")]
    Missing(ReportKind),
}

/// The template text for a report kind in the built-in bank.
fn builtin_template(kind: ReportKind) -> &'static str {
    // Exhaustive on purpose: adding a ReportKind without a template
    // must fail to compile.
    match kind {
        ReportKind::HepbPrelim => HEPB_PRELIM,
        ReportKind::HepbFinal => HEPB_FINAL,
    }
}

/// A read-only store of ELR templates keyed by report kind.
pub struct TemplateBank {
    templates: HashMap<ReportKind, String>,
}

impl TemplateBank {
    /// The built-in bank, covering every [`ReportKind`].
    pub fn builtin() -> Self {
        let templates = ReportKind::ALL
            .into_iter()
            .map(|kind| (kind, builtin_template(kind).to_string()))
            .collect();
        Self { templates }
    }

    /// Load a custom bank from a YAML file mapping kind names to
    /// template text.
    ///
    /// A custom bank may cover only a subset of kinds; requesting a
    /// missing kind surfaces as [`TemplateError::Missing`] at lookup.
    pub fn from_file(path: &Path) -> Result<Self, TemplateError> {
        let content = fs::read_to_string(path)?;
        let templates: HashMap<ReportKind, String> = serde_yaml::from_str(&content)?;
        Ok(Self { templates })
    }

    /// The template text for `kind`.
    pub fn get(&self, kind: ReportKind) -> Result<&str, TemplateError> {
        self.templates
            .get(&kind)
            .map(String::as_str)
            .ok_or(TemplateError::Missing(kind))
    }

    /// Fill the template for `kind` with the given patient record.
    pub fn render(&self, kind: ReportKind, patient: &PatientRecord) -> Result<String, TemplateError> {
        Ok(render(self.get(kind)?, patient))
    }
}

impl Default for TemplateBank {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elr_core::Token;

    #[test]
    fn test_builtin_bank_covers_every_kind() {
        let bank = TemplateBank::builtin();
        for kind in ReportKind::ALL {
            assert!(bank.get(kind).is_ok(), "missing template for {kind}");
        }
    }

    #[test]
    fn test_builtin_templates_reference_every_token() {
        let bank = TemplateBank::builtin();
        for kind in ReportKind::ALL {
            let template = bank.get(kind).unwrap();
            for token in Token::ALL {
                assert!(
                    template.contains(token.text()),
                    "{kind} template lacks {}",
                    token.text()
                );
            }
        }
    }

    #[test]
    fn test_builtin_templates_repeat_the_timestamp_token() {
        let bank = TemplateBank::builtin();
        for kind in ReportKind::ALL {
            let template = bank.get(kind).unwrap();
            assert!(template.matches(Token::Timestamp.text()).count() > 1);
        }
    }

    #[test]
    fn test_custom_bank_missing_kind_is_an_error() {
        let templates: HashMap<ReportKind, String> =
            [(ReportKind::HepbPrelim, "MSH|PATIENTLASTNAME".to_string())]
                .into_iter()
                .collect();
        let bank = TemplateBank { templates };

        assert!(bank.get(ReportKind::HepbPrelim).is_ok());
        assert!(matches!(
            bank.get(ReportKind::HepbFinal),
            Err(TemplateError::Missing(ReportKind::HepbFinal))
        ));
    }

    #[test]
    fn test_custom_bank_parses_from_yaml() {
        let yaml = "hepb-prelim: \"MSH|PATIENTLASTNAME\"\nhepb-final: \"MSH|F|PATIENTLASTNAME\"\n";
        let templates: HashMap<ReportKind, String> = serde_yaml::from_str(yaml).unwrap();
        let bank = TemplateBank { templates };

        assert_eq!(bank.get(ReportKind::HepbFinal).unwrap(), "MSH|F|PATIENTLASTNAME");
    }
}
