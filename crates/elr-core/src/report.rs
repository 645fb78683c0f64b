//! Report categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The template category: which disease/report-status template to fill.
///
/// Every variant must have a template in the built-in bank; the two
/// evolve together. Adding a variant without a template is caught by
/// the exhaustive `match` in `elr-templates` at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    /// Hepatitis B preliminary report
    HepbPrelim,
    /// Hepatitis B final report
    HepbFinal,
}

impl ReportKind {
    /// All known report kinds.
    pub const ALL: [ReportKind; 2] = [ReportKind::HepbPrelim, ReportKind::HepbFinal];

    /// The stable string name used on the CLI and in template bank files.
    pub fn as_str(self) -> &'static str {
        match self {
            ReportKind::HepbPrelim => "hepb-prelim",
            ReportKind::HepbFinal => "hepb-final",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown report kind: {s}"))
    }
}
