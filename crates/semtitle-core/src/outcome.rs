//! Normalization outcome.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a title was (or was not) changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    /// The title was accepted as is.
    AlreadyValid,
    /// The structure was right; only casing changed.
    CaseCorrection,
    /// The title was rebuilt.
    FormatCorrection,
}

impl Reason {
    /// Returns the wire name of the reason.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AlreadyValid => "already_valid",
            Self::CaseCorrection => "case_correction",
            Self::FormatCorrection => "format_correction",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of normalizing one pull request title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationOutcome {
    /// The title to apply.
    pub new_title: String,
    /// Whether `new_title` differs from the input title.
    pub changed: bool,
    /// Why the title was kept or changed.
    pub reason: Reason,
}
