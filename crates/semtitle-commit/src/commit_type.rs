//! Conventional commit types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A conventional commit type.
///
/// The set is closed: tokens outside of it never classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    /// A new feature.
    Feat,
    /// A bug fix.
    Fix,
    /// Documentation only.
    Docs,
    /// Formatting, whitespace and the like.
    Style,
    /// Code change that neither fixes a bug nor adds a feature.
    Refactor,
    /// Performance improvement.
    Perf,
    /// Tests.
    Test,
    /// Build system or dependencies.
    Build,
    /// CI configuration.
    Ci,
    /// Maintenance.
    Chore,
    /// Reverts a previous commit.
    Revert,
}

impl CommitType {
    /// Every commit type, in grammar order.
    pub const ALL: [Self; 11] = [
        Self::Feat,
        Self::Fix,
        Self::Docs,
        Self::Style,
        Self::Refactor,
        Self::Perf,
        Self::Test,
        Self::Build,
        Self::Ci,
        Self::Chore,
        Self::Revert,
    ];

    /// Returns the canonical lowercase token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Refactor => "refactor",
            Self::Perf => "perf",
            Self::Test => "test",
            Self::Build => "build",
            Self::Ci => "ci",
            Self::Chore => "chore",
            Self::Revert => "revert",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a token is not a known commit type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown commit type: {0}")]
pub struct CommitTypeError(pub String);

impl FromStr for CommitType {
    type Err = CommitTypeError;

    /// Parses a type token, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CommitTypeError(s.to_string()))
    }
}
