//! Configuration schema.

use semtitle_commit::CommitType;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Title handling configuration.
    #[serde(default)]
    pub title: TitleConfig,

    /// Branch name configuration.
    #[serde(default)]
    pub branch: BranchConfig,
}

impl Config {
    /// Checks values that the schema alone cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the decoration marker or a branch
    /// hint pattern is empty.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.title.decoration_marker.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "title.decoration_marker must not be empty".to_string(),
            ));
        }

        if let Some(index) = self.branch.hints.iter().position(|h| h.contains.is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "branch.hints[{index}].contains must not be empty"
            )));
        }

        Ok(())
    }
}

/// Title handling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleConfig {
    /// Marker text that flags a title as already accepted.
    #[serde(default = "default_decoration_marker")]
    pub decoration_marker: String,

    /// Strip one trailing period from generated titles.
    #[serde(default = "default_true")]
    pub strip_trailing_period: bool,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            decoration_marker: default_decoration_marker(),
            strip_trailing_period: true,
        }
    }
}

fn default_decoration_marker() -> String {
    "[semantic pr title]".to_string()
}

fn default_true() -> bool {
    true
}

/// Branch name configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchConfig {
    /// Substring hints checked in order when a pull request has no commits.
    #[serde(default = "default_hints")]
    pub hints: Vec<BranchHint>,
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self {
            hints: default_hints(),
        }
    }
}

fn default_hints() -> Vec<BranchHint> {
    vec![
        BranchHint::new("feat", CommitType::Feat),
        BranchHint::new("fix", CommitType::Fix),
    ]
}

/// Maps a branch name substring to a commit type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchHint {
    /// Substring the branch name must contain.
    pub contains: String,

    /// Commit type used when the substring is found.
    pub r#type: CommitType,
}

impl BranchHint {
    /// Creates a new branch hint.
    #[must_use]
    pub fn new(contains: impl Into<String>, r#type: CommitType) -> Self {
        Self {
            contains: contains.into(),
            r#type,
        }
    }
}
