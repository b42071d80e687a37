//! Commit input as supplied by the hosting platform.

use serde::{Deserialize, Serialize};

/// A commit attached to a pull request, before classification.
///
/// Deserializes from a plain string, a `{"message": ...}` object, or the
/// hosting API shape `{"commit": {"message": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommitInput {
    /// A bare commit message.
    Plain(String),

    /// An object carrying the message directly.
    Message {
        /// The full commit message (subject + body).
        message: String,
    },

    /// The hosting API commit listing entry.
    Api {
        /// The nested commit payload.
        commit: ApiCommit,
    },
}

/// Nested commit payload of a hosting API commit listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCommit {
    /// The full commit message (subject + body).
    pub message: String,
}

impl CommitInput {
    /// Returns the full commit message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Plain(message) | Self::Message { message } => message,
            Self::Api { commit } => &commit.message,
        }
    }

    /// Returns the first line of the commit message (the subject).
    #[must_use]
    pub fn first_line(&self) -> &str {
        self.message().lines().next().unwrap_or("")
    }
}

impl From<&str> for CommitInput {
    fn from(message: &str) -> Self {
        Self::Plain(message.to_string())
    }
}

impl From<String> for CommitInput {
    fn from(message: String) -> Self {
        Self::Plain(message)
    }
}
