//! Classified commit type produced by the commit analyzer.

use serde::{Deserialize, Serialize};

use crate::CommitType;

/// A commit whose subject matched the conventional type prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedCommit {
    /// The commit type.
    pub r#type: CommitType,

    /// The lowercased scope, if any.
    pub scope: Option<String>,

    /// Whether this is a breaking change (`!` marker or `BREAKING CHANGE` text).
    pub breaking: bool,

    /// The original subject line.
    pub message: String,
}

impl ClassifiedCommit {
    /// Creates a new classified commit builder.
    #[must_use]
    pub fn builder(r#type: CommitType) -> ClassifiedCommitBuilder {
        ClassifiedCommitBuilder::new(r#type)
    }

    /// Returns the scope as a string slice, if any.
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }
}

/// Builder for [`ClassifiedCommit`].
#[derive(Debug)]
pub struct ClassifiedCommitBuilder {
    r#type: CommitType,
    scope: Option<String>,
    breaking: bool,
    message: String,
}

impl ClassifiedCommitBuilder {
    fn new(r#type: CommitType) -> Self {
        Self {
            r#type,
            scope: None,
            breaking: false,
            message: String::new(),
        }
    }

    /// Sets the scope.
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets the breaking flag.
    #[must_use]
    pub fn breaking(mut self, breaking: bool) -> Self {
        self.breaking = breaking;
        self
    }

    /// Sets the original message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Builds the [`ClassifiedCommit`].
    #[must_use]
    pub fn build(self) -> ClassifiedCommit {
        ClassifiedCommit {
            r#type: self.r#type,
            scope: self.scope,
            breaking: self.breaking,
            message: self.message,
        }
    }
}
