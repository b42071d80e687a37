//! Commit types for Semtitle.
//!
//! This crate provides the commit types shared across the workspace:
//! - [`CommitType`]: The closed set of conventional commit types
//! - [`CommitInput`]: A commit as supplied by the hosting platform
//! - [`ClassifiedCommit`]: A commit after classification by the analyzer

mod classified;
mod commit_type;
mod input;

pub use classified::{ClassifiedCommit, ClassifiedCommitBuilder};
pub use commit_type::{CommitType, CommitTypeError};
pub use input::{ApiCommit, CommitInput};
