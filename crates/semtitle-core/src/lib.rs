//! Core library for Semtitle.
//!
//! This crate turns a pull request title, its commit subjects and its branch
//! name into a conventional commit title (`type(scope)!: description`).
//!
//! ```
//! use semtitle_core::{Reason, process_pr_title};
//!
//! let outcome = process_pr_title("Add dark mode", &[], "feat/dark-mode");
//! assert_eq!(outcome.new_title, "feat: add dark mode");
//! assert_eq!(outcome.reason, Reason::FormatCorrection);
//! ```

mod analyzer;
mod enforcer;
mod generator;
pub mod grammar;
mod normalizer;
mod outcome;
mod pipeline;
mod resolver;

pub use analyzer::{BREAKING_CHANGE_MARKER, CommitAnalysis, analyze_commits, classify};
pub use enforcer::ensure_valid_format;
pub use generator::generate_title;
pub use normalizer::{final_normalize, strip_trailing_period};
pub use outcome::{NormalizationOutcome, Reason};
pub use pipeline::{Pipeline, process_pr_title};
pub use resolver::{FALLBACK_TYPE, TYPE_PRIORITY, resolve_primary_scope, resolve_primary_type};
