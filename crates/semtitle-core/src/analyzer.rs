//! Commit classification.

use semtitle_commit::{ClassifiedCommit, CommitType};
use tracing::debug;

use crate::grammar;
use crate::resolver::{resolve_primary_scope, resolve_primary_type};

/// Footer text that flags a breaking change without the `!` marker.
pub const BREAKING_CHANGE_MARKER: &str = "BREAKING CHANGE";

/// Aggregate view over the classified commits of a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitAnalysis {
    /// Classified commits, in input order. Unclassifiable commits are dropped.
    pub results: Vec<ClassifiedCommit>,
    /// Whether any classified commit is breaking.
    pub has_breaking_changes: bool,
    /// Types of the classified commits, in order.
    pub types: Vec<CommitType>,
    /// Non-empty scopes of the classified commits, in order.
    pub scopes: Vec<String>,
}

impl CommitAnalysis {
    /// Returns the type that best represents the whole set.
    pub fn primary_type(&self) -> CommitType {
        resolve_primary_type(&self.types, self.has_breaking_changes, &self.results)
    }

    /// Returns the scope shared by a strict majority of scoped commits.
    pub fn primary_scope(&self) -> Option<&str> {
        resolve_primary_scope(&self.scopes)
    }

    /// Counts classified commits per type, in order of first appearance.
    pub fn type_counts(&self) -> Vec<(CommitType, usize)> {
        let mut counts: Vec<(CommitType, usize)> = Vec::new();
        for commit in &self.results {
            match counts.iter_mut().find(|(t, _)| *t == commit.r#type) {
                Some((_, count)) => *count += 1,
                None => counts.push((commit.r#type, 1)),
            }
        }
        counts
    }
}

/// Classifies a single commit subject.
///
/// Returns `None` if the subject does not start with a known type prefix.
pub fn classify(message: &str) -> Option<ClassifiedCommit> {
    let prefix = grammar::match_commit_prefix(message)?;
    let breaking = prefix.breaking || message.contains(BREAKING_CHANGE_MARKER);

    let mut builder = ClassifiedCommit::builder(prefix.r#type)
        .breaking(breaking)
        .message(message);
    if let Some(scope) = prefix.scope.filter(|s| !s.is_empty()) {
        builder = builder.scope(scope.to_lowercase());
    }

    Some(builder.build())
}

/// Classifies commit subjects and aggregates the signals used for titles.
pub fn analyze_commits<'a, I>(messages: I) -> CommitAnalysis
where
    I: IntoIterator<Item = &'a str>,
{
    let results: Vec<ClassifiedCommit> = messages
        .into_iter()
        .filter_map(|message| {
            let classified = classify(message);
            if classified.is_none() {
                debug!(subject = %message, "skipping unclassifiable commit");
            }
            classified
        })
        .collect();

    CommitAnalysis {
        has_breaking_changes: results.iter().any(|c| c.breaking),
        types: results.iter().map(|c| c.r#type).collect(),
        scopes: results.iter().filter_map(|c| c.scope.clone()).collect(),
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_simple() {
        let commit = classify("feat: add feature").unwrap();
        assert_eq!(commit.r#type, CommitType::Feat);
        assert!(commit.scope.is_none());
        assert!(!commit.breaking);
        assert_eq!(commit.message, "feat: add feature");
    }

    #[test]
    fn test_classify_lowercases_type_and_scope() {
        let commit = classify("FIX(Parser): handle edge case").unwrap();
        assert_eq!(commit.r#type, CommitType::Fix);
        assert_eq!(commit.scope(), Some("parser"));
        assert_eq!(commit.message, "FIX(Parser): handle edge case");
    }

    #[test]
    fn test_classify_breaking_marker() {
        assert!(classify("feat(api)!: redesign endpoints").unwrap().breaking);
    }

    #[test]
    fn test_classify_breaking_footer_text() {
        let commit = classify("refactor: rename config BREAKING CHANGE").unwrap();
        assert!(commit.breaking);
    }

    #[test]
    fn test_classify_breaking_text_is_case_sensitive() {
        let commit = classify("refactor: breaking change ahead").unwrap();
        assert!(!commit.breaking);
    }

    #[test]
    fn test_classify_unknown() {
        assert!(classify("random commit message").is_none());
        assert!(classify("wip: tmp").is_none());
        assert!(classify("feat add feature").is_none());
        assert!(classify("").is_none());
    }

    #[test]
    fn test_analyze_drops_unclassified() {
        let analysis = analyze_commits(["feat: a", "Merge pull request #1", "fix(core): b"]);
        assert_eq!(analysis.results.len(), 2);
        assert_eq!(analysis.types, [CommitType::Feat, CommitType::Fix]);
        assert_eq!(analysis.scopes, ["core"]);
        assert!(!analysis.has_breaking_changes);
    }

    #[test]
    fn test_analyze_breaking() {
        let analysis = analyze_commits(["docs: a", "feat!: b"]);
        assert!(analysis.has_breaking_changes);
        assert_eq!(analysis.primary_type(), CommitType::Feat);
    }

    #[test]
    fn test_analyze_empty() {
        let analysis = analyze_commits(std::iter::empty());
        assert_eq!(analysis, CommitAnalysis::default());
        assert_eq!(analysis.primary_type(), CommitType::Chore);
        assert_eq!(analysis.primary_scope(), None);
    }

    #[test]
    fn test_type_counts_first_seen_order() {
        let analysis = analyze_commits(["test: a", "fix: b", "test: c", "docs: d"]);
        assert_eq!(
            analysis.type_counts(),
            [
                (CommitType::Test, 2),
                (CommitType::Fix, 1),
                (CommitType::Docs, 1)
            ]
        );
    }
}
