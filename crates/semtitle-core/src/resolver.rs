//! Primary type and scope resolution.

use semtitle_commit::{ClassifiedCommit, CommitType};

/// Order in which types win when no commit is breaking.
///
/// `perf` and `revert` never win on their own.
pub const TYPE_PRIORITY: [CommitType; 9] = [
    CommitType::Feat,
    CommitType::Fix,
    CommitType::Refactor,
    CommitType::Docs,
    CommitType::Style,
    CommitType::Test,
    CommitType::Build,
    CommitType::Ci,
    CommitType::Chore,
];

/// Type used when nothing else applies.
pub const FALLBACK_TYPE: CommitType = CommitType::Chore;

/// Picks the type that represents a set of classified commits.
///
/// A breaking change wins outright with the type of the first breaking
/// commit. Otherwise the first [`TYPE_PRIORITY`] entry present is used.
pub fn resolve_primary_type(
    types: &[CommitType],
    has_breaking_changes: bool,
    results: &[ClassifiedCommit],
) -> CommitType {
    if has_breaking_changes {
        return results
            .iter()
            .find(|c| c.breaking)
            .map_or(CommitType::Feat, |c| c.r#type);
    }

    TYPE_PRIORITY
        .into_iter()
        .find(|t| types.contains(t))
        .unwrap_or(FALLBACK_TYPE)
}

/// Picks the scope carried by a strict majority of scoped commits.
///
/// Ties for the top count keep the first-seen scope; a tie can never clear
/// the majority threshold anyway.
pub fn resolve_primary_scope(scopes: &[String]) -> Option<&str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for scope in scopes {
        match counts.iter_mut().find(|(s, _)| *s == scope.as_str()) {
            Some((_, count)) => *count += 1,
            None => counts.push((scope.as_str(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (scope, count) in counts {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((scope, count));
        }
    }

    best.filter(|(_, count)| count * 2 > scopes.len())
        .map(|(scope, _)| scope)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scopes(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    fn commit(r#type: CommitType, breaking: bool) -> ClassifiedCommit {
        ClassifiedCommit::builder(r#type).breaking(breaking).build()
    }

    #[test]
    fn test_priority_order() {
        let types = [CommitType::Docs, CommitType::Fix, CommitType::Feat];
        assert_eq!(resolve_primary_type(&types, false, &[]), CommitType::Feat);

        let types = [CommitType::Chore, CommitType::Refactor, CommitType::Docs];
        assert_eq!(
            resolve_primary_type(&types, false, &[]),
            CommitType::Refactor
        );
    }

    #[test]
    fn test_perf_and_revert_fall_back_to_chore() {
        let types = [CommitType::Perf, CommitType::Revert];
        assert_eq!(resolve_primary_type(&types, false, &[]), CommitType::Chore);
    }

    #[test]
    fn test_no_types() {
        assert_eq!(resolve_primary_type(&[], false, &[]), CommitType::Chore);
    }

    #[test]
    fn test_breaking_uses_first_breaking_commit() {
        let results = [
            commit(CommitType::Feat, false),
            commit(CommitType::Refactor, true),
            commit(CommitType::Fix, true),
        ];
        let types: Vec<_> = results.iter().map(|c| c.r#type).collect();
        assert_eq!(
            resolve_primary_type(&types, true, &results),
            CommitType::Refactor
        );
    }

    #[test]
    fn test_breaking_without_breaking_commit_defaults_to_feat() {
        let results = [commit(CommitType::Docs, false)];
        assert_eq!(
            resolve_primary_type(&[CommitType::Docs], true, &results),
            CommitType::Feat
        );
    }

    #[test]
    fn test_scope_empty() {
        assert_eq!(resolve_primary_scope(&[]), None);
    }

    #[test]
    fn test_scope_majority() {
        assert_eq!(resolve_primary_scope(&scopes(&["a", "a", "b"])), Some("a"));
        assert_eq!(resolve_primary_scope(&scopes(&["b", "a", "a"])), Some("a"));
        assert_eq!(resolve_primary_scope(&scopes(&["core"])), Some("core"));
    }

    #[test]
    fn test_scope_without_majority() {
        assert_eq!(resolve_primary_scope(&scopes(&["a", "b"])), None);
        assert_eq!(resolve_primary_scope(&scopes(&["a", "a", "b", "b"])), None);
        assert_eq!(resolve_primary_scope(&scopes(&["a", "b", "c"])), None);
    }

    #[test]
    fn test_scope_plurality_is_not_enough() {
        assert_eq!(
            resolve_primary_scope(&scopes(&["a", "a", "b", "c", "d"])),
            None
        );
    }
}
