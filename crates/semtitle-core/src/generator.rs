//! Candidate title generation.

use std::sync::LazyLock;

use regex::Regex;
use semtitle_commit::{ClassifiedCommit, CommitInput, CommitType};
use semtitle_config::{BranchConfig, Config};
use tracing::debug;

use crate::analyzer::{CommitAnalysis, analyze_commits};
use crate::grammar::{self, lowercase_first};
use crate::resolver::FALLBACK_TYPE;

static SUBJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:]+):\s*(.+)$").expect("invalid regex"));

static BREAKING_INSERT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)(\(.+?\))?:").expect("invalid regex"));

/// Produces a candidate title from the current title, commits and branch.
///
/// The candidate is not guaranteed to be valid; run it through
/// [`ensure_valid_format`](crate::ensure_valid_format) afterwards.
pub fn generate_title(
    current_title: &str,
    commits: &[CommitInput],
    branch_name: &str,
    config: &Config,
) -> String {
    if grammar::needs_case_correction(current_title)
        && let Some(normalized) = grammar::normalize_case_only(current_title)
    {
        debug!("title only needs case correction");
        return normalized;
    }

    if commits.is_empty() {
        return from_branch(current_title, branch_name, &config.branch);
    }

    let analysis = analyze_commits(commits.iter().map(CommitInput::first_line));
    debug!(
        commits = commits.len(),
        classified = analysis.results.len(),
        breaking = analysis.has_breaking_changes,
        "analyzed commits"
    );

    if commits.len() == 1
        && let [single] = analysis.results.as_slice()
        && let Some(title) = from_single_commit(single)
    {
        return title;
    }

    from_analysis(current_title, &analysis, &config.title.decoration_marker)
}

/// Types a title using only the branch name.
fn from_branch(current_title: &str, branch_name: &str, config: &BranchConfig) -> String {
    let commit_type = config
        .hints
        .iter()
        .find(|hint| branch_name.contains(&hint.contains))
        .map_or(FALLBACK_TYPE, |hint| hint.r#type);
    debug!(branch = branch_name, %commit_type, "typed title from branch name");

    format!("{commit_type}: {}", lowercase_first(current_title))
}

/// Reuses the subject of the only commit as the title.
fn from_single_commit(commit: &ClassifiedCommit) -> Option<String> {
    let captures = SUBJECT_RE.captures(&commit.message)?;
    let prefix = captures[1].to_lowercase();
    let title = format!("{prefix}: {}", lowercase_first(&captures[2]));

    if commit.breaking && !prefix.contains('!') {
        let marked = BREAKING_INSERT_RE.replace(&title, "${1}${2}!:");
        return Some(marked.into_owned());
    }
    Some(title)
}

/// Builds a title from the resolved type and scope of every commit.
fn from_analysis(current_title: &str, analysis: &CommitAnalysis, marker: &str) -> String {
    let primary_type = analysis.primary_type();
    let primary_scope = analysis.primary_scope();

    let undecorated = current_title.replacen(&format!(" {marker}"), "", 1);
    let mut description = lowercase_first(grammar::strip_type_prefix(&undecorated));

    if analysis.results.len() > 1 {
        let additional = other_type_fragments(analysis, primary_type).join(" and ");
        if !additional.is_empty() && !description.contains(&additional) {
            description.push_str(" with ");
            description.push_str(&additional);
        }
    }

    let breaking = if analysis.has_breaking_changes { "!" } else { "" };
    match primary_scope {
        Some(scope) => format!("{primary_type}{breaking}({scope}): {description}"),
        None => format!("{primary_type}{breaking}: {description}"),
    }
}

/// Describes the non-primary types, e.g. `docs change` or `test changes`.
fn other_type_fragments(analysis: &CommitAnalysis, primary_type: CommitType) -> Vec<String> {
    analysis
        .type_counts()
        .into_iter()
        .filter(|(t, _)| *t != primary_type)
        .map(|(t, count)| {
            if count > 1 {
                format!("{t} changes")
            } else {
                format!("{t} change")
            }
        })
        .collect()
}
