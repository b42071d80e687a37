//! Title normalization pipeline.

use semtitle_commit::CommitInput;
use semtitle_config::Config;
use tracing::{debug, info};

use crate::enforcer::ensure_valid_format;
use crate::generator::generate_title;
use crate::grammar;
use crate::normalizer::{final_normalize, strip_trailing_period};
use crate::outcome::{NormalizationOutcome, Reason};

/// Orchestrates generation, enforcement and normalization of titles.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    /// Creates a new pipeline with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns true if the title is structurally accepted without rebuilding.
    pub fn is_accepted(&self, title: &str) -> bool {
        grammar::is_strictly_valid(title) || title.contains(&self.config.title.decoration_marker)
    }

    /// Normalizes a pull request title.
    pub fn process(
        &self,
        current_title: &str,
        commits: &[CommitInput],
        branch_name: &str,
    ) -> NormalizationOutcome {
        if self.is_accepted(current_title) {
            let normalized = final_normalize(current_title);
            if normalized == current_title {
                debug!(title = current_title, "title already valid");
                return NormalizationOutcome {
                    new_title: current_title.to_string(),
                    changed: false,
                    reason: Reason::AlreadyValid,
                };
            }

            info!(from = current_title, to = %normalized, "corrected title casing");
            return NormalizationOutcome {
                new_title: normalized,
                changed: true,
                reason: Reason::CaseCorrection,
            };
        }

        let candidate = generate_title(current_title, commits, branch_name, &self.config);
        debug!(%candidate, "generated candidate title");
        let enforced = ensure_valid_format(&candidate);
        let normalized = final_normalize(&enforced);
        let new_title = if self.config.title.strip_trailing_period {
            strip_trailing_period(&normalized).to_string()
        } else {
            normalized
        };

        let reason = if grammar::needs_case_correction(current_title) {
            Reason::CaseCorrection
        } else {
            Reason::FormatCorrection
        };
        let changed = new_title != current_title;
        info!(from = current_title, to = %new_title, %reason, changed, "normalized title");

        NormalizationOutcome {
            new_title,
            changed,
            reason,
        }
    }
}

/// Normalizes a pull request title with the default configuration.
pub fn process_pr_title(
    current_title: &str,
    commits: &[CommitInput],
    branch_name: &str,
) -> NormalizationOutcome {
    Pipeline::default().process(current_title, commits, branch_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commits(messages: &[&str]) -> Vec<CommitInput> {
        messages.iter().map(|m| CommitInput::from(*m)).collect()
    }

    #[test]
    fn test_already_valid() {
        let outcome = process_pr_title("feat(api): add endpoint", &[], "");
        assert_eq!(outcome.new_title, "feat(api): add endpoint");
        assert!(!outcome.changed);
        assert_eq!(outcome.reason, Reason::AlreadyValid);
    }

    #[test]
    fn test_valid_structure_with_capital_description() {
        let outcome = process_pr_title("feat: Add endpoint", &[], "");
        assert_eq!(outcome.new_title, "feat: add endpoint");
        assert!(outcome.changed);
        assert_eq!(outcome.reason, Reason::CaseCorrection);
    }

    #[test]
    fn test_case_correction() {
        let outcome = process_pr_title("feat(API): Add Thing", &[], "");
        assert_eq!(outcome.new_title, "feat(api): add Thing");
        assert!(outcome.changed);
        assert_eq!(outcome.reason, Reason::CaseCorrection);
    }

    #[test]
    fn test_uppercase_type_is_case_correction() {
        let outcome = process_pr_title("FIX: Crash on start.", &[], "");
        assert_eq!(outcome.new_title, "fix: crash on start");
        assert!(outcome.changed);
        assert_eq!(outcome.reason, Reason::CaseCorrection);
    }

    #[test]
    fn test_decorated_title_accepted() {
        let title = "Anything goes [semantic pr title]";
        let outcome = process_pr_title(title, &commits(&["feat: a"]), "");
        assert_eq!(outcome.new_title, title);
        assert!(!outcome.changed);
        assert_eq!(outcome.reason, Reason::AlreadyValid);
    }

    #[test]
    fn test_custom_decoration_marker() {
        let mut config = Config::default();
        config.title.decoration_marker = "[keep]".to_string();
        let pipeline = Pipeline::new(config);

        let kept = pipeline.process("Odd title [keep]", &[], "");
        assert!(!kept.changed);

        let rebuilt = pipeline.process("Odd title [semantic pr title]", &[], "");
        assert_eq!(rebuilt.new_title, "chore: odd title [semantic pr title]");
    }

    #[test]
    fn test_branch_feature() {
        let outcome = process_pr_title("Add dark mode", &[], "feat/dark-mode");
        assert_eq!(outcome.new_title, "feat: add dark mode");
        assert!(outcome.changed);
        assert_eq!(outcome.reason, Reason::FormatCorrection);
    }

    #[test]
    fn test_branch_without_hint() {
        let outcome = process_pr_title("Improve docs", &[], "update-1");
        assert_eq!(outcome.new_title, "chore: improve docs");
        assert_eq!(outcome.reason, Reason::FormatCorrection);
    }

    #[test]
    fn test_single_breaking_commit() {
        let input = commits(&["feat!: drop legacy API"]);
        let outcome = process_pr_title("Drop legacy API", &input, "");
        assert_eq!(outcome.new_title, "feat!: drop legacy API");
        assert!(outcome.new_title.contains("!:"));
    }

    #[test]
    fn test_mixed_commits_majority_scope() {
        let input = commits(&["fix(core): bug A", "fix(core): bug B", "docs: readme"]);
        let outcome = process_pr_title("Bug fixes", &input, "");
        assert_eq!(outcome.new_title, "fix(core): bug fixes with docs change");
        assert_eq!(outcome.new_title.matches("docs change").count(), 1);
    }

    #[test]
    fn test_trailing_period_stripped_once() {
        let outcome = process_pr_title("Fix it..", &[], "main");
        assert_eq!(outcome.new_title, "chore: fix it.");
    }

    #[test]
    fn test_trailing_period_kept_when_disabled() {
        let mut config = Config::default();
        config.title.strip_trailing_period = false;
        let outcome = Pipeline::new(config).process("Fix it.", &[], "main");
        assert_eq!(outcome.new_title, "chore: fix it.");
    }

    #[test]
    fn test_bare_type_becomes_description() {
        let outcome = process_pr_title("chore:", &[], "");
        assert_eq!(outcome.new_title, "chore: chore:");
        assert!(outcome.changed);
    }

    #[test]
    fn test_is_accepted() {
        let pipeline = Pipeline::default();
        assert!(pipeline.is_accepted("ci: cache"));
        assert!(pipeline.is_accepted("x [semantic pr title]"));
        assert!(!pipeline.is_accepted("Ci: cache"));
    }
}
