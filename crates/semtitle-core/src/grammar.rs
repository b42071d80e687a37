//! Conventional title grammar.
//!
//! Every pattern is built from one type alternation derived from
//! [`CommitType::ALL`]. Type tokens match ASCII case-insensitively except in
//! the strict check.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use semtitle_commit::CommitType;

fn type_alternation() -> String {
    CommitType::ALL
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join("|")
}

/// Builds a pattern, substituting `{types}` with the type alternation.
fn compile(template: &str) -> Regex {
    Regex::new(&template.replace("{types}", &type_alternation())).expect("invalid regex")
}

static STRICT_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^(?:{types})(?:\(.+\))?!?: .+$"));

static INSENSITIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?i-u:{types})(?:\(.+\))?!?: .+$"));

static PARTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^(?P<type>(?i-u:{types}))(?:\((?P<scope>.+?)\))?(?P<breaking>!?):\s*(?P<description>.+)$",
    )
});

static CANONICAL_PARTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^(?P<type>(?i-u:{types}))(?:\((?P<scope>.+?)\))?(?P<breaking>!?): (?P<description>.+)$",
    )
});

static COMMIT_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?P<type>(?i-u:{types}))(?:\((?P<scope>.+?)\))?(?P<breaking>!?):"));

static TYPE_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?i-u:{types})(?:\(.+?\))?!?:\s*"));

static LEADING_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^(?i-u:{types})"));

/// A title decomposed into its conventional parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleParts<'a> {
    /// The commit type.
    pub r#type: CommitType,
    /// The scope as written, if present.
    pub scope: Option<&'a str>,
    /// Whether the `!` marker is present.
    pub breaking: bool,
    /// Everything after the separator.
    pub description: &'a str,
}

impl TitleParts<'_> {
    /// Renders `type(scope)!: description` with type and scope lowercased and
    /// the first character of the description lowercased.
    #[must_use]
    pub fn to_normalized_title(&self) -> String {
        let breaking = if self.breaking { "!" } else { "" };
        let description = lowercase_first(self.description);
        match self.scope {
            Some(scope) => format!(
                "{}({}){breaking}: {description}",
                self.r#type,
                scope.to_lowercase()
            ),
            None => format!("{}{breaking}: {description}", self.r#type),
        }
    }
}

/// Prefix of a commit subject matching the type grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitPrefix<'a> {
    /// The commit type.
    pub r#type: CommitType,
    /// The scope as written, if present.
    pub scope: Option<&'a str>,
    /// Whether the `!` marker is present.
    pub breaking: bool,
}

/// Returns true if the title matches the grammar with a lowercase type.
pub fn is_strictly_valid(title: &str) -> bool {
    STRICT_RE.is_match(title)
}

/// Returns true if the title matches the grammar with any type casing.
pub fn is_valid_ignoring_case(title: &str) -> bool {
    INSENSITIVE_RE.is_match(title)
}

/// Returns true if the structure is right but the casing is not.
pub fn needs_case_correction(title: &str) -> bool {
    !is_strictly_valid(title) && is_valid_ignoring_case(title)
}

/// Decomposes a title, tolerating any whitespace after the colon.
pub fn extract_parts(title: &str) -> Option<TitleParts<'_>> {
    PARTS_RE.captures(title).and_then(parts_from)
}

/// Decomposes a title whose separator is exactly `": "`.
pub fn extract_canonical_parts(title: &str) -> Option<TitleParts<'_>> {
    CANONICAL_PARTS_RE.captures(title).and_then(parts_from)
}

/// Matches the type prefix of a commit subject (`type(scope)!:`).
pub fn match_commit_prefix(subject: &str) -> Option<CommitPrefix<'_>> {
    let captures = COMMIT_PREFIX_RE.captures(subject)?;
    Some(CommitPrefix {
        r#type: captures.name("type")?.as_str().parse().ok()?,
        scope: captures.name("scope").map(|m| m.as_str()),
        breaking: !captures.name("breaking")?.as_str().is_empty(),
    })
}

/// Rebuilds a structurally valid title with canonical casing.
///
/// Returns `None` if the title cannot be decomposed.
pub fn normalize_case_only(title: &str) -> Option<String> {
    extract_parts(title).map(|parts| parts.to_normalized_title())
}

/// Removes a leading `type(scope)!:` prefix and the whitespace after it.
pub fn strip_type_prefix(title: &str) -> &str {
    match TYPE_PREFIX_RE.find(title) {
        Some(m) => &title[m.end()..],
        None => title,
    }
}

/// Returns the type token the title starts with, if any, as written.
pub fn leading_type_token(title: &str) -> Option<&str> {
    LEADING_TYPE_RE.find(title).map(|m| m.as_str())
}

/// Lowercases the first character and leaves the rest untouched.
pub fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn parts_from(captures: Captures<'_>) -> Option<TitleParts<'_>> {
    Some(TitleParts {
        r#type: captures.name("type")?.as_str().parse().ok()?,
        scope: captures.name("scope").map(|m| m.as_str()),
        breaking: !captures.name("breaking")?.as_str().is_empty(),
        description: captures.name("description")?.as_str(),
    })
}
