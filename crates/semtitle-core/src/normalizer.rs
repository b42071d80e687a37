//! Final normalization.

use crate::grammar;

/// Canonicalizes the casing of a conventional title.
///
/// Titles that do not match the grammar pass through unchanged, so applying
/// this twice gives the same result as applying it once.
pub fn final_normalize(title: &str) -> String {
    grammar::extract_canonical_parts(title)
        .map_or_else(|| title.to_string(), |parts| parts.to_normalized_title())
}

/// Removes one trailing period, if present.
pub fn strip_trailing_period(title: &str) -> &str {
    title.strip_suffix('.').unwrap_or(title)
}
