//! Format enforcement.

use crate::grammar::{self, lowercase_first};
use crate::resolver::FALLBACK_TYPE;

/// Forces a candidate title into the conventional grammar.
///
/// A title that starts with a type token but is otherwise malformed keeps
/// everything from its first colon; a title with no type at all becomes a
/// `chore` description.
pub fn ensure_valid_format(title: &str) -> String {
    if grammar::is_strictly_valid(title) {
        return title.to_string();
    }

    if grammar::is_valid_ignoring_case(title) {
        return grammar::normalize_case_only(title).unwrap_or_else(|| title.to_string());
    }

    if let Some(token) = grammar::leading_type_token(title) {
        let rest = title.find(':').map_or("", |colon| &title[colon..]);
        return format!("{}{rest}", token.to_lowercase());
    }

    format!("{FALLBACK_TYPE}: {}", lowercase_first(title))
}
