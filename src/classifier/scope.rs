use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use super::annotations::strip_annotations;
use super::keywords::{COLLECTION_TYPE_RE, MEMBER_KEYWORD_RE};
use super::types::{ScopeConfig, PRIVATE_SCOPE, TEST_METHOD_SCOPE};

lazy_static! {
    static ref TEST_METHOD_WORD_RE: Regex = Regex::new(r"\btestmethod\b").unwrap();
    static ref STATIC_TEST_METHOD_RE: Regex = Regex::new(r"^static\s+testmethod\s").unwrap();
}

/// Resolve the access scope of a declaration line.
///
/// Configured keywords are tried in order against the start of the line. When
/// none matches and `private` is configured, members written without an access
/// modifier are inferred as private from their shape. Returns `None` when no
/// scope could be determined.
pub fn get_scope<'a>(line: &str, config: &'a ScopeConfig) -> Option<&'a str> {
    let normalized = strip_annotations(line).trim().to_lowercase();

    for scope in config.scopes() {
        let keyword = scope.to_lowercase();
        if starts_with_word(&normalized, &keyword) {
            return Some(scope.as_str());
        }
        if keyword == TEST_METHOD_SCOPE && STATIC_TEST_METHOD_RE.is_match(&normalized) {
            return Some(scope.as_str());
        }
    }

    let private = config.find(PRIVATE_SCOPE)?;
    if is_implicitly_private(&normalized) {
        trace!("Inferred private scope for: {}", line.trim());
        return Some(private);
    }

    None
}

/// Whether `line` starts with `word` followed by whitespace
fn starts_with_word(line: &str, word: &str) -> bool {
    !word.is_empty()
        && line.starts_with(word)
        && line[word.len()..].starts_with(char::is_whitespace)
}

/// Shape-based inference for members declared without an access modifier.
///
/// Expects a stripped, trimmed, lowercased line.
fn is_implicitly_private(line: &str) -> bool {
    if starts_with_word(line, "static") && !TEST_METHOD_WORD_RE.is_match(line) {
        return true;
    }

    let has_parameters = line.contains('(');
    if MEMBER_KEYWORD_RE.is_match(line) && has_parameters {
        return true;
    }

    COLLECTION_TYPE_RE.is_match(line) && has_parameters
}
