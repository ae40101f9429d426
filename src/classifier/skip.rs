use log::trace;
use regex::Regex;

use super::annotations::strip_annotations;
use super::scope::get_scope;
use super::structure::is_type_header;
use super::types::{DeclarationContext, ScopeConfig};

/// Keywords that open a type declaration without an access modifier
const DECLARATION_KEYWORDS: [&str; 3] = ["enum ", "class ", "interface "];

/// Decide whether a line carries no documentable declaration.
///
/// Lines with a resolvable scope and type headers are always kept. With a
/// `context`, constructors without an access modifier and interface method
/// signatures are kept too.
pub fn should_skip_line(
    line: &str,
    config: &ScopeConfig,
    context: Option<&dyn DeclarationContext>,
) -> bool {
    if get_scope(line, config).is_some() {
        return false;
    }

    if is_type_declaration(line) {
        return false;
    }

    if let Some(context) = context {
        let normalized = strip_annotations(line).trim().to_lowercase();

        if is_constructor(&normalized, context.simple_name()) {
            trace!("Keeping constructor of {}: {}", context.simple_name(), line.trim());
            return false;
        }

        if context.is_interface() && normalized.contains('(') {
            trace!("Keeping interface method of {}: {}", context.simple_name(), line.trim());
            return false;
        }
    }

    true
}

/// Class, interface and enum headers, with or without modifiers before the keyword
fn is_type_declaration(line: &str) -> bool {
    let normalized = strip_annotations(line).trim().to_lowercase();
    if DECLARATION_KEYWORDS.iter().any(|keyword| normalized.starts_with(keyword)) {
        return true;
    }

    is_type_header(line)
}

/// `Name (` at the start of a stripped, lowercased line
fn is_constructor(line: &str, simple_name: &str) -> bool {
    if simple_name.is_empty() {
        return false;
    }

    let pattern = format!(r"^{}\s*\(", regex::escape(&simple_name.to_lowercase()));
    Regex::new(&pattern)
        .map(|re| re.is_match(line))
        .unwrap_or(false)
}
