use lazy_static::lazy_static;
use regex::Regex;

use super::annotations::strip_annotations;

lazy_static! {
    static ref CLASS_OR_INTERFACE_RE: Regex = Regex::new(r"\bclass\b|\s*\binterface\b").unwrap();
    static ref INTERFACE_RE: Regex = Regex::new(r"\binterface\b").unwrap();
    static ref ENUM_RE: Regex = Regex::new(r"^(?:(?:global|public|private)\s+)?enum\b.*").unwrap();
    // Declaring keyword after modifiers only, e.g. `public with sharing class Foo {`
    static ref TYPE_HEADER_RE: Regex = Regex::new(concat!(
        r"(?i)^(?:(?:global|public|private|protected|abstract|virtual|with|without|inherited|",
        r"sharing|static|final|transient)\s+)*(class|interface|enum)\s+(\w+)",
    )).unwrap();
}

/// Keyword that opens a type declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKeyword {
    Class,
    Interface,
    Enum,
}

/// Whether a line opens a class or interface.
///
/// The keyword may appear anywhere in the line, so unknown modifier orders
/// (`public with sharing virtual class`) are still recognised.
pub fn is_class_or_interface(line: &str) -> bool {
    CLASS_OR_INTERFACE_RE.is_match(&line.to_lowercase())
}

/// Whether a line opens an interface
pub fn is_interface(line: &str) -> bool {
    INTERFACE_RE.is_match(&line.to_lowercase())
}

/// Whether a line opens an enum.
///
/// Unlike classes, the `enum` keyword must start the statement, optionally after
/// an access modifier.
pub fn is_enum(line: &str) -> bool {
    let stripped = strip_annotations(line);
    ENUM_RE.is_match(stripped.trim().to_lowercase().as_str())
}

/// Keyword and name of a type header.
///
/// Only modifiers may precede the keyword, so `Foo.class` literals and string
/// literals mentioning `class` are not headers.
pub fn type_header(line: &str) -> Option<(TypeKeyword, String)> {
    let stripped = strip_annotations(line);
    let cap = TYPE_HEADER_RE.captures(stripped.trim())?;
    let keyword = match cap[1].to_lowercase().as_str() {
        "interface" => TypeKeyword::Interface,
        "enum" => TypeKeyword::Enum,
        _ => TypeKeyword::Class,
    };
    Some((keyword, cap[2].to_string()))
}

/// Whether a line is a class, interface or enum header
pub fn is_type_header(line: &str) -> bool {
    type_header(line).is_some()
}

/// Name declared by a class, interface or enum header
pub fn declared_type_name(line: &str) -> Option<String> {
    type_header(line).map(|(_, name)| name)
}
