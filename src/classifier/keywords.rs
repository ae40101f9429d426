use once_cell::sync::Lazy;
use regex::Regex;

/// Category of a keyword that marks a member declared without an access modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Member modifiers such as `abstract` or `override`
    Modifier,
    /// Primitive and void return types
    Primitive,
    /// Parameterised collection return types
    Collection,
}

/// Keywords that open an implicitly private member, keyed by category
pub const IMPLICIT_PRIVATE_KEYWORDS: &[(KeywordCategory, &[&str])] = &[
    (KeywordCategory::Modifier, &["abstract", "final", "virtual", "override"]),
    (KeywordCategory::Primitive, &[
        "void", "blob", "boolean", "date", "datetime", "decimal", "double",
        "id", "integer", "long", "object", "string", "time",
    ]),
    (KeywordCategory::Collection, &["list", "set", "map"]),
];

/// Keywords of the given category
pub fn keywords(category: KeywordCategory) -> &'static [&'static str] {
    IMPLICIT_PRIVATE_KEYWORDS.iter()
        .find(|(c, _)| *c == category)
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}

fn alternation(categories: &[KeywordCategory]) -> String {
    categories.iter()
        .flat_map(|c| keywords(*c).iter())
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|")
}

/// A modifier or primitive type at the start of a lowercased line, followed by whitespace
pub static MEMBER_KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    let words = alternation(&[KeywordCategory::Modifier, KeywordCategory::Primitive]);
    Regex::new(&format!(r"^(?:{})\s", words)).unwrap()
});

/// A parameterised collection type at the start of a lowercased line
pub static COLLECTION_TYPE_RE: Lazy<Regex> = Lazy::new(|| {
    let words = alternation(&[KeywordCategory::Collection]);
    Regex::new(&format!(r"^(?:{})\s*<.+>", words)).unwrap()
});
