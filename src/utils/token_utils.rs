use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref URL_RE: Regex = Regex::new(concat!(
        r"^https?://",
        r"[A-Za-z0-9\-._~]+",
        r"(?::\d+)?",
        r"(?:/[A-Za-z0-9\-._~%!$&'()*+,;=:@/]*)?",
        r"(?:\?[A-Za-z0-9\-._~%!$&'()*+,;=:@/?]*)?",
        r"(?:#[A-Za-z0-9\-._~%!$&'()*+,;=:@/?]*)?$",
    )).unwrap();
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Word immediately before the character index `index`.
///
/// Spaces right before the cursor are skipped and the word is collected
/// backwards. When the cursor sits inside an identifier (no spaces skipped), the
/// identifier is also completed forward through word characters, so
/// `previous_word("int  count", 7)` is `count`, not `co`. Out-of-range indices
/// give an empty string.
pub fn previous_word(text: &str, index: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if index == 0 || index > chars.len() {
        return String::new();
    }

    let mut end = index;
    while end > 0 && chars[end - 1] == ' ' {
        end -= 1;
    }
    let skipped_spaces = end < index;

    let mut start = end;
    while start > 0 && chars[start - 1] != ' ' {
        start -= 1;
    }

    if !skipped_spaces && start < end && is_word_char(chars[end - 1]) {
        while end < chars.len() && is_word_char(chars[end]) {
            end += 1;
        }
    }

    chars[start..end].iter().collect()
}

/// Number of occurrences of `ch` in `text`
pub fn count_chars(text: &str, ch: char) -> usize {
    text.chars().filter(|c| *c == ch).count()
}

/// Whether the trimmed text is an http(s) URL
pub fn is_url(text: &str) -> bool {
    URL_RE.is_match(text.trim())
}
