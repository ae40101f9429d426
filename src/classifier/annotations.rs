use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

/// Upper bound on stripping passes for a single line
const MAX_STRIP_PASSES: usize = 100;

lazy_static! {
    // `@Name` with an optional argument list, e.g. `@IsTest(SeeAllData=true)`
    static ref LEADING_ANNOTATION_RE: Regex = Regex::new(
        r#"^\s*@\w+(?:\s*\([\w\s.'"*=,/:]*\))?\s*"#
    ).unwrap();
}

/// Remove every leading annotation from a line.
///
/// Text after the annotations is returned untouched. Malformed annotations are
/// stripped as far as possible and the rest of the line is left as is.
pub fn strip_annotations(line: &str) -> String {
    let mut stripped = line.to_string();

    for _ in 0..MAX_STRIP_PASSES {
        if !stripped.trim_start().starts_with('@') {
            break;
        }

        let next = match LEADING_ANNOTATION_RE.find(&stripped) {
            Some(m) if !m.as_str().is_empty() => stripped[m.end()..].to_string(),
            _ => break,
        };

        trace!("Stripped annotation from: {}", stripped.trim());
        stripped = next;
    }

    stripped
}
