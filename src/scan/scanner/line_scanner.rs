use log::{debug, trace};

use crate::classifier::{
    get_scope, should_skip_line, strip_annotations, type_header, ClassContext,
    DeclarationContext, ScopeConfig, TypeKeyword,
};
use crate::scan::types::{Declaration, DeclarationKind, SourceScan};
use crate::utils::token_utils::{count_chars, is_url, previous_word};

/// A type whose body is being scanned
#[derive(Debug)]
struct OpenType {
    context: ClassContext,

    /// Brace depth of the type's members
    body_depth: usize,

    /// Whether the opening brace has been seen
    opened: bool,
}

/// Per-source state while walking lines
#[derive(Debug, Default)]
struct ScanState {
    depth: usize,
    open_types: Vec<OpenType>,
    in_comment: bool,
    in_doc_comment: bool,
    pending_doc: Vec<String>,
}

impl ScanState {
    fn context(&self) -> Option<&ClassContext> {
        self.open_types.last().map(|t| &t.context)
    }

    /// Whether the current line sits directly inside a type body or at top level.
    ///
    /// Braces opened outside any type, such as a trigger body, are not top level.
    fn at_member_level(&self) -> bool {
        match self.open_types.last() {
            Some(t) => self.depth <= t.body_depth,
            None => self.depth == 0,
        }
    }

    fn take_doc(&mut self) -> Option<String> {
        let text = self.pending_doc.join("\n").trim().to_string();
        self.pending_doc.clear();
        if text.is_empty() { None } else { Some(text) }
    }

    /// Apply the braces of a line and close finished types
    fn apply_braces(&mut self, line: &str) {
        let opens = count_chars(line, '{');
        let closes = count_chars(line, '}');
        self.depth = (self.depth + opens).saturating_sub(closes);

        while let Some(top) = self.open_types.last_mut() {
            if self.depth >= top.body_depth {
                top.opened = true;
                break;
            }
            if !top.opened {
                break;
            }
            trace!("Closing type {}", top.context.name);
            self.open_types.pop();
        }
    }
}

/// Walks source text line by line and keeps documentable declarations
#[derive(Debug, Clone)]
pub struct LineScanner {
    /// Scopes to document
    scopes: ScopeConfig,
}

impl LineScanner {
    /// Create a new line scanner documenting the given scopes
    pub fn new(scopes: ScopeConfig) -> Self {
        Self { scopes }
    }

    pub fn scopes(&self) -> &ScopeConfig {
        &self.scopes
    }

    /// Scan source text and return its declarations
    pub fn scan(&self, source: &str) -> SourceScan {
        let mut state = ScanState::default();
        let mut result = SourceScan::default();

        for (index, raw) in source.lines().enumerate() {
            let line = raw.trim();

            if state.in_comment {
                if state.in_doc_comment {
                    state.pending_doc.push(doc_text(line));
                }
                if line.contains("*/") {
                    state.in_comment = false;
                }
                continue;
            }

            if line.is_empty() || line.starts_with("//") {
                continue;
            }

            if line.starts_with("/*") {
                self.open_comment(&mut state, line);
                continue;
            }

            if !state.at_member_level() {
                result.skipped_lines += 1;
                state.apply_braces(line);
                continue;
            }

            // Annotations on their own line belong to the next declaration
            if strip_annotations(line).trim().is_empty() {
                continue;
            }

            let context = state.context().map(|c| c as &dyn DeclarationContext);
            if should_skip_line(line, &self.scopes, context) {
                result.skipped_lines += 1;
                state.pending_doc.clear();
                state.apply_braces(line);
                continue;
            }

            let declaration = self.classify(&mut state, line, index + 1);
            trace!("Line {}: {:?} {:?}", declaration.line_number, declaration.kind, declaration.name);

            let depth_before = state.depth;
            let opens_body = count_chars(line, '{') > count_chars(line, '}') || !line.contains('{');
            if declaration.kind.is_type() && opens_body {
                if let Some(name) = &declaration.name {
                    let qualified = match &declaration.parent {
                        Some(parent) => format!("{}.{}", parent, name),
                        None => name.clone(),
                    };
                    state.open_types.push(OpenType {
                        context: ClassContext::new(qualified, declaration.kind == DeclarationKind::Interface),
                        body_depth: depth_before + 1,
                        opened: false,
                    });
                }
            }

            result.declarations.push(declaration);
            state.apply_braces(line);
        }

        debug!("Kept {} declarations, skipped {} lines", result.declarations.len(), result.skipped_lines);
        result
    }

    fn open_comment(&self, state: &mut ScanState, line: &str) {
        let is_doc = line.starts_with("/**") && !line.starts_with("/**/");
        state.pending_doc.clear();
        state.in_doc_comment = is_doc;

        let closes_here = line[2..].contains("*/");
        if is_doc {
            state.pending_doc.push(doc_text(&line[3..]));
        }
        state.in_comment = !closes_here;
    }

    fn classify(&self, state: &mut ScanState, line: &str, line_number: usize) -> Declaration {
        let parent = state.context().map(|c| c.name.clone());
        let simple_name = state.context().map(|c| c.simple_name().to_lowercase());
        let doc_comment = state.take_doc();
        let links = doc_comment.as_deref().map(extract_links).unwrap_or_default();

        let (kind, name) = classify_kind(line, simple_name.as_deref());

        Declaration {
            kind,
            name,
            scope: get_scope(line, &self.scopes).map(str::to_string),
            line_number,
            signature: line.to_string(),
            parent,
            doc_comment,
            links,
        }
    }
}

/// Kind and name of a kept declaration line
fn classify_kind(line: &str, enclosing_name: Option<&str>) -> (DeclarationKind, Option<String>) {
    if let Some((keyword, name)) = type_header(line) {
        let kind = match keyword {
            TypeKeyword::Class => DeclarationKind::Class,
            TypeKeyword::Interface => DeclarationKind::Interface,
            TypeKeyword::Enum => DeclarationKind::Enum,
        };
        return (kind, Some(name));
    }

    let stripped = strip_annotations(line);
    let stripped = stripped.trim();

    if let Some(paren) = stripped.chars().position(|c| c == '(') {
        let name = non_empty(previous_word(stripped, paren));
        let is_constructor = match (&name, enclosing_name) {
            (Some(name), Some(enclosing)) => name.to_lowercase() == enclosing,
            _ => false,
        };
        let kind = if is_constructor { DeclarationKind::Constructor } else { DeclarationKind::Method };
        return (kind, name);
    }

    let end = stripped.chars()
        .position(|c| matches!(c, '=' | ';' | '{'))
        .unwrap_or_else(|| stripped.chars().count());
    (DeclarationKind::Property, non_empty(previous_word(stripped, end)))
}

fn non_empty(word: String) -> Option<String> {
    if word.is_empty() { None } else { Some(word) }
}

/// Comment text of a doc comment line without `*` decoration
fn doc_text(line: &str) -> String {
    let line = line.trim();
    let line = line.strip_suffix("*/").unwrap_or(line).trim_end();
    let line = line.trim_start_matches('*');
    line.trim().to_string()
}

fn extract_links(doc: &str) -> Vec<String> {
    doc.split_whitespace()
        .map(|token| token.trim_matches(|c| matches!(c, '(' | ')' | '<' | '>' | '.' | ',' | ';')))
        .filter(|token| is_url(token))
        .map(str::to_string)
        .collect()
}
