use std::path::PathBuf;
use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};

use super::processor::ScanStats;

/// Kind of declaration a kept line opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Class,
    Interface,
    Enum,
    Constructor,
    Method,
    Property,
}

impl DeclarationKind {
    /// Whether this declaration opens a type that can hold members
    pub fn is_type(&self) -> bool {
        matches!(self, Self::Class | Self::Interface | Self::Enum)
    }
}

/// A documentable declaration found while scanning a file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    /// Kind of declaration
    pub kind: DeclarationKind,

    /// Declared name, if one could be read from the line
    pub name: Option<String>,

    /// Resolved access scope, or `None` when no scope was determined
    pub scope: Option<String>,

    /// 1-based line number in the source file
    pub line_number: usize,

    /// The declaration line, trimmed
    pub signature: String,

    /// Dotted name of the enclosing type, if any
    pub parent: Option<String>,

    /// Text of the doc comment directly above the declaration
    pub doc_comment: Option<String>,

    /// Links found in the doc comment
    pub links: Vec<String>,
}

/// Declarations found in one source text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceScan {
    /// Kept declarations in source order
    pub declarations: Vec<Declaration>,

    /// Number of code lines that were skipped
    pub skipped_lines: usize,
}

/// Result of scanning a single file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileScan {
    /// Path to the scanned file
    pub file_path: PathBuf,

    /// SHA-256 hash of the file content
    pub content_hash: String,

    /// Kept declarations in source order
    pub declarations: Vec<Declaration>,

    /// Number of code lines that were skipped
    pub skipped_lines: usize,
}

/// Result of a scanning run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Files that were scanned successfully
    pub files: Vec<FileScan>,

    /// Statistics about the run
    pub stats: ScanStats,

    /// When the run finished
    pub generated_at: DateTime<Utc>,
}

impl ScanResult {
    /// All declarations across every scanned file
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.files.iter().flat_map(|f| f.declarations.iter())
    }
}
