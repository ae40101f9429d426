use std::path::PathBuf;
use serde::{Serialize, Deserialize};

/// Statistics for a scanning run
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Total number of files processed
    pub total_files: usize,

    /// Number of files without any kept declaration
    pub empty_files: usize,

    /// Number of files containing declarations
    pub files_with_declarations: usize,

    /// Number of files that could not be read
    pub error_files: usize,

    /// Paths to files that could not be read
    pub error_file_paths: Vec<PathBuf>,

    /// Total number of kept declarations
    pub total_declarations: usize,

    /// Total number of skipped code lines
    pub skipped_lines: usize,
}

impl ScanStats {
    /// Create a new stats instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another stats instance into this one
    pub fn merge(&mut self, other: &Self) {
        self.total_files += other.total_files;
        self.empty_files += other.empty_files;
        self.files_with_declarations += other.files_with_declarations;
        self.error_files += other.error_files;
        self.error_file_paths.extend(other.error_file_paths.iter().cloned());
        self.total_declarations += other.total_declarations;
        self.skipped_lines += other.skipped_lines;
    }

    /// Percentage of files that were read and classified
    pub fn success_rate(&self) -> f64 {
        if self.total_files == 0 {
            return 0.0;
        }

        let successful = self.total_files.saturating_sub(self.error_files);
        (successful as f64 / self.total_files as f64) * 100.0
    }

    /// Average number of declarations per file that has any
    pub fn avg_declarations_per_file(&self) -> f64 {
        if self.files_with_declarations == 0 {
            return 0.0;
        }

        self.total_declarations as f64 / self.files_with_declarations as f64
    }
}
