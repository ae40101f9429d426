use std::path::{Path, PathBuf};
use anyhow::{Result, bail};
use log::{debug, trace};
use walkdir::WalkDir;

use crate::utils::file_utils;

/// File collector for finding Apex source files
#[derive(Debug, Clone)]
pub struct FileCollector {
    /// Valid file extensions to collect
    valid_extensions: Vec<String>,
}

impl Default for FileCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FileCollector {
    /// Create a new file collector for classes and triggers
    pub fn new() -> Self {
        Self::with_extensions(vec!["cls".to_string(), "trigger".to_string()])
    }

    /// Create a new file collector with custom file extensions
    pub fn with_extensions(extensions: Vec<String>) -> Self {
        Self {
            valid_extensions: extensions,
        }
    }

    /// Collect all files with valid extensions under `input`.
    ///
    /// A file path is returned as is when its extension matches.
    pub fn collect_files(&self, input: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let input = input.as_ref();
        if !input.exists() {
            bail!("Input path does not exist: {}", input.display());
        }

        if input.is_file() {
            return Ok(if file_utils::has_any_extension(input, &self.valid_extensions) {
                vec![input.to_path_buf()]
            } else {
                Vec::new()
            });
        }

        debug!("Collecting files from directory: {}", input.display());

        let mut files: Vec<PathBuf> = WalkDir::new(input)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| file_utils::has_any_extension(e.path(), &self.valid_extensions))
            .map(|e| {
                trace!("Found file: {}", e.path().display());
                e.into_path()
            })
            .collect();

        // Stable output regardless of directory iteration order
        files.sort();

        debug!("Collected {} files for processing", files.len());
        Ok(files)
    }

    /// Add a valid file extension
    pub fn add_extension(&mut self, extension: &str) {
        if !self.valid_extensions.iter().any(|e| e.eq_ignore_ascii_case(extension)) {
            self.valid_extensions.push(extension.to_string());
        }
    }

    /// Get the list of valid file extensions
    pub fn extensions(&self) -> &[String] {
        &self.valid_extensions
    }
}
