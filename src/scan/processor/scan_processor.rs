use std::path::{Path, PathBuf};

use anyhow::{Result, Context};
use chrono::Utc;
use log::{warn, info, debug};

use crate::config::ScanConfig;
use crate::scan::scanner::{FileCollector, LineScanner, ProgressTracker};
use crate::scan::types::{FileScan, ScanResult};
use crate::utils::{file_utils, hash_utils};
use super::stats::ScanStats;

/// Scan processor responsible for classifying the lines of many files
#[derive(Debug)]
pub struct ScanProcessor {
    /// Configuration for the run
    config: ScanConfig,

    /// Line scanner shared by every worker
    scanner: LineScanner,

    /// File collector for finding source files
    file_collector: FileCollector,

    /// Progress tracker for displaying progress
    progress_tracker: ProgressTracker,
}

impl ScanProcessor {
    /// Create a new scan processor with the given configuration
    pub fn new(config: ScanConfig) -> Self {
        Self {
            scanner: LineScanner::new(config.scopes.clone()),
            file_collector: FileCollector::with_extensions(config.extensions.clone()),
            progress_tracker: ProgressTracker::new(),
            config,
        }
    }

    /// Create a new scan processor with default configuration
    pub fn with_defaults() -> Self {
        Self::new(ScanConfig::default())
    }

    /// Replace the progress tracker, e.g. to hide the progress bar
    pub fn with_progress_tracker(mut self, progress_tracker: ProgressTracker) -> Self {
        self.progress_tracker = progress_tracker;
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan a single file
    pub fn scan_file(&self, file: impl AsRef<Path>) -> Result<FileScan> {
        let file = file.as_ref();
        debug!("Scanning file: {}", file.display());

        let content = file_utils::read_source_file(file)?;
        let source = self.scanner.scan(&content);

        Ok(FileScan {
            file_path: file.to_path_buf(),
            content_hash: hash_utils::hash_string(&content),
            declarations: source.declarations,
            skipped_lines: source.skipped_lines,
        })
    }

    /// Process files in parallel and return the results
    pub fn process_files(&self, files: &[PathBuf]) -> Result<ScanResult> {
        info!("Processing {} files", files.len());

        // Limit the number of files if configured
        let files_to_process = match self.config.max_files {
            Some(max_files) if files.len() > max_files => {
                warn!("Limiting to {} files out of {}", max_files, files.len());
                &files[..max_files]
            }
            _ => files,
        };

        let thread_count = self.config.parallel_threads.unwrap_or_else(|| {
            let available = num_cpus::get();
            let used = std::cmp::max(1, available.saturating_sub(1));
            debug!("Using {} threads for parallel processing (available: {})", used, available);
            used
        });

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(thread_count)
            .build()
            .context("Failed to build thread pool")?;

        let results = pool.install(|| {
            self.progress_tracker.track_path_progress(files_to_process, |file| {
                (file.clone(), self.scan_file(file))
            })
        });

        let mut stats = ScanStats::new();
        let mut scanned = Vec::with_capacity(results.len());
        stats.total_files = results.len();

        for (file, result) in results {
            match result {
                Ok(file_scan) => {
                    stats.skipped_lines += file_scan.skipped_lines;
                    if file_scan.declarations.is_empty() {
                        stats.empty_files += 1;
                    } else {
                        stats.files_with_declarations += 1;
                        stats.total_declarations += file_scan.declarations.len();
                    }
                    scanned.push(file_scan);
                }
                Err(e) => {
                    if self.config.verbose {
                        warn!("Failed to scan file {}: {:#}", file.display(), e);
                    } else {
                        warn!("Failed to scan file {}", file.display());
                    }
                    stats.error_files += 1;
                    stats.error_file_paths.push(file);
                }
            }
        }

        info!(
            "Processed {} files, found {} declarations ({} errors)",
            stats.total_files, stats.total_declarations, stats.error_files
        );

        Ok(ScanResult {
            files: scanned,
            stats,
            generated_at: Utc::now(),
        })
    }

    /// Scan a file or directory recursively for source files
    pub fn scan_path(&self, input: impl AsRef<Path>) -> Result<ScanResult> {
        let input = input.as_ref();
        info!("Scanning: {}", input.display());

        let files = self.file_collector.collect_files(input)?;
        info!("Found {} files to process", files.len());

        self.process_files(&files)
    }

    /// Scan several inputs, each a file or a directory
    pub fn scan_paths(&self, inputs: &[PathBuf]) -> Result<ScanResult> {
        let mut files = Vec::new();
        for input in inputs {
            files.extend(self.file_collector.collect_files(input)?);
        }
        files.sort();
        files.dedup();

        info!("Found {} files to process", files.len());
        self.process_files(&files)
    }
}
