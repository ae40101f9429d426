use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rayon::prelude::*;

/// Batches at or below this size run without a progress bar
const PROGRESS_BAR_THRESHOLD: usize = 10;

/// Progress tracker for displaying progress during scanning
#[derive(Debug, Default)]
pub struct ProgressTracker {
    /// Never draw a progress bar
    hidden: bool,
}

impl ProgressTracker {
    /// Create a new progress tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker that never draws a progress bar
    pub fn hidden() -> Self {
        Self { hidden: true }
    }

    fn progress_bar(&self, len: usize) -> Option<ProgressBar> {
        if self.hidden || len <= PROGRESS_BAR_THRESHOLD {
            return None;
        }

        let pb = ProgressBar::new(len as u64);
        match ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({eta}) {msg}")
        {
            Ok(style) => pb.set_style(style.progress_chars("#>-")),
            Err(e) => warn!("Invalid progress bar template: {}", e),
        }
        Some(pb)
    }

    /// Run `operation` over `paths` in parallel, keeping results in input order
    pub fn track_path_progress<F, R>(&self, paths: &[PathBuf], operation: F) -> Vec<R>
    where
        F: Fn(&PathBuf) -> R + Sync + Send,
        R: Send,
    {
        let progress_bar = self.progress_bar(paths.len());
        let processed_count = AtomicUsize::new(0);

        let results: Vec<R> = paths.par_iter()
            .map(|path| {
                let result = operation(path);

                let current_count = processed_count.fetch_add(1, Ordering::SeqCst) + 1;
                if let Some(pb) = &progress_bar {
                    pb.set_position(current_count as u64);

                    // Update message occasionally to avoid too many updates
                    if current_count % 10 == 0 || current_count == 1 || current_count == paths.len() {
                        if let Some(file_name) = path.file_name() {
                            pb.set_message(format!("{}", file_name.to_string_lossy()));
                        }
                    }
                }

                result
            })
            .collect();

        if let Some(pb) = progress_bar {
            pb.finish_with_message("Scanning complete");
        }

        results
    }
}
