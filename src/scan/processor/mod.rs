mod scan_processor;
mod stats;

// Re-export from submodules
pub use scan_processor::ScanProcessor;
pub use stats::ScanStats;
