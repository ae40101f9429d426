mod file_collector;
mod line_scanner;
mod progress;

// Re-export from submodules
pub use file_collector::FileCollector;
pub use line_scanner::LineScanner;
pub use progress::ProgressTracker;
