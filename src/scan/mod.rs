pub mod types;
pub mod scanner;
pub mod processor;

// Re-export the main API for easier access
pub use types::{Declaration, DeclarationKind, FileScan, ScanResult, SourceScan};
pub use scanner::{FileCollector, LineScanner, ProgressTracker};
pub use processor::{ScanProcessor, ScanStats};
