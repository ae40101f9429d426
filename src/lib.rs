pub mod classifier;
pub mod config;
pub mod scan;
pub mod utils;

#[cfg(test)]
mod tests;

// Re-export main types and functions for easier access
pub use classifier::{
    get_scope, is_class_or_interface, is_enum, should_skip_line, strip_annotations,
    ClassContext, DeclarationContext, ScopeConfig,
};
pub use config::ScanConfig;
pub use scan::{Declaration, DeclarationKind, LineScanner, ScanProcessor, ScanResult, ScanStats};

// Re-export utility functions
pub use utils::token_utils::{count_chars, is_url, previous_word};
