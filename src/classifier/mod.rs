//! Line classification for Apex-like source.
//!
//! Every function here is pure and works on a single line plus caller-supplied
//! configuration, so lines can be classified from any thread.

pub mod annotations;
pub mod keywords;
pub mod scope;
pub mod skip;
pub mod structure;
pub mod types;

// Re-export the classification API for easier access
pub use annotations::strip_annotations;
pub use keywords::{KeywordCategory, IMPLICIT_PRIVATE_KEYWORDS};
pub use scope::get_scope;
pub use skip::should_skip_line;
pub use structure::{
    declared_type_name, is_class_or_interface, is_enum, is_interface, is_type_header,
    type_header, TypeKeyword,
};
pub use types::{ClassContext, DeclarationContext, ScopeConfig};
