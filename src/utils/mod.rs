pub mod file_utils;
pub mod hash_utils;
pub mod token_utils;

pub use token_utils::{count_chars, is_url, previous_word};
