use sha2::{Sha256, Digest};

/// Calculate SHA-256 hash of source text
pub fn hash_string(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
