use std::path::Path;
use anyhow::{Result, Context, bail};
use log::debug;
use serde::{Serialize, Deserialize};

use crate::classifier::ScopeConfig;
use crate::utils::file_utils;

/// Configuration for a scanning run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Scopes to document, in precedence order
    pub scopes: ScopeConfig,

    /// File extensions to collect
    pub extensions: Vec<String>,

    /// Maximum number of files to process
    pub max_files: Option<usize>,

    /// Number of parallel threads to use for scanning
    pub parallel_threads: Option<usize>,

    /// Whether to log every skipped file read error
    pub verbose: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            scopes: ScopeConfig::default(),
            extensions: vec!["cls".to_string(), "trigger".to_string()],
            max_files: None,
            parallel_threads: None,
            verbose: false,
        }
    }
}

impl ScanConfig {
    /// Load configuration from a TOML or YAML file, chosen by extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let content = file_utils::read_file_to_string(path)?;
        let extension = path.extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Self::from_toml(&content)
                .with_context(|| format!("Invalid TOML configuration in {}", path.display())),
            "yaml" | "yml" => Self::from_yaml(&content)
                .with_context(|| format!("Invalid YAML configuration in {}", path.display())),
            other => bail!("Unsupported configuration format '{}' for {}", other, path.display()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}
