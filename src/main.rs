use std::path::PathBuf;

use anyhow::{Result, Context};
use clap::Parser;
use log::{info, warn};

use apex_scanner::utils::file_utils;
use apex_scanner::{ScanConfig, ScanProcessor, ScopeConfig};

/// Classify the declarations of Apex source files for documentation
#[derive(Debug, Parser)]
#[command(name = "apex_scanner", version, about)]
struct Cli {
    /// Source files or directories to scan
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Configuration file (TOML or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scope to document, in precedence order; replaces configured scopes
    #[arg(short, long = "scope")]
    scopes: Vec<String>,

    /// Write the JSON report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum number of files to process
    #[arg(long)]
    max_files: Option<usize>,

    /// Number of parallel threads
    #[arg(long)]
    threads: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let mut config = match &cli.config {
        Some(path) => ScanConfig::load(path)?,
        None => ScanConfig::default(),
    };
    if !cli.scopes.is_empty() {
        config.scopes = ScopeConfig::new(cli.scopes.iter().map(String::as_str));
    }
    if cli.max_files.is_some() {
        config.max_files = cli.max_files;
    }
    if cli.threads.is_some() {
        config.parallel_threads = cli.threads;
    }
    config.verbose |= cli.verbose;

    if config.scopes.is_empty() {
        warn!("No scopes configured; only type declarations will be kept");
    }
    info!("Documenting scopes: {}", config.scopes.scopes().join(", "));

    let processor = ScanProcessor::new(config);
    let result = processor.scan_paths(&cli.inputs)?;

    let report = serde_json::to_string_pretty(&result).context("Failed to serialize scan report")?;
    match &cli.output {
        Some(path) => {
            file_utils::write_string_to_file(path, &report)?;
            info!("Wrote report to {}", path.display());
        }
        None => println!("{}", report),
    }

    info!(
        "{} declarations in {} files ({:.1}% read successfully)",
        result.stats.total_declarations,
        result.stats.files_with_declarations,
        result.stats.success_rate()
    );

    Ok(())
}
