//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Verification strategy for URLs the heuristics did not flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyChoice {
    /// HTTP 200 through the proxy counts as safe
    Noop,
    /// Fetch through the proxy and inspect title and markup
    Content,
    /// Render in a headless browser and inspect the document title
    Browser,
}

/// Output format for verdicts
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// One colored line per URL plus a summary
    Text,
    /// JSON array of verdict records
    Json,
}

/// CLI arguments for phishguard
#[derive(Parser, Debug)]
#[command(name = "phishguard")]
#[command(author, version, about = "Classify URLs as safe or unsafe via heuristics and proxied verification")]
#[command(long_about = r#"
Phishguard classifies URLs in two stages:

1. Heuristics: the URL string is checked against known phishing keywords
   and suspicious suffixes. A match is final; no network traffic.
2. Verification: remaining URLs are fetched through the configured proxy
   (or rendered in a headless browser) and inspected.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./phishguard.toml     Project-level config
3. ~/.config/phishguard/config.toml   Global config

Example:
  phishguard https://example.com https://example.xyz
  phishguard --strategy browser --file urls.txt
  phishguard --new-identity --jobs 4 --log verdicts.jsonl https://example.com
"#)]
pub struct Cli {
    /// URLs to analyze
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// Read additional URLs from a file (one per line, # comments)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verification strategy
    #[arg(short, long, value_enum, default_value = "content")]
    pub strategy: StrategyChoice,

    /// Request a fresh Tor identity before analyzing
    #[arg(long)]
    pub new_identity: bool,

    /// Number of URLs to verify at once (defaults to the configured value)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Override the fetch/navigation timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Proxy endpoint as HOST:PORT
    #[arg(long, value_name = "HOST:PORT")]
    pub proxy: Option<String>,

    /// Connect directly instead of through the proxy
    #[arg(long, conflicts_with = "proxy")]
    pub no_proxy: bool,

    /// Append verdicts to a JSONL log file
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
