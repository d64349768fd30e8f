//! Presentation layer for phishguard
//!
//! This crate contains CLI definitions, console output formatting,
//! and progress reporting.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat, StrategyChoice};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
