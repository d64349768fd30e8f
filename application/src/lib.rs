//! Application layer for phishguard
//!
//! This crate contains use cases, port definitions, and execution
//! parameters. It depends only on the domain layer; adapters implementing
//! the ports live in the infrastructure layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use ports::{
    browser::{BrowserDriver, BrowserError, BrowserSession, LoadedPage},
    circuit::{CircuitController, CircuitError},
    page_fetcher::{FetchError, PageFetcher},
    progress::{AnalysisProgress, NoProgress},
    verdict_log::{NoVerdictLogger, VerdictLogger, VerdictRecord},
    verification::{VerificationError, VerificationStrategy},
};
pub use use_cases::{
    analyze_batch::{AnalyzeBatchUseCase, UrlReport},
    analyze_url::{AnalyzeError, AnalyzeUrlUseCase},
};
