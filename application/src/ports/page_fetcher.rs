//! Page fetcher port
//!
//! Defines the capability to retrieve a URL through the configured forward
//! proxy. Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use phishguard_domain::PageObservation;
use thiserror::Error;

/// Errors surfaced by a [`PageFetcher`] implementation.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection refused, DNS failure, protocol error
    #[error("Transport error: {0}")]
    Transport(String),

    /// The configured timeout elapsed before a response arrived
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// The fetcher itself cannot operate (bad proxy endpoint, client build
    /// failure); the one class that aborts a whole batch
    #[error("Fetcher configuration error: {0}")]
    Configuration(String),
}

impl FetchError {
    /// Whether this error means the environment cannot fetch at all, as
    /// opposed to a single request failing.
    pub fn is_configuration(&self) -> bool {
        matches!(self, FetchError::Configuration(_))
    }
}

/// Retrieves a page on behalf of a verification strategy.
///
/// Implementations route traffic through the configured proxy endpoint and
/// enforce the configured timeout on every request.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<PageObservation, FetchError>;
}
