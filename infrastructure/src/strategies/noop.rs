//! Reachability-only verification
//!
//! The cheapest variant: a GET through the proxy, and a plain HTTP 200
//! counts as safe. Nothing about the page itself is inspected.

use async_trait::async_trait;
use phishguard_application::{
    FetchError, PageFetcher, VerificationError, VerificationStrategy,
};
use phishguard_domain::{UrlCandidate, Verdict, VerdictSource};
use std::sync::Arc;
use tracing::debug;

/// Treats HTTP 200 through the proxy as safe.
pub struct NoopStrategy {
    fetcher: Arc<dyn PageFetcher>,
}

impl NoopStrategy {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl VerificationStrategy for NoopStrategy {
    fn source(&self) -> VerdictSource {
        VerdictSource::Noop
    }

    async fn verify(&self, candidate: &UrlCandidate) -> Result<Verdict, VerificationError> {
        match self.fetcher.fetch(candidate.as_str()).await {
            Ok(page) if page.is_ok() => {
                Ok(Verdict::safe(VerdictSource::Noop, "This link is safe"))
            }
            Ok(page) => Ok(Verdict::not_safe(
                VerdictSource::Noop,
                format!("HTTP error code: {}", page.status.unwrap_or(0)),
            )),
            Err(FetchError::Configuration(reason)) => {
                Err(VerificationError::Configuration(reason))
            }
            Err(error) => {
                debug!("Fetch failed for {}: {}", candidate, error);
                Ok(Verdict::not_safe(
                    VerdictSource::Noop,
                    "Error checking the link",
                ))
            }
        }
    }
}
