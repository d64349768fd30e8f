//! Verification strategy port
//!
//! Second-stage check for URLs the heuristic stage did not flag. Expected
//! failure modes (transport errors, unparsable pages, browser crashes)
//! are mapped to Unsafe verdicts *inside* the strategy and never propagate
//! as errors. The only error a strategy may return is a configuration
//! problem (unreachable proxy endpoint, missing browser binary): the
//! environment cannot verify at all, and the whole batch stops.

use async_trait::async_trait;
use phishguard_domain::{UrlCandidate, Verdict, VerdictSource};
use thiserror::Error;

/// The single batch-aborting error class.
#[derive(Error, Debug)]
pub enum VerificationError {
    #[error("Verification unavailable: {0}")]
    Configuration(String),
}

/// Fetch or render a candidate and derive the final verdict.
#[async_trait]
pub trait VerificationStrategy: Send + Sync {
    /// Tag recorded in verdicts produced by this strategy.
    fn source(&self) -> VerdictSource;

    /// Verify a candidate that already passed the heuristic stage.
    async fn verify(&self, candidate: &UrlCandidate) -> Result<Verdict, VerificationError>;
}
