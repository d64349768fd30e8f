//! Analyze-URL use case.
//!
//! Runs the heuristic stage first; a heuristic hit is final and the
//! verification strategy is never invoked (no network cost). Otherwise the
//! configured [`VerificationStrategy`] produces the final verdict.

use crate::ports::verdict_log::{NoVerdictLogger, VerdictLogger, VerdictRecord};
use crate::ports::verification::{VerificationError, VerificationStrategy};
use phishguard_domain::{HeuristicClassifier, UrlCandidate, Verdict};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while analyzing a URL.
///
/// Per-URL failure modes never surface here; strategies map them to
/// Unsafe verdicts. Only a configuration problem escapes.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error(transparent)]
    Verification(#[from] VerificationError),
}

/// Use case for classifying a single URL.
pub struct AnalyzeUrlUseCase {
    classifier: HeuristicClassifier,
    strategy: Arc<dyn VerificationStrategy>,
    logger: Arc<dyn VerdictLogger>,
}

impl Clone for AnalyzeUrlUseCase {
    fn clone(&self) -> Self {
        Self {
            classifier: self.classifier.clone(),
            strategy: self.strategy.clone(),
            logger: self.logger.clone(),
        }
    }
}

impl AnalyzeUrlUseCase {
    pub fn new(classifier: HeuristicClassifier, strategy: Arc<dyn VerificationStrategy>) -> Self {
        Self {
            classifier,
            strategy,
            logger: Arc::new(NoVerdictLogger),
        }
    }

    /// Attach a verdict logger.
    pub fn with_logger(mut self, logger: Arc<dyn VerdictLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Classify one URL to completion.
    pub async fn execute(&self, candidate: &UrlCandidate) -> Result<Verdict, AnalyzeError> {
        if let Some(verdict) = self.classifier.classify(candidate) {
            debug!("Heuristic flagged {}: {}", candidate, verdict.reason);
            self.logger
                .record(VerdictRecord::new(candidate.as_str(), &verdict));
            return Ok(verdict);
        }

        debug!(
            "No heuristic match for {}, delegating to {} strategy",
            candidate,
            self.strategy.source()
        );
        let verdict = self.strategy.verify(candidate).await?;
        self.logger
            .record(VerdictRecord::new(candidate.as_str(), &verdict));
        Ok(verdict)
    }
}
