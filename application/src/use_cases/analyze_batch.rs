//! Analyze-batch use case.
//!
//! Applies [`AnalyzeUrlUseCase`] to each URL independently and returns the
//! verdicts in input order. Strictly sequential by default; the bounded
//! concurrent mode keeps the same ordering guarantee. One URL's failure
//! never aborts the rest; only a configuration error does.
//!
//! The batch can be abandoned between URL evaluations through the
//! cancellation token; a fetch already in flight is never interrupted.

use crate::config::ExecutionParams;
use crate::ports::progress::AnalysisProgress;
use crate::use_cases::analyze_url::{AnalyzeError, AnalyzeUrlUseCase};
use futures::StreamExt;
use phishguard_domain::{UrlCandidate, Verdict};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Verdict paired with the URL it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlReport {
    pub url: UrlCandidate,
    pub verdict: Verdict,
}

/// Use case for classifying an ordered list of URLs.
pub struct AnalyzeBatchUseCase {
    analyze: AnalyzeUrlUseCase,
    params: ExecutionParams,
    cancel: CancellationToken,
}

impl AnalyzeBatchUseCase {
    pub fn new(analyze: AnalyzeUrlUseCase, params: ExecutionParams) -> Self {
        Self {
            analyze,
            params,
            cancel: CancellationToken::new(),
        }
    }

    /// Token observed between URL evaluations. Cancelling abandons the rest
    /// of the batch; verdicts already produced are still returned.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Classify every candidate, preserving input order in the result.
    pub async fn execute(
        &self,
        candidates: Vec<UrlCandidate>,
        progress: &dyn AnalysisProgress,
    ) -> Result<Vec<UrlReport>, AnalyzeError> {
        let total = candidates.len();
        info!(
            "Analyzing {} URL(s) with concurrency {}",
            total, self.params.concurrency
        );

        if self.params.concurrency <= 1 {
            self.execute_sequential(candidates, progress).await
        } else {
            self.execute_concurrent(candidates, progress).await
        }
    }

    async fn execute_sequential(
        &self,
        candidates: Vec<UrlCandidate>,
        progress: &dyn AnalysisProgress,
    ) -> Result<Vec<UrlReport>, AnalyzeError> {
        let total = candidates.len();
        let mut reports = Vec::with_capacity(total);

        for (index, candidate) in candidates.into_iter().enumerate() {
            if self.cancel.is_cancelled() {
                info!(
                    "Batch cancelled after {} of {} URL(s)",
                    reports.len(),
                    total
                );
                break;
            }

            progress.on_url_started(candidate.as_str(), index, total);
            let verdict = self.analyze.execute(&candidate).await?;
            progress.on_verdict(candidate.as_str(), &verdict);
            reports.push(UrlReport {
                url: candidate,
                verdict,
            });
        }

        Ok(reports)
    }

    async fn execute_concurrent(
        &self,
        candidates: Vec<UrlCandidate>,
        progress: &dyn AnalysisProgress,
    ) -> Result<Vec<UrlReport>, AnalyzeError> {
        let total = candidates.len();
        let analyze = &self.analyze;
        let cancel = &self.cancel;

        // `buffered` yields in input order regardless of completion order,
        // which is what keeps the batch property testable.
        let mut stream = futures::stream::iter(candidates.into_iter().enumerate())
            .map(|(index, candidate)| async move {
                if cancel.is_cancelled() {
                    return (candidate, None);
                }
                progress.on_url_started(candidate.as_str(), index, total);
                let result = analyze.execute(&candidate).await;
                (candidate, Some(result))
            })
            .buffered(self.params.concurrency);

        let mut reports = Vec::with_capacity(total);
        while let Some((candidate, outcome)) = stream.next().await {
            match outcome {
                None => continue,
                Some(Ok(verdict)) => {
                    progress.on_verdict(candidate.as_str(), &verdict);
                    reports.push(UrlReport {
                        url: candidate,
                        verdict,
                    });
                }
                Some(Err(e)) => return Err(e),
            }
        }

        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::ports::verification::{VerificationError, VerificationStrategy};
    use async_trait::async_trait;
    use phishguard_domain::{HeuristicClassifier, Safety, VerdictSource};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    // ==================== Test Mocks ====================

    /// Echoes the URL back in the verdict reason; URLs containing "fail"
    /// get an Unsafe verdict, mimicking a strategy-internal fetch failure.
    struct EchoStrategy {
        calls: AtomicUsize,
        delay_first: Option<Duration>,
    }

    impl EchoStrategy {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                delay_first: None,
            }
        }

        /// Delay the first `verify` call so later URLs finish earlier.
        fn with_first_call_delay(delay: Duration) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                delay_first: Some(delay),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl VerificationStrategy for EchoStrategy {
        fn source(&self) -> VerdictSource {
            VerdictSource::Noop
        }

        async fn verify(&self, candidate: &UrlCandidate) -> Result<Verdict, VerificationError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call == 0
                && let Some(delay) = self.delay_first
            {
                tokio::time::sleep(delay).await;
            }
            if candidate.as_str().contains("fail") {
                Ok(Verdict::not_safe(
                    VerdictSource::Noop,
                    format!("Error checking the link: {}", candidate),
                ))
            } else {
                Ok(Verdict::safe(
                    VerdictSource::Noop,
                    format!("verified {}", candidate),
                ))
            }
        }
    }

    /// Fails with a configuration error on every call after the first.
    struct FlakyEnvironmentStrategy {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl VerificationStrategy for FlakyEnvironmentStrategy {
        fn source(&self) -> VerdictSource {
            VerdictSource::Noop
        }

        async fn verify(&self, _candidate: &UrlCandidate) -> Result<Verdict, VerificationError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(Verdict::safe(VerdictSource::Noop, "This link is safe"))
            } else {
                Err(VerificationError::Configuration("proxy unreachable".into()))
            }
        }
    }

    /// Cancels the supplied token from inside its first `verify` call.
    struct CancellingStrategy {
        token: CancellationToken,
    }

    #[async_trait]
    impl VerificationStrategy for CancellingStrategy {
        fn source(&self) -> VerdictSource {
            VerdictSource::Noop
        }

        async fn verify(&self, _candidate: &UrlCandidate) -> Result<Verdict, VerificationError> {
            self.token.cancel();
            Ok(Verdict::safe(VerdictSource::Noop, "This link is safe"))
        }
    }

    fn candidates(urls: &[&str]) -> Vec<UrlCandidate> {
        urls.iter().map(|u| UrlCandidate::new(*u).unwrap()).collect()
    }

    fn batch(strategy: Arc<dyn VerificationStrategy>, params: ExecutionParams) -> AnalyzeBatchUseCase {
        AnalyzeBatchUseCase::new(
            AnalyzeUrlUseCase::new(HeuristicClassifier::default(), strategy),
            params,
        )
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_sequential_batch_preserves_input_order() {
        let use_case = batch(Arc::new(EchoStrategy::new()), ExecutionParams::default());
        let urls = candidates(&["https://a.example.com", "https://b.example.com", "https://c.example.com"]);

        let reports = use_case.execute(urls.clone(), &NoProgress).await.unwrap();

        assert_eq!(reports.len(), 3);
        for (report, url) in reports.iter().zip(&urls) {
            assert_eq!(&report.url, url);
        }
    }

    #[tokio::test]
    async fn test_one_failure_never_aborts_the_rest() {
        let use_case = batch(Arc::new(EchoStrategy::new()), ExecutionParams::default());
        let urls = candidates(&[
            "https://a.example.com",
            "https://fail.example.com",
            "https://c.example.com",
        ]);

        let reports = use_case.execute(urls, &NoProgress).await.unwrap();

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].verdict.safety, Safety::Safe);
        assert_eq!(reports[1].verdict.safety, Safety::Unsafe);
        assert_eq!(reports[2].verdict.safety, Safety::Safe);
    }

    #[tokio::test]
    async fn test_heuristic_hits_skip_verification_in_batches() {
        let strategy = Arc::new(EchoStrategy::new());
        let use_case = batch(strategy.clone(), ExecutionParams::default());
        let urls = candidates(&[
            "https://a.example.com",
            "https://example.com/login",
            "https://c.example.com",
        ]);

        let reports = use_case.execute(urls, &NoProgress).await.unwrap();

        assert_eq!(strategy.call_count(), 2);
        assert_eq!(reports[1].verdict.source, Some(VerdictSource::Heuristic));
    }

    #[tokio::test]
    async fn test_configuration_error_aborts_batch() {
        let strategy = Arc::new(FlakyEnvironmentStrategy {
            calls: AtomicUsize::new(0),
        });
        let use_case = batch(strategy, ExecutionParams::default());
        let urls = candidates(&["https://a.example.com", "https://b.example.com"]);

        let result = use_case.execute(urls, &NoProgress).await;
        assert!(matches!(
            result,
            Err(AnalyzeError::Verification(
                VerificationError::Configuration(_)
            ))
        ));
    }

    #[tokio::test]
    async fn test_cancellation_stops_between_urls() {
        let token = CancellationToken::new();

        // The strategy cancels the batch token during the first evaluation
        let use_case = AnalyzeBatchUseCase {
            analyze: AnalyzeUrlUseCase::new(
                HeuristicClassifier::default(),
                Arc::new(CancellingStrategy {
                    token: token.clone(),
                }),
            ),
            params: ExecutionParams::default(),
            cancel: token,
        };

        let urls = candidates(&["https://a.example.com", "https://b.example.com", "https://c.example.com"]);
        let reports = use_case.execute(urls, &NoProgress).await.unwrap();

        // The first URL completes; the rest of the batch is abandoned
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].url.as_str(), "https://a.example.com");
    }

    #[tokio::test]
    async fn test_concurrent_batch_preserves_input_order() {
        let strategy = Arc::new(EchoStrategy::with_first_call_delay(Duration::from_millis(50)));
        let use_case = batch(strategy, ExecutionParams::default().with_concurrency(3));
        let urls = candidates(&[
            "https://slow.example.com",
            "https://b.example.com",
            "https://c.example.com",
        ]);

        let reports = use_case.execute(urls.clone(), &NoProgress).await.unwrap();

        assert_eq!(reports.len(), 3);
        for (report, url) in reports.iter().zip(&urls) {
            assert_eq!(&report.url, url);
        }
    }

    #[tokio::test]
    async fn test_concurrent_batch_isolates_failures() {
        let use_case = batch(
            Arc::new(EchoStrategy::new()),
            ExecutionParams::default().with_concurrency(2),
        );
        let urls = candidates(&[
            "https://fail.example.com",
            "https://b.example.com",
        ]);

        let reports = use_case.execute(urls, &NoProgress).await.unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].verdict.safety, Safety::Unsafe);
        assert_eq!(reports[1].verdict.safety, Safety::Safe);
    }
}
