//! Progress notification port
//!
//! Callback surface for batch runs. Implementations live in the
//! presentation layer and can display progress in various ways.

use phishguard_domain::Verdict;

/// Callbacks fired while a batch is analyzed.
pub trait AnalysisProgress: Send + Sync {
    /// Called when a URL's evaluation begins.
    fn on_url_started(&self, url: &str, index: usize, total: usize);

    /// Called when a URL's verdict is available.
    fn on_verdict(&self, url: &str, verdict: &Verdict);
}

/// No-op notifier for when progress reporting is not needed.
pub struct NoProgress;

impl AnalysisProgress for NoProgress {
    fn on_url_started(&self, _url: &str, _index: usize, _total: usize) {}
    fn on_verdict(&self, _url: &str, _verdict: &Verdict) {}
}
