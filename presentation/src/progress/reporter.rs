//! Batch progress reporter

use indicatif::{ProgressBar, ProgressStyle};
use phishguard_application::AnalysisProgress;
use phishguard_domain::Verdict;
use std::sync::Mutex;

/// indicatif-backed progress bar implementing
/// [`AnalysisProgress`].
///
/// The bar is created lazily on the first callback, once the batch size is
/// known, and cleared via [`finish`](Self::finish).
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn ensure_bar(&self, total: usize) -> ProgressBar {
        let mut guard = self.bar.lock().unwrap();
        if let Some(bar) = guard.as_ref() {
            return bar.clone();
        }

        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::with_template("{spinner} [{pos}/{len}] {msg}")
                .expect("static template is valid"),
        );
        *guard = Some(bar.clone());
        bar
    }

    /// Clear the bar once the batch is done.
    pub fn finish(&self) {
        if let Some(bar) = self.bar.lock().unwrap().take() {
            bar.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisProgress for ProgressReporter {
    fn on_url_started(&self, url: &str, _index: usize, total: usize) {
        let bar = self.ensure_bar(total);
        bar.set_message(url.to_string());
    }

    fn on_verdict(&self, _url: &str, _verdict: &Verdict) {
        if let Some(bar) = self.bar.lock().unwrap().as_ref() {
            bar.inc(1);
        }
    }
}
