//! Verdict log port
//!
//! Sink for per-URL classification outcomes. The JSONL file implementation
//! lives in the infrastructure layer; use cases default to the no-op.

use phishguard_domain::{Safety, Verdict, VerdictSource};
use serde::{Deserialize, Serialize};

/// One classification outcome, as recorded by a [`VerdictLogger`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictRecord {
    pub url: String,
    pub safety: Safety,
    pub reason: String,
    pub source: Option<VerdictSource>,
}

impl VerdictRecord {
    pub fn new(url: impl Into<String>, verdict: &Verdict) -> Self {
        Self {
            url: url.into(),
            safety: verdict.safety,
            reason: verdict.reason.clone(),
            source: verdict.source,
        }
    }
}

/// Records verdicts as they are produced.
pub trait VerdictLogger: Send + Sync {
    fn record(&self, record: VerdictRecord);
}

/// Discards all records.
pub struct NoVerdictLogger;

impl VerdictLogger for NoVerdictLogger {
    fn record(&self, _record: VerdictRecord) {}
}
