//! Verdict value objects
//!
//! A [`Verdict`] is the final word on one URL: a structured Safe/Unsafe
//! status, a human-readable reason, and the stage that produced it.
//! Consumers branch on [`Safety`], never on the reason text.

use serde::{Deserialize, Serialize};

/// Final classification status for a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Safety {
    Safe,
    Unsafe,
}

impl Safety {
    pub fn is_safe(self) -> bool {
        matches!(self, Safety::Safe)
    }
}

/// Which stage produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictSource {
    /// URL-string heuristics, no network access
    Heuristic,
    /// Proxy reachability check (HTTP 200 counts as safe)
    Noop,
    /// Proxied fetch with markup inspection
    ContentKeyword,
    /// Headless browser render with title inspection
    Browser,
}

impl VerdictSource {
    pub fn as_str(self) -> &'static str {
        match self {
            VerdictSource::Heuristic => "heuristic",
            VerdictSource::Noop => "noop",
            VerdictSource::ContentKeyword => "content_keyword",
            VerdictSource::Browser => "browser",
        }
    }
}

impl std::fmt::Display for VerdictSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Safe/Unsafe classification with an explanatory reason and originating
/// stage. Created once per classification call; never persisted by the core.
///
/// # Example
///
/// ```
/// use phishguard_domain::{Verdict, VerdictSource};
///
/// let verdict = Verdict::not_safe(VerdictSource::Heuristic, "keyword match");
/// assert!(!verdict.is_safe());
/// assert_eq!(verdict.reason, "keyword match");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Structured status; the only field output logic may branch on
    pub safety: Safety,
    /// Human-readable explanation
    pub reason: String,
    /// Stage that produced this verdict, if known
    pub source: Option<VerdictSource>,
}

impl Verdict {
    pub fn new(safety: Safety, source: VerdictSource, reason: impl Into<String>) -> Self {
        Self {
            safety,
            reason: reason.into(),
            source: Some(source),
        }
    }

    /// Create a Safe verdict.
    pub fn safe(source: VerdictSource, reason: impl Into<String>) -> Self {
        Self::new(Safety::Safe, source, reason)
    }

    /// Create an Unsafe verdict.
    pub fn not_safe(source: VerdictSource, reason: impl Into<String>) -> Self {
        Self::new(Safety::Unsafe, source, reason)
    }

    pub fn is_safe(&self) -> bool {
        self.safety.is_safe()
    }
}
