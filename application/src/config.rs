//! Execution parameters
//!
//! Tunables shared by the verification adapters and the batch runner,
//! supplied externally (config file or CLI), never hardcoded in the core.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for one classification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionParams {
    /// Per-fetch / per-navigation timeout in seconds
    pub timeout_seconds: u64,
    /// URLs evaluated at once; 1 = strictly sequential
    pub concurrency: usize,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            concurrency: 1,
        }
    }
}

impl ExecutionParams {
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Set the batch concurrency; clamped to at least 1.
    pub fn with_concurrency(mut self, jobs: usize) -> Self {
        self.concurrency = jobs.max(1);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ExecutionParams::default();
        assert_eq!(params.timeout_seconds, 10);
        assert_eq!(params.concurrency, 1);
    }

    #[test]
    fn test_builders() {
        let params = ExecutionParams::default()
            .with_timeout_seconds(30)
            .with_concurrency(4);
        assert_eq!(params.timeout(), Duration::from_secs(30));
        assert_eq!(params.concurrency, 4);
    }

    #[test]
    fn test_concurrency_clamped_to_one() {
        let params = ExecutionParams::default().with_concurrency(0);
        assert_eq!(params.concurrency, 1);
    }
}
