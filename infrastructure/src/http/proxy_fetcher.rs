//! Proxy-routed page fetcher
//!
//! reqwest adapter for the [`PageFetcher`] port. Verification traffic is
//! routed through the configured SOCKS endpoint with a fixed per-request
//! timeout. A client that cannot be constructed at all is a configuration
//! error; everything that goes wrong per-request maps to transport/timeout.

use crate::config::ProxySettings;
use async_trait::async_trait;
use phishguard_application::{FetchError, PageFetcher};
use phishguard_domain::PageObservation;
use std::time::Duration;
use tracing::debug;

/// Maximum response body size read into memory (5 MB)
const MAX_BODY_SIZE: usize = 5 * 1024 * 1024;

/// HTTP fetcher routed through a forward proxy.
pub struct ProxyFetcher {
    client: reqwest::Client,
    timeout_seconds: u64,
}

impl ProxyFetcher {
    /// Build a fetcher honoring `proxy` and `timeout`.
    pub fn new(proxy: &ProxySettings, timeout: Duration) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("phishguard/", env!("CARGO_PKG_VERSION")));

        if proxy.enabled {
            let socks = reqwest::Proxy::all(proxy.socks_url())
                .map_err(|e| FetchError::Configuration(format!("invalid proxy endpoint: {}", e)))?;
            builder = builder.proxy(socks);
        }

        let client = builder
            .build()
            .map_err(|e| FetchError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            timeout_seconds: timeout.as_secs(),
        })
    }

    fn map_request_error(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout(self.timeout_seconds)
        } else {
            FetchError::Transport(error.to_string())
        }
    }
}

#[async_trait]
impl PageFetcher for ProxyFetcher {
    async fn fetch(&self, url: &str) -> Result<PageObservation, FetchError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status().as_u16();

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_request_error(e))?;
        if body.len() > MAX_BODY_SIZE {
            return Err(FetchError::Transport(format!(
                "response too large: {} bytes (max: {} bytes)",
                body.len(),
                MAX_BODY_SIZE
            )));
        }

        debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(PageObservation::received(
            status,
            String::from_utf8_lossy(&body).into_owned(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_with_proxy_enabled() {
        let fetcher = ProxyFetcher::new(&ProxySettings::default(), Duration::from_secs(10));
        assert!(fetcher.is_ok());
    }

    #[test]
    fn test_builds_without_proxy() {
        let proxy = ProxySettings {
            enabled: false,
            ..ProxySettings::default()
        };
        assert!(ProxyFetcher::new(&proxy, Duration::from_secs(10)).is_ok());
    }
}
