//! Chromium driver
//!
//! chromiumoxide adapter for the
//! [`BrowserDriver`](phishguard_application::BrowserDriver) port. Launches
//! a headless Chromium routed through the SOCKS proxy and tears the
//! process down when the session closes. The CDP event handler task is
//! spawned at open and aborted at close.

use crate::config::{BrowserSettings, ProxySettings};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use phishguard_application::{BrowserDriver, BrowserError, BrowserSession, LoadedPage};
use std::path::PathBuf;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Binary names probed when no explicit path is configured
const BROWSER_BINARIES: &[&str] = &["chromium", "chromium-browser", "google-chrome", "chrome"];

/// Launches proxied headless Chromium sessions.
pub struct ChromiumBrowserDriver {
    settings: BrowserSettings,
    proxy: ProxySettings,
    timeout: Duration,
}

impl ChromiumBrowserDriver {
    pub fn new(settings: BrowserSettings, proxy: ProxySettings, timeout: Duration) -> Self {
        Self {
            settings,
            proxy,
            timeout,
        }
    }

    /// Resolve the browser binary: explicit config first, then PATH.
    fn resolve_binary(&self) -> Result<PathBuf, BrowserError> {
        if let Some(configured) = &self.settings.binary {
            let path = PathBuf::from(configured);
            if path.exists() {
                return Ok(path);
            }
            return Err(BrowserError::Configuration(format!(
                "browser binary not found: {}",
                path.display()
            )));
        }

        for name in BROWSER_BINARIES {
            if let Ok(found) = which::which(name) {
                debug!("Using browser binary {}", found.display());
                return Ok(found);
            }
        }

        Err(BrowserError::Configuration(
            "no Chromium/Chrome binary found on PATH; set [browser] binary".to_string(),
        ))
    }
}

#[async_trait]
impl BrowserDriver for ChromiumBrowserDriver {
    async fn open(&self) -> Result<Box<dyn BrowserSession>, BrowserError> {
        let binary = self.resolve_binary()?;

        let mut builder = BrowserConfig::builder()
            .chrome_executable(binary)
            .request_timeout(self.timeout);
        if !self.settings.headless {
            builder = builder.with_head();
        }
        if self.settings.no_sandbox {
            builder = builder.no_sandbox();
        }
        if self.settings.disable_dev_shm {
            builder = builder.arg("--disable-dev-shm-usage");
        }
        if self.proxy.enabled {
            builder = builder.arg(format!(
                "--proxy-server={}",
                self.proxy.browser_proxy_url()
            ));
        }

        let config = builder.build().map_err(BrowserError::Configuration)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| BrowserError::Session(format!("failed to launch browser: {}", e)))?;

        // Drain CDP events until the session closes
        let events: JoinHandle<()> = tokio::spawn(async move {
            while handler.next().await.is_some() {}
        });

        Ok(Box::new(ChromiumSession {
            browser,
            events,
            timeout: self.timeout,
        }))
    }
}

struct ChromiumSession {
    browser: Browser,
    events: JoinHandle<()>,
    timeout: Duration,
}

#[async_trait]
impl BrowserSession for ChromiumSession {
    async fn navigate(&mut self, url: &str) -> Result<LoadedPage, BrowserError> {
        let navigation = async {
            let page = self
                .browser
                .new_page(url)
                .await
                .map_err(|e| BrowserError::Navigation(e.to_string()))?;
            page.wait_for_navigation()
                .await
                .map_err(|e| BrowserError::Navigation(e.to_string()))?;
            let title = page
                .get_title()
                .await
                .map_err(|e| BrowserError::Navigation(e.to_string()))?;
            Ok(LoadedPage { title })
        };

        match tokio::time::timeout(self.timeout, navigation).await {
            Ok(result) => result,
            Err(_) => Err(BrowserError::Navigation(format!(
                "navigation timed out after {}s",
                self.timeout.as_secs()
            ))),
        }
    }

    async fn close(mut self: Box<Self>) -> Result<(), BrowserError> {
        let closed = self.browser.close().await;
        if let Err(error) = self.browser.wait().await {
            warn!("Browser process did not exit cleanly: {}", error);
        }
        self.events.abort();
        closed.map_err(|e| BrowserError::Session(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_configured_binary_is_configuration_error() {
        let settings = BrowserSettings {
            binary: Some("/nonexistent/path/to/chromedriver".to_string()),
            ..BrowserSettings::default()
        };
        let driver = ChromiumBrowserDriver::new(
            settings,
            ProxySettings::default(),
            Duration::from_secs(10),
        );

        let result = driver.resolve_binary();
        assert!(matches!(result, Err(BrowserError::Configuration(_))));
    }

    #[test]
    fn test_configured_binary_is_used_verbatim() {
        // Any file that certainly exists works for the path check
        let settings = BrowserSettings {
            binary: Some("/proc/self/exe".to_string()),
            ..BrowserSettings::default()
        };
        let driver = ChromiumBrowserDriver::new(
            settings,
            ProxySettings::default(),
            Duration::from_secs(10),
        );

        assert_eq!(
            driver.resolve_binary().unwrap(),
            PathBuf::from("/proc/self/exe")
        );
    }
}
