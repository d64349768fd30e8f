//! Browser-rendered verification
//!
//! Drives a headless browser session through the proxy and inspects the
//! rendered document title. The session is released exactly once on every
//! exit path, whether navigation succeeds, fails, or times out.

use async_trait::async_trait;
use phishguard_application::{
    BrowserDriver, BrowserError, VerificationError, VerificationStrategy,
};
use phishguard_domain::{UrlCandidate, Verdict, VerdictSource};
use std::sync::Arc;
use tracing::{debug, warn};

fn default_title_keywords() -> Vec<String> {
    vec!["login".to_string(), "auth".to_string()]
}

/// Renders the page in a headless browser and inspects its title.
pub struct BrowserStrategy {
    driver: Arc<dyn BrowserDriver>,
    title_keywords: Vec<String>,
}

impl BrowserStrategy {
    pub fn new(driver: Arc<dyn BrowserDriver>) -> Self {
        Self {
            driver,
            title_keywords: default_title_keywords(),
        }
    }

    /// Replace the default title token set (login, auth).
    pub fn with_title_keywords(mut self, keywords: Vec<String>) -> Self {
        self.title_keywords = keywords;
        self
    }

    fn title_is_suspicious(&self, title: &str) -> bool {
        let lowered = title.to_lowercase();
        self.title_keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
    }
}

#[async_trait]
impl VerificationStrategy for BrowserStrategy {
    fn source(&self) -> VerdictSource {
        VerdictSource::Browser
    }

    async fn verify(&self, candidate: &UrlCandidate) -> Result<Verdict, VerificationError> {
        let mut session = match self.driver.open().await {
            Ok(session) => session,
            Err(BrowserError::Configuration(reason)) => {
                return Err(VerificationError::Configuration(reason));
            }
            Err(error) => {
                debug!("Browser session setup failed: {}", error);
                return Ok(Verdict::not_safe(VerdictSource::Browser, error.to_string()));
            }
        };

        let navigated = session.navigate(candidate.as_str()).await;

        // Release before deriving the verdict; the navigation outcome must
        // never keep the session alive.
        if let Err(error) = session.close().await {
            warn!("Browser session close failed: {}", error);
        }

        match navigated {
            Ok(page) => {
                let title = page.title.unwrap_or_default();
                debug!("Rendered title for {}: {:?}", candidate, title);
                if self.title_is_suspicious(&title) {
                    Ok(Verdict::not_safe(
                        VerdictSource::Browser,
                        "Contains suspicious keywords in title",
                    ))
                } else {
                    Ok(Verdict::safe(VerdictSource::Browser, "This link is safe."))
                }
            }
            Err(error) => Ok(Verdict::not_safe(VerdictSource::Browser, error.to_string())),
        }
    }
}
