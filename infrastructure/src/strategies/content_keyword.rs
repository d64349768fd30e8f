//! Content-inspecting verification
//!
//! Fetches the page through the proxy and inspects the parsed markup, in
//! order: suspicious title tokens, meta-refresh redirection, HTTP status.

use crate::markup;
use async_trait::async_trait;
use phishguard_application::{
    FetchError, PageFetcher, VerificationError, VerificationStrategy,
};
use phishguard_domain::{UrlCandidate, Verdict, VerdictSource};
use std::sync::Arc;
use tracing::debug;

fn default_title_keywords() -> Vec<String> {
    ["login", "verify", "auth", "secure"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Fetches and inspects page markup for phishing tells.
pub struct ContentKeywordStrategy {
    fetcher: Arc<dyn PageFetcher>,
    title_keywords: Vec<String>,
}

impl ContentKeywordStrategy {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            fetcher,
            title_keywords: default_title_keywords(),
        }
    }

    /// Replace the default title token set (login, verify, auth, secure).
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
impl VerificationStrategy for ContentKeywordStrategy {
    fn source(&self) -> VerdictSource {
        VerdictSource::ContentKeyword
    }

    async fn verify(&self, candidate: &UrlCandidate) -> Result<Verdict, VerificationError> {
        let page = match self.fetcher.fetch(candidate.as_str()).await {
            Ok(page) => page,
            Err(FetchError::Configuration(reason)) => {
                return Err(VerificationError::Configuration(reason));
            }
            Err(error) => {
                debug!("Fetch failed for {}: {}", candidate, error);
                return Ok(Verdict::not_safe(
                    VerdictSource::ContentKeyword,
                    error.to_string(),
                ));
            }
        };

        let body = page.body.as_deref().unwrap_or("");

        if let Some(title) = markup::page_title(body)
            && self.title_is_suspicious(&title)
        {
            debug!("Suspicious title for {}: {:?}", candidate, title);
            return Ok(Verdict::not_safe(
                VerdictSource::ContentKeyword,
                "Suspicious keywords found in page title",
            ));
        }

        if markup::has_meta_refresh(body) {
            return Ok(Verdict::not_safe(
                VerdictSource::ContentKeyword,
                "Page contains redirection behavior",
            ));
        }

        if !page.is_ok() {
            return Ok(Verdict::not_safe(
                VerdictSource::ContentKeyword,
                format!("HTTP error code: {}", page.status.unwrap_or(0)),
            ));
        }

        Ok(Verdict::safe(
            VerdictSource::ContentKeyword,
            "No malicious activity detected.",
        ))
    }
}
