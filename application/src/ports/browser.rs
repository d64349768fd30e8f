//! Headless browser port
//!
//! A [`BrowserDriver`] launches sessions; a [`BrowserSession`] navigates
//! and is then released. `close` consumes the session, so release can only
//! happen once; strategies are expected to call it on every exit path,
//! including navigation failures and timeouts.

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by the browser adapter.
#[derive(Error, Debug)]
pub enum BrowserError {
    /// Missing binary, invalid launch options; aborts the whole batch
    #[error("Browser configuration error: {0}")]
    Configuration(String),

    /// Launch or teardown failure of an individual session
    #[error("Browser session error: {0}")]
    Session(String),

    /// The page could not be loaded or inspected
    #[error("Navigation failed: {0}")]
    Navigation(String),
}

impl BrowserError {
    /// Whether this error means the environment cannot verify at all.
    pub fn is_configuration(&self) -> bool {
        matches!(self, BrowserError::Configuration(_))
    }
}

/// Result of a completed navigation.
#[derive(Debug, Clone, Default)]
pub struct LoadedPage {
    /// Document title, if the page exposed one
    pub title: Option<String>,
}

/// Launches browser sessions routed through the configured proxy.
#[async_trait]
pub trait BrowserDriver: Send + Sync {
    async fn open(&self) -> Result<Box<dyn BrowserSession>, BrowserError>;
}

/// One live browser session.
#[async_trait]
pub trait BrowserSession: Send {
    /// Navigate to `url` and report the resulting document.
    async fn navigate(&mut self, url: &str) -> Result<LoadedPage, BrowserError>;

    /// Release the session and its underlying browser process.
    async fn close(self: Box<Self>) -> Result<(), BrowserError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_configuration() {
        assert!(BrowserError::Configuration("no binary".into()).is_configuration());
        assert!(!BrowserError::Session("crashed".into()).is_configuration());
        assert!(!BrowserError::Navigation("timed out".into()).is_configuration());
    }
}
