//! Infrastructure layer for phishguard
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: proxy-routed fetching, markup inspection, the
//! verification strategy variants, the headless browser driver, Tor
//! circuit control, verdict logging, and configuration file loading.

pub mod browser;
pub mod config;
pub mod http;
pub mod logging;
pub mod markup;
pub mod strategies;
pub mod tor;

// Re-export commonly used types
pub use browser::ChromiumBrowserDriver;
pub use config::{
    BrowserSettings, CircuitSettings, ConfigLoader, ConfigValidationError, FileConfig,
    FileOutputConfig, FileVerificationConfig, ProxySettings,
};
pub use http::ProxyFetcher;
pub use logging::JsonlVerdictLog;
pub use strategies::{BrowserStrategy, ContentKeywordStrategy, NoopStrategy};
pub use tor::TorCircuitController;
