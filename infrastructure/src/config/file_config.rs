//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use phishguard_application::ExecutionParams;
use phishguard_domain::HeuristicConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("concurrency cannot be 0")]
    InvalidConcurrency,

    #[error("heuristic keyword list cannot be empty")]
    EmptyKeywords,

    #[error("proxy host cannot be empty")]
    EmptyProxyHost,
}

/// Proxy endpoint for verification traffic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    /// Route verification traffic through the proxy at all
    pub enabled: bool,
    pub host: String,
    pub port: u16,
}

impl Default for ProxySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            host: "127.0.0.1".to_string(),
            port: 9050,
        }
    }
}

impl ProxySettings {
    /// SOCKS endpoint for the HTTP client. `socks5h` so hostnames resolve
    /// on the proxy side, not locally.
    pub fn socks_url(&self) -> String {
        format!("socks5h://{}:{}", self.host, self.port)
    }

    /// Endpoint in the form Chromium's `--proxy-server` flag understands.
    pub fn browser_proxy_url(&self) -> String {
        format!("socks5://{}:{}", self.host, self.port)
    }
}

/// Headless browser launch options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserSettings {
    /// Browser binary path; discovered on PATH when unset
    pub binary: Option<String>,
    pub headless: bool,
    pub no_sandbox: bool,
    pub disable_dev_shm: bool,
    /// Title tokens that flag a rendered page
    pub title_keywords: Vec<String>,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            binary: None,
            headless: true,
            no_sandbox: true,
            disable_dev_shm: true,
            title_keywords: vec!["login".to_string(), "auth".to_string()],
        }
    }
}

/// Verification stage options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileVerificationConfig {
    /// Per-fetch / per-navigation timeout in seconds
    pub timeout_seconds: u64,
    /// URLs verified at once; 1 = strictly sequential
    pub concurrency: usize,
    /// Title tokens checked by the content-keyword strategy
    pub title_keywords: Vec<String>,
}

impl Default for FileVerificationConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            concurrency: 1,
            title_keywords: ["login", "verify", "auth", "secure"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Tor control-port settings for the optional new-identity pre-step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitSettings {
    pub host: String,
    pub port: u16,
    /// Control-port password, when the daemon requires one
    pub password: Option<String>,
}

impl Default for CircuitSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9051,
            password: None,
        }
    }
}

impl CircuitSettings {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Console output options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Top-level config file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Keyword/suffix data for the heuristic stage (uses the domain type)
    pub heuristics: HeuristicConfig,
    pub verification: FileVerificationConfig,
    pub proxy: ProxySettings,
    pub browser: BrowserSettings,
    pub circuit: CircuitSettings,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Reject values no adapter can work with.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.verification.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.verification.concurrency == 0 {
            return Err(ConfigValidationError::InvalidConcurrency);
        }
        if self.heuristics.keywords.is_empty() {
            return Err(ConfigValidationError::EmptyKeywords);
        }
        if self.proxy.enabled && self.proxy.host.trim().is_empty() {
            return Err(ConfigValidationError::EmptyProxyHost);
        }
        Ok(())
    }

    /// Execution parameters for the application layer.
    pub fn execution_params(&self) -> ExecutionParams {
        ExecutionParams::default()
            .with_timeout_seconds(self.verification.timeout_seconds)
            .with_concurrency(self.verification.concurrency)
    }
}
