//! URL candidate value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A URL submitted for classification.
///
/// The only invariant enforced here is that the trimmed input is non-empty.
/// No URL schema validation happens at this level: a malformed URL is
/// allowed to fail later, at fetch time.
///
/// # Example
///
/// ```
/// use phishguard_domain::UrlCandidate;
///
/// let candidate = UrlCandidate::new("  https://example.com  ").unwrap();
/// assert_eq!(candidate.as_str(), "https://example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlCandidate(String);

impl UrlCandidate {
    /// Create a candidate from raw input, trimming surrounding whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyUrl);
        }
        Ok(Self(trimmed))
    }

    /// The trimmed URL string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form used by case-insensitive matching rules.
    pub fn lowered(&self) -> String {
        self.0.to_lowercase()
    }
}

impl std::fmt::Display for UrlCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
