//! Heuristic matching configuration

use serde::{Deserialize, Serialize};

/// Keyword and suffix data consumed by
/// [`HeuristicClassifier`](super::classifier::HeuristicClassifier).
///
/// Both lists are injected at construction time; nothing is hardcoded in
/// the classifier itself. The defaults reproduce the data the tool has
/// always shipped with, including duplicate entries and entries that can
/// only ever match literally (`"[.]com"`, `".ru<"`, bare `"gq"`). These are
/// kept as data, exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Substrings that flag a URL anywhere in its lower-cased form
    pub keywords: Vec<String>,
    /// Literal suffixes that flag a URL (naive `ends_with`, not DNS-aware)
    pub suspicious_suffixes: Vec<String>,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            keywords: [
                "login", "secure", "account", "verify", "webscr", "update", "auth", "signin",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            suspicious_suffixes: [
                ".xyz",
                ".click",
                ".top",
                ".tk",
                ".ml",
                ".ga",
                ".cf",
                ".gq",
                "[.]com",
                ".beauty",
                ".buzz",
                ".shop",
                ".cf",
                ".cn",
                ".trycloudflare.com",
                ".dad",
                ".zip",
                ".mov",
                ".nexus",
                ".club",
                ".icu",
                ".host",
                ".ru",
                ".ru<",
                ".wang",
                "gq",
                ".ml",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl HeuristicConfig {
    /// Config with custom keywords and no suffix rule.
    pub fn keywords_only(keywords: Vec<String>) -> Self {
        Self {
            keywords,
            suspicious_suffixes: Vec::new(),
        }
    }
}
