//! First-stage URL classifier
//!
//! Inspects the URL string only: no I/O, no side effects, deterministic
//! for a given [`HeuristicConfig`]. A `None` result means "no heuristic
//! matched": safety is only established by the verification stage, never
//! presumed here.

use super::config::HeuristicConfig;
use crate::classification::{UrlCandidate, Verdict, VerdictSource};

/// Pure keyword/suffix classifier over the URL string.
#[derive(Debug, Clone, Default)]
pub struct HeuristicClassifier {
    config: HeuristicConfig,
}

impl HeuristicClassifier {
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    /// Apply the keyword rule, then the suffix rule, to the lower-cased URL.
    ///
    /// Returns `Some(Unsafe)` on the first match, `None` when neither rule
    /// fires.
    pub fn classify(&self, candidate: &UrlCandidate) -> Option<Verdict> {
        let lowered = candidate.lowered();

        if self
            .config
            .keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
        {
            return Some(Verdict::not_safe(VerdictSource::Heuristic, "keyword match"));
        }

        // Literal suffix test against the whole lower-cased URL, not a
        // DNS-aware TLD parse.
        if self
            .config
            .suspicious_suffixes
            .iter()
            .any(|suffix| lowered.ends_with(suffix.as_str()))
        {
            return Some(Verdict::not_safe(VerdictSource::Heuristic, "suspicious TLD"));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::Safety;

    fn candidate(url: &str) -> UrlCandidate {
        UrlCandidate::new(url).unwrap()
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let classifier = HeuristicClassifier::default();
        let verdict = classifier
            .classify(&candidate("https://example.com/Login"))
            .unwrap();
        assert_eq!(verdict.safety, Safety::Unsafe);
        assert_eq!(verdict.reason, "keyword match");
        assert_eq!(verdict.source, Some(VerdictSource::Heuristic));
    }

    #[test]
    fn test_keyword_matches_anywhere_in_url() {
        let classifier = HeuristicClassifier::default();
        for url in [
            "https://secure-paypal.example.net/",
            "http://example.com/?next=verify",
            "https://webscr.example.org/cmd",
        ] {
            let verdict = classifier.classify(&candidate(url)).unwrap();
            assert_eq!(verdict.reason, "keyword match", "url: {}", url);
        }
    }

    #[test]
    fn test_suffix_match_without_keyword() {
        let classifier = HeuristicClassifier::default();
        let verdict = classifier.classify(&candidate("https://example.xyz")).unwrap();
        assert_eq!(verdict.safety, Safety::Unsafe);
        assert_eq!(verdict.reason, "suspicious TLD");
    }

    #[test]
    fn test_keyword_rule_wins_over_suffix_rule() {
        let classifier = HeuristicClassifier::default();
        let verdict = classifier
            .classify(&candidate("https://login.example.xyz"))
            .unwrap();
        assert_eq!(verdict.reason, "keyword match");
    }

    #[test]
    fn test_no_match_returns_none() {
        let classifier = HeuristicClassifier::default();
        assert!(classifier.classify(&candidate("https://example.com")).is_none());
        assert!(classifier.classify(&candidate("https://rust-lang.org")).is_none());
    }

    #[test]
    fn test_bracketed_suffix_entry_only_matches_literally() {
        let classifier = HeuristicClassifier::default();
        // "[.]com" is literal data; it does not act as ".com"
        assert!(classifier.classify(&candidate("https://example.com")).is_none());
        let verdict = classifier.classify(&candidate("https://evil[.]com")).unwrap();
        assert_eq!(verdict.reason, "suspicious TLD");
    }

    #[test]
    fn test_suffix_match_is_case_insensitive() {
        let classifier = HeuristicClassifier::default();
        let verdict = classifier.classify(&candidate("https://EXAMPLE.XYZ")).unwrap();
        assert_eq!(verdict.reason, "suspicious TLD");
    }

    #[test]
    fn test_custom_config() {
        let classifier = HeuristicClassifier::new(HeuristicConfig::keywords_only(vec![
            "phish".to_string(),
        ]));
        assert!(classifier
            .classify(&candidate("https://login.example.com"))
            .is_none());
        assert!(classifier
            .classify(&candidate("https://phish.example.com"))
            .is_some());
    }

    #[test]
    fn test_classification_is_deterministic() {
        let classifier = HeuristicClassifier::default();
        let url = candidate("https://example.com/account");
        assert_eq!(classifier.classify(&url), classifier.classify(&url));
    }
}
