//! Domain layer for phishguard
//!
//! This crate contains the core classification model: URL candidates, the
//! verdict value objects, and the URL-string heuristics. It has no
//! dependencies on infrastructure or presentation concerns and performs
//! no I/O.
//!
//! # Core Concepts
//!
//! ## Two-stage classification
//!
//! - **Heuristic stage**: a pure check over the URL string alone, requiring
//!   no network access. A match is final ("unsafe"); no match means
//!   "undecided", never "safe".
//! - **Verification stage**: a network- or browser-backed check, modeled in
//!   the application layer, that produces the final verdict for URLs the
//!   heuristics did not flag.

pub mod classification;
pub mod core;
pub mod heuristics;

// Re-export commonly used types
pub use classification::{
    candidate::UrlCandidate,
    observation::PageObservation,
    verdict::{Safety, Verdict, VerdictSource},
};
pub use core::error::DomainError;
pub use heuristics::{classifier::HeuristicClassifier, config::HeuristicConfig};
