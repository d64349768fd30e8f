//! Verification strategy variants
//!
//! Implementations of the application-layer
//! [`VerificationStrategy`](phishguard_application::VerificationStrategy)
//! port. All of them share the same failure discipline: expected network
//! and browser failures become Unsafe verdicts, never errors.

pub mod browser;
pub mod content_keyword;
pub mod noop;

pub use browser::BrowserStrategy;
pub use content_keyword::ContentKeywordStrategy;
pub use noop::NoopStrategy;
