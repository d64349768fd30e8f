//! Verdict logging adapters

pub mod verdict_log;

pub use verdict_log::JsonlVerdictLog;
