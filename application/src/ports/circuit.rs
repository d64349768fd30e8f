//! Anonymity circuit controller port
//!
//! Optional capability to rotate the anonymity-network circuit before a
//! batch. Invoked by the caller as a pre-step; classification logic never
//! depends on it.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the circuit control connection.
#[derive(Error, Debug)]
pub enum CircuitError {
    #[error("Control connection failed: {0}")]
    Transport(String),

    #[error("Control command rejected: {0}")]
    Rejected(String),
}

/// Requests a fresh circuit identity from the anonymity network.
#[async_trait]
pub trait CircuitController: Send + Sync {
    async fn request_new_identity(&self) -> Result<(), CircuitError>;
}
