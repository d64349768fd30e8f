//! Tor control-port adapters

pub mod control;

pub use control::TorCircuitController;
