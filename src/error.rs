//! Error types for configuring a sumador screen.
//!
//! The compute/input/clear path is infallible. Only the surfaces that turn
//! external data into typed values (locale tags, slot numbers, JSON
//! configuration) can fail.

use thiserror::Error;

/// Errors raised while building the screen's configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The locale tag does not name a built-in currency format.
    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    /// Input slots are numbered 1 and 2.
    #[error("invalid input slot: {0} (expected 1 or 2)")]
    InvalidSlot(u8),

    /// The configuration document could not be deserialized.
    #[error("malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}
