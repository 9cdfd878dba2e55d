//! Error types for the meter front end.

use thiserror::Error;

/// Errors that can occur while configuring a meter.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MeterError {
    /// A decimal setting (the ISO rating) could not be parsed.
    #[error("invalid setting: {0}")]
    Core(#[from] exposure_core::Error),

    /// The JSON configuration is malformed or has the wrong shape.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for meter operations.
pub type MeterResult<T> = std::result::Result<T, MeterError>;
