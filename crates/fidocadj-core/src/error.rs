//! Error types for FidoCadJ configuration.
//!
//! Mapping, distance and extent computations never fail; they clamp or fall
//! back instead. Only parsing and validating settings can produce an error.

use thiserror::Error;

/// Errors related to view settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration value is out of valid range.
    #[error("Value out of range for '{key}': {value}")]
    ValueOutOfRange { key: String, value: String },

    /// The settings document could not be parsed.
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
