//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading a [`super::SiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed
    #[error("Config parse failed: {0}")]
    ParseFailed(String),

    /// A value parsed but is out of range
    #[error("Invalid config value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
