//! Error types for the identity client.

use thiserror::Error;

/// Result type for identity client operations.
pub type Result<T> = std::result::Result<T, IdentityError>;

/// Identity client errors.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Configuration error (missing base URL, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response, unknown user, rejected token)
    #[error("API error: {0}")]
    Api(String),

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}
