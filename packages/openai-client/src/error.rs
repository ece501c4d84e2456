//! Error types for the OpenAI client.

use thiserror::Error;

/// Result type for OpenAI client operations.
pub type Result<T> = std::result::Result<T, OpenAIError>;

/// Errors returned by [`crate::OpenAIClient`].
#[derive(Debug, Error)]
pub enum OpenAIError {
    /// Missing API key or invalid client settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection failure or timeout
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from the API
    #[error("API error: {0}")]
    Api(String),

    /// Response body was not the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}
