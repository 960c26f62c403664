//! Error types for the core library.

use thiserror::Error;

/// Errors raised by a remote API call.
///
/// Cloneable so a failed result can travel inside UI messages; the
/// underlying transport error is flattened to its display text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, timeout, body read).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("{endpoint} returned HTTP {status}")]
    Status {
        /// Endpoint path that was called.
        endpoint: String,
        /// HTTP status code.
        status: u16,
    },

    /// The response body could not be decoded.
    #[error("Malformed payload: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result of a remote API call.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors that can occur in non-network core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
