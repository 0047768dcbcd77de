//! Error types for the data access layer.

use thiserror::Error;

/// Errors that can occur while talking to the data service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Transport failure or non-success response.
    #[error("network error: {0}")]
    Network(String),

    /// Response body was not the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Client settings could not be loaded or applied.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Returns a user-friendly error message suitable for display.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::NotFound(_) => "Pokemon not found",
            Self::Network(_) => "Failed to fetch",
            Self::MalformedResponse(_) => "Unexpected response from the data service",
            Self::InvalidConfig(_) => "Invalid client configuration",
        }
    }

    /// Returns whether this error is potentially recoverable with a retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

/// Result type alias for data access operations.
pub type Result<T> = std::result::Result<T, ClientError>;
