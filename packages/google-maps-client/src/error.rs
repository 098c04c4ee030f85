//! Error types for the Google Maps client.

use thiserror::Error;

/// Result type for Google Maps client operations.
pub type Result<T> = std::result::Result<T, MapsError>;

/// Google Maps client errors.
#[derive(Debug, Error)]
pub enum MapsError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx HTTP response
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// HTTP 200 with a non-OK `status` field in the body
    #[error("Maps API returned {status}: {message}")]
    Status { status: String, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl MapsError {
    /// The Maps API status string, if this error came from one.
    pub fn api_status(&self) -> Option<&str> {
        match self {
            MapsError::Status { status, .. } => Some(status),
            _ => None,
        }
    }
}
