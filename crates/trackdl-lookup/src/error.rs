//! Internal error types for lookup operations.
//!
//! Lookups map these to the core `TrackInfoError` at the port boundary;
//! only construction surfaces them directly.

use thiserror::Error;

/// Result type alias for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors from the lookup client.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The service answered with a non-success status.
    #[error("Lookup request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The endpoint that was requested
        url: String,
    },

    /// The service answered with a body we could not use.
    #[error("Invalid response from lookup service: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The configured endpoint is not a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
