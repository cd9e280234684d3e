//! Track metadata lookup port.

use async_trait::async_trait;
use thiserror::Error;

use crate::track::TrackDescriptor;

/// Errors from track lookup operations.
///
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum TrackInfoError {
    /// Network or connectivity error, including non-success HTTP statuses.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        /// HTTP status code if the server answered
        status_code: Option<u16>,
    },

    /// The lookup service answered with something we could not understand.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },
}

/// Result type for lookup operations.
pub type TrackInfoResult<T> = Result<T, TrackInfoError>;

/// Port trait for the metadata lookup service.
///
/// The implementation lives in `trackdl-lookup`.
#[async_trait]
pub trait TrackInfoPort: Send + Sync {
    /// Resolve a public track page URL into a [`TrackDescriptor`].
    ///
    /// # Arguments
    ///
    /// * `url` - The track page URL entered by the user
    /// * `auth_token` - Opaque credential forwarded to the service untouched
    async fn fetch_track_info(
        &self,
        url: &str,
        auth_token: &str,
    ) -> TrackInfoResult<TrackDescriptor>;
}
