//! `TrackInfoPort` implementation for `LookupClient`.

use async_trait::async_trait;
use trackdl_core::ports::{TrackInfoError, TrackInfoPort, TrackInfoResult};
use trackdl_core::track::TrackDescriptor;

use crate::client::LookupClient;
use crate::error::LookupError;

/// Convert internal `LookupError` to core `TrackInfoError`.
fn map_error(err: LookupError) -> TrackInfoError {
    match err {
        LookupError::RequestFailed { status, url } => TrackInfoError::Network {
            message: format!("lookup request failed with status {status}: {url}"),
            status_code: Some(status),
        },
        LookupError::Network(e) => TrackInfoError::Network {
            status_code: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        },
        LookupError::InvalidResponse { message } => TrackInfoError::InvalidResponse { message },
        LookupError::JsonParse(e) => TrackInfoError::InvalidResponse {
            message: e.to_string(),
        },
        LookupError::InvalidUrl(e) => TrackInfoError::Network {
            message: format!("invalid lookup endpoint: {e}"),
            status_code: None,
        },
    }
}

#[async_trait]
impl TrackInfoPort for LookupClient {
    async fn fetch_track_info(
        &self,
        url: &str,
        auth_token: &str,
    ) -> TrackInfoResult<TrackDescriptor> {
        let response = self.lookup(url, auth_token).await.map_err(map_error)?;
        let track = response.into_descriptor();
        tracing::debug!(
            name = track.name().unwrap_or_default(),
            artist = track.artist().unwrap_or_default(),
            has_audio = track.audio_url().is_some(),
            "Track info received"
        );
        Ok(track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_failures_keep_the_code() {
        let err = map_error(LookupError::RequestFailed {
            status: 403,
            url: "https://example.com/api".to_string(),
        });
        match err {
            TrackInfoError::Network {
                status_code,
                message,
            } => {
                assert_eq!(status_code, Some(403));
                assert!(message.contains("403"));
            }
            other @ TrackInfoError::InvalidResponse { .. } => {
                panic!("expected network error, got {other:?}")
            }
        }
    }

    #[test]
    fn json_failures_are_invalid_responses() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(
            map_error(LookupError::JsonParse(json_err)),
            TrackInfoError::InvalidResponse { .. }
        ));
    }
}
