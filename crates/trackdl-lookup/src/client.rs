//! HTTP client for the lookup service.

use reqwest::header::{ACCEPT, COOKIE, ORIGIN, REFERER};
use serde_json::Value;
use url::Url;

use crate::config::LookupConfig;
use crate::error::{LookupError, LookupResult};
use crate::models::TrackInfoResponse;

const ACCEPT_JSON: &str = "application/json, text/javascript, */*; q=0.01";

/// Client for the track metadata lookup service.
///
/// Use it through the [`TrackInfoPort`](trackdl_core::TrackInfoPort) trait.
#[derive(Debug, Clone)]
pub struct LookupClient {
    client: reqwest::Client,
    endpoint: Url,
    origin: String,
    referer: String,
}

impl LookupClient {
    /// Create a client from configuration.
    ///
    /// Fails if the endpoint is not a valid URL or the HTTP client cannot be
    /// built.
    pub fn new(config: LookupConfig) -> LookupResult<Self> {
        let endpoint = Url::parse(&config.endpoint)?;
        let referer = config.referer();
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            origin: config.origin,
            referer,
        })
    }

    /// The endpoint this client posts to.
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST the track URL and decode the response body.
    ///
    /// `auth_token` is sent verbatim as the `Cookie` header, and left out
    /// entirely when blank.
    pub(crate) async fn lookup(
        &self,
        track_url: &str,
        auth_token: &str,
    ) -> LookupResult<TrackInfoResponse> {
        tracing::debug!(track_url, endpoint = %self.endpoint, "Looking up track");

        let mut request = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, ACCEPT_JSON)
            .header(ORIGIN, self.origin.as_str())
            .header(REFERER, self.referer.as_str())
            .form(&[("url", track_url)]);
        if !auth_token.trim().is_empty() {
            request = request.header(COOKIE, auth_token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::RequestFailed {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        let body = response.bytes().await?;
        parse_body(&body)
    }
}

/// Decode a response body; anything but a JSON object is rejected.
fn parse_body(body: &[u8]) -> LookupResult<TrackInfoResponse> {
    let value: Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(LookupError::InvalidResponse {
            message: format!("expected a JSON object, got {value}"),
        });
    }
    Ok(serde_json::from_value(value)?)
}
