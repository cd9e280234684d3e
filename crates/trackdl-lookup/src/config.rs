//! Public configuration for the lookup client.

use std::time::Duration;

/// Default lookup endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://scloudplaylistdownloadermp3.com/api/scinfo.php";

/// Default site the lookup requests claim to originate from.
pub const DEFAULT_ORIGIN: &str = "https://scloudplaylistdownloadermp3.com";

/// Browser user agent; the service rejects obvious non-browser clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/137.0.0.0 Safari/537.36";

/// Configuration for the lookup client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use trackdl_lookup::LookupConfig;
/// use std::time::Duration;
///
/// let config = LookupConfig::new()
///     .with_endpoint("http://127.0.0.1:8080/api/scinfo.php")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Full URL of the lookup endpoint
    pub(crate) endpoint: String,
    /// Value of the `Origin` header; `Referer` is derived from it
    pub(crate) origin: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Total request timeout
    pub(crate) timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl LookupConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lookup endpoint URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the `Origin` header value.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `Referer` header value: the origin with a trailing slash.
    pub(crate) fn referer(&self) -> String {
        format!("{}/", self.origin.trim_end_matches('/'))
    }
}
