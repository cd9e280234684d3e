//! Pipeline configuration.

use std::time::Duration;

/// Size of each read from the response body.
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// Configuration for the download-and-tag pipeline.
///
/// Use the builder pattern methods to customize the configuration.
///
/// # Example
///
/// ```
/// use trackdl_download::DownloadConfig;
/// use std::time::Duration;
///
/// let config = DownloadConfig::new()
///     .with_connect_timeout(Duration::from_secs(10))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Timeout for establishing the audio connection
    pub(crate) connect_timeout: Duration,
    /// Longest wait for the next body chunk before the transfer is abandoned
    pub(crate) read_timeout: Duration,
    /// Total timeout for the cover-art request
    pub(crate) cover_timeout: Duration,
    /// Minimum interval between transfer progress events
    pub(crate) progress_interval: Duration,
    /// Read buffer size for the audio stream
    pub(crate) chunk_size: usize,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("trackdl/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout: Duration::from_secs(30),
            read_timeout: Duration::from_secs(30),
            cover_timeout: Duration::from_secs(30),
            progress_interval: Duration::from_millis(500),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl DownloadConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the connect timeout for the audio request.
    ///
    /// Defaults to 30 seconds. The body has no total timeout, only the
    /// per-read limit set with [`with_read_timeout`](Self::with_read_timeout).
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set how long the transfer waits for the next body chunk.
    ///
    /// Defaults to 30 seconds. A stream that stays silent for longer fails
    /// with a network error.
    #[must_use]
    pub const fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Set the total timeout for the cover-art request.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_cover_timeout(mut self, timeout: Duration) -> Self {
        self.cover_timeout = timeout;
        self
    }

    /// Set the minimum interval between transfer progress events.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_progress_interval(mut self, interval: Duration) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Set the read buffer size. Values below 1 byte are raised to 1.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Minimum interval between transfer progress events.
    pub const fn progress_interval(&self) -> Duration {
        self.progress_interval
    }

    /// Longest wait for the next body chunk.
    pub const fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    /// Read buffer size for the audio stream.
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}
