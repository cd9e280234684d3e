//! Transfer engine: one streaming GET written to disk chunk by chunk.

use std::io;
use std::path::Path;
use std::time::Instant;

use futures_util::TryStreamExt;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio_util::io::StreamReader;
use tokio_util::sync::CancellationToken;
use trackdl_core::download::{DownloadError, DownloadResult};
use trackdl_core::utils::size::{format_rate, format_size};

use crate::config::DownloadConfig;
use crate::progress::{PREPARED, ProgressReporter, ProgressThrottle, TRANSFERRED};

/// Byte counters for one transfer.
///
/// Owned by the job executing the transfer; never shared.
#[derive(Debug, Clone)]
pub struct TransferCounters {
    /// Bytes written to disk so far.
    pub bytes_downloaded: u64,
    /// Declared `content-length`, or 0 when unknown.
    pub total_bytes: u64,
    /// When the last throughput sample was taken.
    pub last_sample_time: Instant,
    /// `bytes_downloaded` at the last throughput sample.
    pub last_sample_bytes: u64,
}

impl TransferCounters {
    /// Fresh counters with the sample clock starting now.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Fresh counters with the sample clock starting at `start`.
    pub const fn starting_at(start: Instant) -> Self {
        Self {
            bytes_downloaded: 0,
            total_bytes: 0,
            last_sample_time: start,
            last_sample_bytes: 0,
        }
    }

    /// Account for `len` more bytes written.
    pub const fn record(&mut self, len: u64) {
        self.bytes_downloaded += len;
    }

    /// Overall job percentage for the current byte count.
    ///
    /// Maps the transfer into the 10-80 range. Returns `None` when the total
    /// size is unknown.
    pub fn percent(&self) -> Option<u8> {
        if self.total_bytes == 0 {
            return None;
        }
        let span = u128::from(TRANSFERRED - PREPARED);
        let done = u128::from(self.bytes_downloaded.min(self.total_bytes));
        // done <= total, so scaled <= span and fits in a u8
        #[allow(clippy::cast_possible_truncation)]
        let scaled = (done * span / u128::from(self.total_bytes)) as u8;
        Some((PREPARED + scaled).min(TRANSFERRED))
    }

    /// Take a throughput sample and move the sample point to `now`.
    ///
    /// Returns bytes per second since the previous sample, or 0 when no time
    /// has elapsed.
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&mut self, now: Instant) -> f64 {
        let elapsed = now
            .saturating_duration_since(self.last_sample_time)
            .as_secs_f64();
        let delta = self.bytes_downloaded.saturating_sub(self.last_sample_bytes);

        self.last_sample_time = now;
        self.last_sample_bytes = self.bytes_downloaded;

        if elapsed > 0.0 {
            delta as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Status line for the current counters and a throughput value.
    pub fn status_message(&self, bytes_per_sec: f64) -> String {
        let downloaded = format_size(self.bytes_downloaded);
        let rate = format_rate(bytes_per_sec);
        if self.total_bytes > 0 {
            let total = format_size(self.total_bytes);
            format!("Downloading... {downloaded} / {total} ({rate})")
        } else {
            format!("Downloading... {downloaded} ({rate})")
        }
    }
}

impl Default for TransferCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// Streams one HTTP resource to a local file.
pub(crate) struct TransferEngine<'a> {
    client: &'a reqwest::Client,
    config: &'a DownloadConfig,
}

impl<'a> TransferEngine<'a> {
    pub(crate) const fn new(client: &'a reqwest::Client, config: &'a DownloadConfig) -> Self {
        Self { client, config }
    }

    /// Download `url` into `dest`, creating parent directories as needed.
    ///
    /// The response is read `chunk_size` bytes at a time and each chunk is
    /// appended to the file before the next read. A partially written file is
    /// left in place on failure or cancellation.
    pub(crate) async fn download(
        &self,
        url: &str,
        dest: &Path,
        counters: &mut TransferCounters,
        reporter: &mut ProgressReporter,
        cancel: &CancellationToken,
    ) -> DownloadResult<()> {
        tracing::debug!(url, dest = %dest.display(), "Starting transfer");

        let response = tokio::select! {
            biased;

            () = cancel.cancelled() => return Err(DownloadError::Cancelled),

            sent = self.client.get(url).send() => {
                sent.map_err(|e| DownloadError::network(e.to_string()))?
            }
        };

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("request failed");
            return Err(DownloadError::network_with_status(
                format!("{reason} for {url}"),
                status.as_u16(),
            ));
        }

        let start = Instant::now();
        *counters = TransferCounters::starting_at(start);
        counters.total_bytes = response.content_length().unwrap_or(0);
        tracing::debug!(total_bytes = counters.total_bytes, "Response headers received");

        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DownloadError::from_io_error(&e))?;
        }
        let mut file = File::create(dest)
            .await
            .map_err(|e| DownloadError::from_io_error(&e))?;

        let body = response.bytes_stream().map_err(io::Error::other);
        let reader = StreamReader::new(body);
        tokio::pin!(reader);

        let mut throttle = ProgressThrottle::starting_at(self.config.progress_interval(), start);
        let mut buf = vec![0u8; self.config.chunk_size()];
        let read_timeout = self.config.read_timeout();

        loop {
            let read = tokio::select! {
                biased;

                () = cancel.cancelled() => return Err(DownloadError::Cancelled),

                read = tokio::time::timeout(read_timeout, reader.read(&mut buf)) => read,
            };
            let n = read
                .map_err(|_| {
                    DownloadError::network(format!(
                        "stream stalled: no data for {}s",
                        read_timeout.as_secs_f64()
                    ))
                })?
                .map_err(|e| DownloadError::network(format!("stream interrupted: {e}")))?;
            if n == 0 {
                break;
            }

            file.write_all(&buf[..n])
                .await
                .map_err(|e| DownloadError::from_io_error(&e))?;
            counters.record(n as u64);

            if throttle.should_emit() {
                emit_sample(counters, reporter);
            }
        }

        file.flush()
            .await
            .map_err(|e| DownloadError::from_io_error(&e))?;
        drop(file);

        // Final sample so the last reported size is the full size.
        emit_sample(counters, reporter);

        if counters.total_bytes > 0 && counters.bytes_downloaded != counters.total_bytes {
            tracing::warn!(
                expected = counters.total_bytes,
                received = counters.bytes_downloaded,
                "Body length differs from content-length"
            );
        }
        tracing::debug!(bytes = counters.bytes_downloaded, "Transfer finished");

        Ok(())
    }
}

fn emit_sample(counters: &mut TransferCounters, reporter: &mut ProgressReporter) {
    let rate = counters.sample(Instant::now());
    let percent = counters.percent().unwrap_or_else(|| reporter.percent());
    reporter.report(percent, counters.status_message(rate));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;
    use tokio::sync::mpsc;
    use trackdl_core::download::JobEvent;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn payload(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn percent_maps_into_transfer_range() {
        let mut counters = TransferCounters::new();
        counters.total_bytes = 1000;
        assert_eq!(counters.percent(), Some(10));

        counters.record(500);
        assert_eq!(counters.percent(), Some(45));

        counters.record(500);
        assert_eq!(counters.percent(), Some(80));

        counters.record(500);
        assert_eq!(counters.percent(), Some(80));
    }

    #[test]
    fn percent_stays_in_range_for_huge_totals() {
        let mut counters = TransferCounters::new();
        counters.total_bytes = u64::MAX;
        counters.record(u64::MAX - 1);
        assert_eq!(counters.percent(), Some(79));

        counters.record(1);
        assert_eq!(counters.percent(), Some(80));
    }

    #[test]
    fn percent_is_unknown_without_total() {
        let mut counters = TransferCounters::new();
        counters.record(4096);
        assert_eq!(counters.percent(), None);
    }

    #[test]
    fn sample_measures_bytes_since_last_sample() {
        let start = Instant::now();
        let mut counters = TransferCounters::starting_at(start);

        counters.record(1024);
        let rate = counters.sample(start + Duration::from_millis(500));
        assert!((rate - 2048.0).abs() < f64::EPSILON);

        counters.record(512);
        let rate = counters.sample(start + Duration::from_millis(1000));
        assert!((rate - 1024.0).abs() < f64::EPSILON);
        assert_eq!(counters.last_sample_bytes, 1536);
    }

    #[test]
    fn sample_without_elapsed_time_is_zero() {
        let start = Instant::now();
        let mut counters = TransferCounters::starting_at(start);
        counters.record(100);
        assert!(counters.sample(start).abs() < f64::EPSILON);
    }

    #[test]
    fn status_message_formats_sizes_and_rate() {
        let mut counters = TransferCounters::new();
        counters.total_bytes = 3 * 1024 * 1024;
        counters.record(1536);
        assert_eq!(
            counters.status_message(1536.0),
            "Downloading... 1.5KB / 3.0MB (1.5KB/s)"
        );

        counters.total_bytes = 0;
        assert_eq!(counters.status_message(0.0), "Downloading... 1.5KB (0B/s)");
    }

    #[tokio::test]
    async fn download_writes_exact_bytes() {
        let body = payload(100_000);
        let served = body.clone();
        let base = serve(Router::new().route(
            "/a.m4a",
            get(move || {
                let served = served.clone();
                async move { served }
            }),
        ))
        .await;

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("nested").join("a.m4a");
        let client = reqwest::Client::new();
        let config = DownloadConfig::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut reporter = ProgressReporter::new(tx);
        let mut counters = TransferCounters::new();

        TransferEngine::new(&client, &config)
            .download(
                &format!("{base}/a.m4a"),
                &dest,
                &mut counters,
                &mut reporter,
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        let written = std::fs::read(&dest).unwrap();
        assert_eq!(written, body);
        assert_eq!(counters.bytes_downloaded, 100_000);
        assert_eq!(counters.total_bytes, 100_000);

        // The final sample always lands at the top of the transfer range.
        let mut last = None;
        while let Ok(event) = rx.try_recv() {
            last = Some(event);
        }
        match last {
            Some(JobEvent::Progress(p)) => {
                assert_eq!(p.percent, TRANSFERRED);
                assert!(p.message.contains("97.7KB / 97.7KB"), "{}", p.message);
            }
            other => panic!("expected a progress event, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_success_status_is_network_error() {
        let base = serve(Router::new().route("/gone", get(|| async { StatusCode::GONE }))).await;

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("gone.m4a");
        let client = reqwest::Client::new();
        let config = DownloadConfig::default();
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut reporter = ProgressReporter::new(tx);

        let err = TransferEngine::new(&client, &config)
            .download(
                &format!("{base}/gone"),
                &dest,
                &mut TransferCounters::new(),
                &mut reporter,
                &CancellationToken::new(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DownloadError::Network {
                status_code: Some(410),
                ..
            }
        ));
        assert_eq!(
            err.user_message(),
            format!("Error: Download failed (HTTP 410): Gone for {base}/gone")
        );
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn cancelled_before_start_reports_cancellation() {
        let dir = tempfile::tempdir().unwrap();
        let client = reqwest::Client::new();
        let config = DownloadConfig::default();
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut reporter = ProgressReporter::new(tx);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = TransferEngine::new(&client, &config)
            .download(
                "http://127.0.0.1:9/never",
                &dir.path().join("x.m4a"),
                &mut TransferCounters::new(),
                &mut reporter,
                &cancel,
            )
            .await
            .unwrap_err();

        assert_eq!(err, DownloadError::Cancelled);
    }
}
