//! Download-and-tag pipeline.
//!
//! # Architecture
//!
//! - **Pipeline**: owns the HTTP client and configuration; spawns jobs
//! - **Job**: value type moved into the task; owns its counters, reporter and
//!   cancellation token
//! - **Handle**: the caller's side, with the ordered event stream, the
//!   cancellation switch and the terminal outcome
//!
//! # Stages
//!
//! | Percent | Stage                                            |
//! |---------|--------------------------------------------------|
//! | 10      | prepared, output directory exists                |
//! | 10-80   | audio transfer                                   |
//! | 80      | transfer done, tagging begins                    |
//! | 90      | text fields set, cover art next                  |
//! | 100     | container saved                                  |

mod handle;
mod job;
mod paths;

use std::path::{Path, PathBuf};

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use trackdl_core::download::{DownloadError, DownloadResult, JobEvent};
use trackdl_core::track::TrackDescriptor;

use crate::config::DownloadConfig;
use crate::progress::{DONE, PREPARED, ProgressReporter, TRANSFERRED};
use crate::tagging::TaggingEngine;
use crate::transfer::{TransferCounters, TransferEngine};

pub use handle::JobHandle;
pub use job::DownloadJob;
pub use paths::DownloadDestination;

/// Runs download-and-tag jobs.
///
/// Cheap to clone: the HTTP client is reference-counted internally.
#[derive(Clone)]
pub struct DownloadPipeline {
    client: reqwest::Client,
    config: DownloadConfig,
}

impl DownloadPipeline {
    /// Create a pipeline with its own HTTP client.
    pub fn new(config: DownloadConfig) -> DownloadResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| DownloadError::other(format!("failed to create HTTP client: {e}")))?;
        Ok(Self::with_client(client, config))
    }

    /// Create a pipeline around an existing HTTP client.
    pub const fn with_client(client: reqwest::Client, config: DownloadConfig) -> Self {
        Self { client, config }
    }

    /// The pipeline configuration.
    pub const fn config(&self) -> &DownloadConfig {
        &self.config
    }

    /// Start a job on a background task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(&self, track: TrackDescriptor, output_dir: impl AsRef<Path>) -> JobHandle {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let job = DownloadJob::new(track, output_dir.as_ref(), tx, cancel.clone());
        let id = job.id;

        let pipeline = self.clone();
        let task = tokio::spawn(async move { pipeline.run(job).await });

        JobHandle::new(id, rx, cancel, task)
    }

    /// Run a job to completion on the current task.
    ///
    /// Emits the job's progress events followed by exactly one terminal
    /// event, and returns the same outcome.
    pub async fn run(&self, job: DownloadJob) -> DownloadResult<PathBuf> {
        let span = tracing::info_span!("download_job", job_id = %job.id);
        self.run_inner(job).instrument(span).await
    }

    async fn run_inner(&self, job: DownloadJob) -> DownloadResult<PathBuf> {
        let DownloadJob {
            id: _,
            track,
            destination,
            cancel,
            mut counters,
            mut reporter,
        } = job;

        tracing::info!(file = %destination.file_name, "Download job started");

        let outcome = self
            .execute(&track, &destination, &cancel, &mut counters, &mut reporter)
            .await;

        match &outcome {
            Ok(path) => {
                tracing::info!(
                    path = %path.display(),
                    bytes = counters.bytes_downloaded,
                    "Download job completed"
                );
            }
            Err(DownloadError::Cancelled) => {
                tracing::info!(bytes = counters.bytes_downloaded, "Download job cancelled");
            }
            Err(e) => tracing::error!(error = %e, "Download job failed"),
        }

        reporter.finish(&outcome);
        outcome
    }

    /// Execute the pipeline stages for one job.
    async fn execute(
        &self,
        track: &TrackDescriptor,
        destination: &DownloadDestination,
        cancel: &CancellationToken,
        counters: &mut TransferCounters,
        reporter: &mut ProgressReporter,
    ) -> DownloadResult<PathBuf> {
        let audio_url = track.audio_url().ok_or(DownloadError::MissingSource)?;

        destination.ensure_dir().await?;
        reporter.report(PREPARED, "Preparing download...");

        let path = destination.file_path();
        TransferEngine::new(&self.client, &self.config)
            .download(audio_url, &path, counters, reporter, cancel)
            .await?;

        reporter.report(TRANSFERRED, "Adding metadata...");
        if cancel.is_cancelled() {
            return Err(DownloadError::Cancelled);
        }

        TaggingEngine::new(&self.client, &self.config)
            .tag(&path, track, reporter, cancel)
            .await?;

        reporter.report(DONE, "Download completed!");
        Ok(path)
    }

    /// Convenience wrapper: run a job and forward its events to `events`.
    pub async fn download(
        &self,
        track: TrackDescriptor,
        output_dir: &Path,
        events: mpsc::UnboundedSender<JobEvent>,
        cancel: CancellationToken,
    ) -> DownloadResult<PathBuf> {
        self.run(DownloadJob::new(track, output_dir, events, cancel))
            .await
    }
}
