//! Download job - the exclusive context of one pipeline run.

use std::path::Path;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use trackdl_core::download::{JobEvent, JobId};
use trackdl_core::track::TrackDescriptor;

use super::paths::DownloadDestination;
use crate::progress::ProgressReporter;
use crate::transfer::TransferCounters;

/// A download job to be executed by the pipeline.
///
/// This is a value type holding everything one run needs. It is moved into
/// the task that executes it and dropped when the job reaches a terminal
/// state; it is never reused.
pub struct DownloadJob {
    /// Job ID, for logging.
    pub id: JobId,
    /// The track to download.
    pub track: TrackDescriptor,
    /// Planned output location.
    pub destination: DownloadDestination,
    /// Cancellation token for this job.
    pub cancel: CancellationToken,
    /// Transfer counters, updated while the payload streams in.
    pub counters: TransferCounters,
    pub(crate) reporter: ProgressReporter,
}

impl DownloadJob {
    /// Create a job that reports its events on `events`.
    pub fn new(
        track: TrackDescriptor,
        output_dir: &Path,
        events: mpsc::UnboundedSender<JobEvent>,
        cancel: CancellationToken,
    ) -> Self {
        let destination = DownloadDestination::plan(output_dir, &track);
        Self {
            id: JobId::new(),
            track,
            destination,
            cancel,
            counters: TransferCounters::new(),
            reporter: ProgressReporter::new(events),
        }
    }
}
