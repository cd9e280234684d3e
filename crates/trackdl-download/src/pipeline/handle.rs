//! Caller-side handle to a spawned job.

use std::path::PathBuf;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use trackdl_core::download::{DownloadError, DownloadResult, JobEvent, JobId};

/// Handle to a job running on a background task.
///
/// Events arrive in order: progress events with non-decreasing percentages,
/// then exactly one terminal event. Dropping the handle does not stop the
/// job; call [`cancel`](Self::cancel) for that.
pub struct JobHandle {
    id: JobId,
    events: mpsc::UnboundedReceiver<JobEvent>,
    cancel: CancellationToken,
    task: JoinHandle<DownloadResult<PathBuf>>,
}

impl JobHandle {
    pub(crate) const fn new(
        id: JobId,
        events: mpsc::UnboundedReceiver<JobEvent>,
        cancel: CancellationToken,
        task: JoinHandle<DownloadResult<PathBuf>>,
    ) -> Self {
        Self {
            id,
            events,
            cancel,
            task,
        }
    }

    /// ID of the running job.
    pub const fn id(&self) -> JobId {
        self.id
    }

    /// Request cooperative cancellation.
    ///
    /// The job stops at its next cancellation point and ends with
    /// [`JobEvent::Cancelled`].
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Receive the next event, or `None` once the terminal event was consumed
    /// and the job has exited.
    pub async fn next_event(&mut self) -> Option<JobEvent> {
        self.events.recv().await
    }

    /// Wait for the job to finish, discarding remaining progress events.
    pub async fn wait(mut self) -> DownloadResult<PathBuf> {
        while let Some(event) = self.events.recv().await {
            if let Some(outcome) = event.into_outcome() {
                return outcome;
            }
        }

        // The channel closed without a terminal event, so the task died early.
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => Err(DownloadError::Cancelled),
            Err(e) => Err(DownloadError::other(format!("download task failed: {e}"))),
        }
    }
}
