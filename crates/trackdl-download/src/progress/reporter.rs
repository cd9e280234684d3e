//! Ordered delivery of job events.

use std::path::PathBuf;

use tokio::sync::mpsc;
use trackdl_core::download::{DownloadError, JobEvent, ProgressEvent};

/// Sends a job's events to its caller.
///
/// Percentages never go backwards: a report below the last one is raised to
/// it. The terminal event is sent by [`finish`](Self::finish), which consumes
/// the reporter so no event can follow it.
#[derive(Debug)]
pub(crate) struct ProgressReporter {
    tx: mpsc::UnboundedSender<JobEvent>,
    last_percent: u8,
}

impl ProgressReporter {
    pub(crate) const fn new(tx: mpsc::UnboundedSender<JobEvent>) -> Self {
        Self {
            tx,
            last_percent: 0,
        }
    }

    /// Last percentage sent.
    pub(crate) const fn percent(&self) -> u8 {
        self.last_percent
    }

    /// Send a progress event.
    pub(crate) fn report(&mut self, percent: u8, message: impl Into<String>) {
        let percent = percent.min(100).max(self.last_percent);
        self.last_percent = percent;
        self.send(JobEvent::Progress(ProgressEvent::new(percent, message)));
    }

    /// Send the terminal event for `outcome`.
    pub(crate) fn finish(self, outcome: &Result<PathBuf, DownloadError>) {
        self.send(JobEvent::terminal(outcome));
    }

    fn send(&self, event: JobEvent) {
        if self.tx.send(event).is_err() {
            tracing::trace!("job event receiver dropped");
        }
    }
}
