//! Job events - the ordered stream a running job reports to its caller.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::DownloadError;

/// Unique identifier for one download-and-tag job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(Uuid);

impl JobId {
    /// Generate a fresh random job ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One intermediate progress report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    /// Overall job progress (0-100).
    pub percent: u8,
    /// Human-readable status line.
    pub message: String,
}

impl ProgressEvent {
    /// Create a progress event; `percent` is clamped to 100.
    pub fn new(percent: u8, message: impl Into<String>) -> Self {
        Self {
            percent: percent.min(100),
            message: message.into(),
        }
    }
}

/// Single discriminated union for everything a job reports.
///
/// A job emits zero or more `Progress` events followed by exactly one
/// terminal event (`Completed`, `Failed` or `Cancelled`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JobEvent {
    /// Intermediate progress.
    Progress(ProgressEvent),

    /// The file was downloaded and tagged.
    Completed {
        /// Final path of the tagged file.
        path: PathBuf,
        /// Status line for display (e.g. "Downloaded: Artist - Title.m4a").
        message: String,
    },

    /// The job stopped with an error.
    Failed {
        /// What went wrong.
        error: DownloadError,
    },

    /// The job was cancelled by the caller.
    Cancelled,
}

impl JobEvent {
    /// Build the terminal event for a job outcome.
    pub fn terminal(outcome: &Result<PathBuf, DownloadError>) -> Self {
        match outcome {
            Ok(path) => {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                Self::Completed {
                    path: path.clone(),
                    message: format!("Downloaded: {file_name}"),
                }
            }
            Err(DownloadError::Cancelled) => Self::Cancelled,
            Err(error) => Self::Failed {
                error: error.clone(),
            },
        }
    }

    /// Whether this event ends the job's event stream.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Progress(_))
    }

    /// Convert a terminal event back into the job outcome.
    ///
    /// Returns `None` for progress events.
    #[must_use]
    pub fn into_outcome(self) -> Option<Result<PathBuf, DownloadError>> {
        match self {
            Self::Progress(_) => None,
            Self::Completed { path, .. } => Some(Ok(path)),
            Self::Failed { error } => Some(Err(error)),
            Self::Cancelled => Some(Err(DownloadError::Cancelled)),
        }
    }
}
