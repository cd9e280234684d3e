//! Download error types.
//!
//! These errors are designed to be serializable and not depend on external
//! error types like `std::io::Error` or `reqwest::Error`. Underlying causes
//! are captured as strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for download-and-tag jobs.
///
/// Designed to cross task and process boundaries (event channels, JSON
/// output) without depending on non-serializable types.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DownloadError {
    /// The track descriptor has no usable audio URL.
    #[error("No download link available")]
    MissingSource,

    /// Network/HTTP error during the audio transfer.
    #[error("Download failed: {message}")]
    Network {
        /// Detailed error message.
        message: String,
        /// HTTP status code if available.
        #[serde(skip_serializing_if = "Option::is_none")]
        status_code: Option<u16>,
    },

    /// I/O error while writing the output file.
    #[error("I/O error ({io_kind}): {message}")]
    Io {
        /// The kind of I/O error (e.g., "`NotFound`", "`PermissionDenied`").
        io_kind: String,
        /// Detailed error message.
        message: String,
    },

    /// The audio container could not be opened, edited, or saved.
    #[error("Failed to add metadata: {message}")]
    Metadata {
        /// Detailed error message.
        message: String,
    },

    /// The job was cancelled by the caller.
    #[error("Download cancelled")]
    Cancelled,

    /// General/uncategorized error.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl DownloadError {
    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            status_code: None,
        }
    }

    /// Create a network error with HTTP status code.
    pub fn network_with_status(message: impl Into<String>, status_code: u16) -> Self {
        Self::Network {
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create an I/O error from kind and message strings.
    pub fn io(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            io_kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error from a `std::io::Error`.
    ///
    /// This captures the error kind name and message for serialization.
    #[must_use]
    pub fn from_io_error(err: &std::io::Error) -> Self {
        let kind = err.kind();
        Self::Io {
            io_kind: format!("{kind:?}"),
            message: err.to_string(),
        }
    }

    /// Create a metadata error.
    pub fn metadata(message: impl Into<String>) -> Self {
        Self::Metadata {
            message: message.into(),
        }
    }

    /// Create a generic error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Check if re-running the whole job might succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Io { .. })
    }

    /// Check if this is a cancellation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Convert to a user-friendly status line.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingSource => "Error: No download link available".to_string(),
            Self::Network {
                message,
                status_code: Some(code),
            } => format!("Error: Download failed (HTTP {code}): {message}"),
            Self::Network { message, .. } => format!("Error: Download failed: {message}"),
            Self::Io { message, .. } => format!("Error: File operation failed: {message}"),
            Self::Metadata { message } => format!("Error: Failed to add metadata: {message}"),
            Self::Cancelled => "Download cancelled.".to_string(),
            Self::Other { message } => format!("Error: {message}"),
        }
    }
}

/// Convenience result type for download operations.
pub type DownloadResult<T> = Result<T, DownloadError>;
