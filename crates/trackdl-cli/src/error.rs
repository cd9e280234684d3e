//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and maps
//! lookup and pipeline errors to exit codes and user-facing messages.

use thiserror::Error;
use trackdl_core::{DownloadError, TrackInfoError};

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The lookup service could not resolve the track.
    #[error("Failed to fetch track info: {0}")]
    Lookup(String),

    /// The download-and-tag job failed or was cancelled.
    #[error("{}", .0.user_message())]
    Download(DownloadError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    /// - 130: Terminated by Ctrl-C
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Download(DownloadError::Cancelled) => 130,
            Self::Download(DownloadError::Io { .. }) => 74, // EX_IOERR
            Self::Config(_) => 78,                         // EX_CONFIG
            Self::Lookup(_) | Self::Download(_) => 1,
        }
    }

    /// Follow-up advice for failures that may succeed on a second attempt.
    pub const fn retry_hint(&self) -> Option<&'static str> {
        match self {
            Self::Download(err) if err.is_recoverable() => {
                Some("The download may succeed if you run the same command again.")
            }
            _ => None,
        }
    }
}

impl From<TrackInfoError> for CliError {
    fn from(err: TrackInfoError) -> Self {
        Self::Lookup(err.to_string())
    }
}

impl From<DownloadError> for CliError {
    fn from(err: DownloadError) -> Self {
        Self::Download(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Arguments("bad".into()).exit_code(), 2);
        assert_eq!(CliError::Lookup("down".into()).exit_code(), 1);
        assert_eq!(CliError::Config("x".into()).exit_code(), 78);
        assert_eq!(CliError::Download(DownloadError::Cancelled).exit_code(), 130);
        assert_eq!(
            CliError::Download(DownloadError::io("PermissionDenied", "read-only")).exit_code(),
            74
        );
        assert_eq!(
            CliError::Download(DownloadError::metadata("no moov")).exit_code(),
            1
        );
    }

    #[test]
    fn test_retry_hint_only_for_recoverable_failures() {
        assert!(
            CliError::Download(DownloadError::network("stream stalled"))
                .retry_hint()
                .is_some()
        );
        assert!(
            CliError::Download(DownloadError::io("Other", "disk full"))
                .retry_hint()
                .is_some()
        );
        assert!(CliError::Download(DownloadError::Cancelled).retry_hint().is_none());
        assert!(CliError::Download(DownloadError::MissingSource).retry_hint().is_none());
        assert!(CliError::Lookup("down".into()).retry_hint().is_none());
    }

    #[test]
    fn test_download_error_uses_user_message() {
        let err = CliError::from(DownloadError::MissingSource);
        assert_eq!(err.to_string(), "Error: No download link available");
    }

    #[test]
    fn test_lookup_error_conversion() {
        let err = CliError::from(TrackInfoError::InvalidResponse {
            message: "not json".to_string(),
        });
        assert!(matches!(err, CliError::Lookup(_)));
        assert!(err.to_string().contains("not json"));
    }
}
