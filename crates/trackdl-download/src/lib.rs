#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Re-export core types for convenience
pub use trackdl_core::download::{DownloadError, DownloadResult, JobEvent, JobId, ProgressEvent};
pub use trackdl_core::track::TrackDescriptor;

mod config;
pub(crate) mod progress;
mod tagging;
mod transfer;

// Public API - job pipeline
mod pipeline;

pub use config::DownloadConfig;
pub use pipeline::{DownloadDestination, DownloadJob, DownloadPipeline, JobHandle};
pub use progress::ProgressThrottle;
pub use tagging::CoverFormat;
pub use transfer::TransferCounters;

// Silence unused dev-dependency warnings for crates only the integration tests use
#[cfg(test)]
use bytes as _;
