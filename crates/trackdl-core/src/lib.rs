#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod download;
pub mod ports;
pub mod track;
pub mod utils;

// Re-export commonly used types for convenience
pub use download::{DownloadError, DownloadResult, JobEvent, JobId, ProgressEvent};
pub use ports::{TrackInfoError, TrackInfoPort, TrackInfoResult};
pub use track::TrackDescriptor;
pub use utils::filename::{UNKNOWN_FIELD, safe_filename};
pub use utils::size::{format_rate, format_size};
