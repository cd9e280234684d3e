//! Download domain types.
//!
//! Pure data types describing a download-and-tag job: its identifier, the
//! events it emits while running, and the errors that can end it.

mod errors;
mod events;

pub use errors::{DownloadError, DownloadResult};
pub use events::{JobEvent, JobId, ProgressEvent};
