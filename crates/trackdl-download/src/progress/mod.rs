//! Progress tracking and throttling.
//!
//! This module handles rate-limiting of transfer samples and the ordered,
//! monotonic delivery of job events to the caller.

mod reporter;
mod throttle;

pub(crate) use reporter::ProgressReporter;
pub use throttle::ProgressThrottle;

/// Percentage reported once the job is prepared and the transfer begins.
pub(crate) const PREPARED: u8 = 10;
/// Upper bound of the transfer range; reported when the payload is on disk.
pub(crate) const TRANSFERRED: u8 = 80;
/// Reported after the text fields are set, before cover-art handling.
pub(crate) const METADATA: u8 = 90;
/// Reported once the container is saved.
pub(crate) const DONE: u8 = 100;
