//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no lookups, no pipeline control.

pub mod progress;
pub mod track_display;

pub use progress::JobProgress;
pub use track_display::track_summary;
