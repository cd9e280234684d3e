//! Small helpers shared by command handlers.

pub mod url;

pub use url::validate_track_url;
