//! Command handlers.
//!
//! Each handler takes the composed `CliContext` and the command's arguments.

pub mod download;
pub mod info;

use trackdl_core::{TrackDescriptor, TrackInfoPort};

use crate::error::CliError;
use crate::utils::validate_track_url;

/// Validate `url` and resolve it through the lookup port.
///
/// Invalid input is rejected before any network call.
pub async fn resolve_track(
    lookup: &dyn TrackInfoPort,
    url: &str,
    cookies: &str,
) -> Result<TrackDescriptor, CliError> {
    let url = validate_track_url(url)?;
    let track = lookup.fetch_track_info(url, cookies).await?;
    Ok(track)
}
