//! Track URL validation.

use crate::error::CliError;

/// Marker every accepted track URL must contain.
const TRACK_HOST_MARKER: &str = "soundcloud.com/";

/// Check a user-entered track URL before any network call.
///
/// Accepts any non-blank input containing `soundcloud.com/`; the lookup
/// service does the real validation. Returns the trimmed URL.
///
/// # Examples
///
/// ```rust
/// use trackdl_cli::utils::validate_track_url;
///
/// assert!(validate_track_url(" https://soundcloud.com/artist/track ").is_ok());
/// assert!(validate_track_url("https://example.com/track").is_err());
/// ```
pub fn validate_track_url(input: &str) -> Result<&str, CliError> {
    let url = input.trim();
    if url.is_empty() {
        return Err(CliError::Arguments("a track URL is required".to_string()));
    }
    if !url.contains(TRACK_HOST_MARKER) {
        return Err(CliError::Arguments(format!(
            "'{url}' does not look like a SoundCloud track URL"
        )));
    }
    Ok(url)
}
