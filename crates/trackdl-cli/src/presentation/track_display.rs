//! Track metadata display.

use trackdl_core::TrackDescriptor;

/// Format an optional value for display, returning a default if None.
fn format_optional(value: Option<&str>, default: &str) -> String {
    value.unwrap_or(default).to_string()
}

/// Human-readable summary of a descriptor, one field per line.
pub fn track_summary(track: &TrackDescriptor) -> String {
    let rows = [
        ("Title", track.name()),
        ("Artist", track.artist()),
        ("Duration", track.duration()),
        ("Date", track.date()),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("{label:<9} {}\n", format_optional(value, "-")));
    }
    if track.audio_url().is_none() {
        out.push_str("(no download link available)\n");
    }
    out
}
