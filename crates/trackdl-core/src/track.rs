//! Track descriptor - the metadata record for one remotely hosted audio item.

use serde::{Deserialize, Serialize};

/// Metadata describing a single track, as returned by the lookup service.
///
/// Every field is optional because the lookup service omits keys it has no
/// value for. Empty strings are treated the same as missing values by the
/// accessor methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackDescriptor {
    /// Track title.
    pub name: Option<String>,
    /// Artist display name.
    pub artist: Option<String>,
    /// Release/upload date (opaque format, passed through as-is).
    pub date: Option<String>,
    /// Display duration (e.g. "3:41"); not interpreted.
    pub duration: Option<String>,
    /// Cover-art image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Direct URL of the encoded audio payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

impl TrackDescriptor {
    /// Create a descriptor with a title and artist.
    pub fn new(name: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            artist: Some(artist.into()),
            ..Self::default()
        }
    }

    /// Set the release date.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the display duration.
    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Set the cover-art URL.
    #[must_use]
    pub fn with_thumbnail_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    /// Set the audio payload URL.
    #[must_use]
    pub fn with_audio_url(mut self, url: impl Into<String>) -> Self {
        self.audio_url = Some(url.into());
        self
    }

    /// Title, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }

    /// Artist, if present and non-empty.
    pub fn artist(&self) -> Option<&str> {
        non_empty(self.artist.as_deref())
    }

    /// Release date, if present and non-empty.
    pub fn date(&self) -> Option<&str> {
        non_empty(self.date.as_deref())
    }

    /// Duration, if present and non-empty.
    pub fn duration(&self) -> Option<&str> {
        non_empty(self.duration.as_deref())
    }

    /// Cover-art URL, if present and non-empty.
    pub fn thumbnail_url(&self) -> Option<&str> {
        non_empty(self.thumbnail_url.as_deref())
    }

    /// Audio payload URL, if present and non-empty.
    pub fn audio_url(&self) -> Option<&str> {
        non_empty(self.audio_url.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let track = TrackDescriptor::new("Test", "Artist")
            .with_date("2024")
            .with_duration("3:00")
            .with_thumbnail_url("http://x/cover.jpg")
            .with_audio_url("http://x/a.m4a");

        assert_eq!(track.name(), Some("Test"));
        assert_eq!(track.artist(), Some("Artist"));
        assert_eq!(track.date(), Some("2024"));
        assert_eq!(track.duration(), Some("3:00"));
        assert_eq!(track.thumbnail_url(), Some("http://x/cover.jpg"));
        assert_eq!(track.audio_url(), Some("http://x/a.m4a"));
    }

    #[test]
    fn empty_strings_read_as_absent() {
        let track = TrackDescriptor {
            artist: Some(String::new()),
            audio_url: Some("   ".to_string()),
            ..TrackDescriptor::default()
        };

        assert_eq!(track.artist(), None);
        assert_eq!(track.audio_url(), None);
        assert_eq!(track.name(), None);
    }

    #[test]
    fn deserializes_with_missing_keys() {
        let track: TrackDescriptor = serde_json::from_str(r#"{"name":"Only"}"#).unwrap();
        assert_eq!(track.name(), Some("Only"));
        assert!(track.artist.is_none());
        assert!(track.audio_url.is_none());
    }
}
