//! Output filename derivation.

/// Placeholder used when the artist or title is missing.
pub const UNKNOWN_FIELD: &str = "Unknown";

/// Extension of the files produced by the pipeline.
const EXTENSION: &str = "m4a";

/// Derive the output filename for a track.
///
/// Produces `"<artist> - <name>.m4a"`, keeping only ASCII alphanumerics,
/// spaces, `-`, `_` and `.`, with trailing whitespace trimmed. A missing or
/// empty artist/name becomes `"Unknown"`.
///
/// # Example
///
/// ```
/// use trackdl_core::safe_filename;
///
/// assert_eq!(safe_filename(Some("A/B?"), Some("Song: 1")), "AB - Song 1.m4a");
/// assert_eq!(safe_filename(None, None), "Unknown - Unknown.m4a");
/// ```
pub fn safe_filename(artist: Option<&str>, name: Option<&str>) -> String {
    let artist = artist.filter(|a| !a.is_empty()).unwrap_or(UNKNOWN_FIELD);
    let name = name.filter(|n| !n.is_empty()).unwrap_or(UNKNOWN_FIELD);

    let raw = format!("{artist} - {name}.{EXTENSION}");
    let cleaned: String = raw.chars().filter(|&c| is_allowed(c)).collect();
    cleaned.trim_end().to_string()
}

const fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_disallowed_characters() {
        assert_eq!(safe_filename(Some("A/B?"), Some("Song: 1")), "AB - Song 1.m4a");
        assert_eq!(
            safe_filename(Some("DJ <Cool>"), Some("Mix | Vol.2 *live*")),
            "DJ Cool - Mix  Vol.2 live.m4a"
        );
    }

    #[test]
    fn missing_fields_fall_back_to_unknown() {
        assert_eq!(safe_filename(None, Some("Test")), "Unknown - Test.m4a");
        assert_eq!(safe_filename(Some("Artist"), None), "Artist - Unknown.m4a");
        assert_eq!(safe_filename(Some(""), Some("")), "Unknown - Unknown.m4a");
    }

    #[test]
    fn non_ascii_is_removed() {
        assert_eq!(safe_filename(Some("Björk"), Some("Jóga")), "Bjrk - Jga.m4a");
    }

    #[test]
    fn output_only_contains_allowed_characters() {
        let inputs = [
            ("a\tb\n", "c\\d/e"),
            ("  spaced  ", "trailing   "),
            ("emoji 🎵", "quote \"x\" 'y'"),
            ("under_score", "dash-dot.name"),
        ];
        for (artist, name) in inputs {
            let out = safe_filename(Some(artist), Some(name));
            assert!(out.chars().all(is_allowed), "unexpected char in {out:?}");
            assert_eq!(out, out.trim_end());
            assert!(out.ends_with(".m4a"));
        }
    }

    #[test]
    fn is_deterministic() {
        let a = safe_filename(Some("Artist"), Some("Test"));
        let b = safe_filename(Some("Artist"), Some("Test"));
        assert_eq!(a, b);
        assert_eq!(a, "Artist - Test.m4a");
    }
}
