//! Destination path planning for downloads.

use std::path::{Path, PathBuf};

use trackdl_core::download::{DownloadError, DownloadResult};
use trackdl_core::track::TrackDescriptor;
use trackdl_core::utils::filename::safe_filename;

/// A planned download destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadDestination {
    /// Directory the file is written into.
    pub output_dir: PathBuf,
    /// Sanitized file name (`"<artist> - <name>.m4a"`).
    pub file_name: String,
}

impl DownloadDestination {
    /// Plan the destination for a track inside `output_dir`.
    pub fn plan(output_dir: &Path, track: &TrackDescriptor) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            file_name: safe_filename(track.artist(), track.name()),
        }
    }

    /// Ensure the output directory exists, creating it if necessary.
    pub async fn ensure_dir(&self) -> DownloadResult<()> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| DownloadError::from_io_error(&e))
    }

    /// Full path of the output file.
    pub fn file_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_joins_sanitized_name() {
        let track = TrackDescriptor::new("Test", "Artist");
        let dest = DownloadDestination::plan(Path::new("/tmp/out"), &track);

        assert_eq!(dest.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(dest.file_name, "Artist - Test.m4a");
        assert_eq!(dest.file_path(), PathBuf::from("/tmp/out/Artist - Test.m4a"));
    }

    #[test]
    fn plan_strips_path_separators_from_name() {
        let track = TrackDescriptor::new("../../etc/passwd", "A/B?");
        let dest = DownloadDestination::plan(Path::new("/music"), &track);

        assert_eq!(dest.file_name, "AB - ....etcpasswd.m4a");
        assert_eq!(dest.file_path().parent(), Some(Path::new("/music")));
    }

    #[tokio::test]
    async fn ensure_dir_creates_nested_directories() {
        let base = tempfile::tempdir().unwrap();
        let out = base.path().join("a").join("b");
        let dest = DownloadDestination::plan(&out, &TrackDescriptor::default());

        dest.ensure_dir().await.unwrap();
        assert!(out.is_dir());

        // Idempotent
        dest.ensure_dir().await.unwrap();
    }
}
