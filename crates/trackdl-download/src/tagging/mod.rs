//! Tagging engine: in-place MP4 metadata editing.
//!
//! The container is read once, edited in memory, and written back with a
//! single save. Audio data is never re-encoded.

mod cover;

use std::path::{Path, PathBuf};

use mp4ameta::Tag;
use tokio_util::sync::CancellationToken;
use trackdl_core::download::{DownloadError, DownloadResult};
use trackdl_core::track::TrackDescriptor;

use crate::config::DownloadConfig;
use crate::progress::{METADATA, ProgressReporter};

pub use cover::CoverFormat;

/// Writes descriptive metadata into a downloaded container.
pub(crate) struct TaggingEngine<'a> {
    client: &'a reqwest::Client,
    config: &'a DownloadConfig,
}

impl<'a> TaggingEngine<'a> {
    pub(crate) const fn new(client: &'a reqwest::Client, config: &'a DownloadConfig) -> Self {
        Self { client, config }
    }

    /// Tag the file at `path` with the descriptor's artist, date and cover.
    ///
    /// Failing to open or save the container is fatal. Failing to fetch the
    /// cover is not: the cover is skipped and the other fields are still
    /// saved.
    pub(crate) async fn tag(
        &self,
        path: &Path,
        track: &TrackDescriptor,
        reporter: &mut ProgressReporter,
        cancel: &CancellationToken,
    ) -> DownloadResult<()> {
        let mut tag = read_tag(path).await?;
        apply_text_fields(&mut tag, track);

        reporter.report(METADATA, "Adding metadata...");

        if let Some(url) = track.thumbnail_url() {
            let fetched = tokio::select! {
                biased;

                () = cancel.cancelled() => return Err(DownloadError::Cancelled),

                fetched = cover::fetch_cover(self.client, url, self.config.cover_timeout) => fetched,
            };

            match fetched {
                Ok(data) if data.is_empty() => {
                    tracing::debug!(url, "Cover image is empty, skipping");
                }
                Ok(data) => {
                    let format = CoverFormat::detect(&data);
                    tracing::debug!(url, bytes = data.len(), ?format, "Embedding cover");
                    tag.set_artwork(format.to_image(data));
                }
                Err(e) => {
                    tracing::warn!(url, error = %e, "Cover fetch failed, continuing without cover");
                }
            }
        }

        write_tag(tag, path.to_path_buf()).await
    }
}

/// Set artist and date when present; absent fields are left as they are.
fn apply_text_fields(tag: &mut Tag, track: &TrackDescriptor) {
    if let Some(artist) = track.artist() {
        tag.set_artist(artist);
    }
    if let Some(date) = track.date() {
        tag.set_year(date);
    }
}

async fn read_tag(path: &Path) -> DownloadResult<Tag> {
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || Tag::read_from_path(&path))
        .await
        .map_err(|e| DownloadError::other(format!("tag reader task failed: {e}")))?
        .map_err(|e| DownloadError::metadata(e.to_string()))
}

async fn write_tag(tag: Tag, path: PathBuf) -> DownloadResult<()> {
    tokio::task::spawn_blocking(move || {
        let mut tag = tag;
        Tag::write_to_path(&mut tag, &path)
    })
    .await
    .map_err(|e| DownloadError::other(format!("tag writer task failed: {e}")))?
    .map_err(|e| DownloadError::metadata(e.to_string()))
}
