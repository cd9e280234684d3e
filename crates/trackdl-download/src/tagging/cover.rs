//! Cover-art fetching and format detection.

use mp4ameta::{Img, ImgFmt};

/// Image format of an embedded cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverFormat {
    /// JPEG (`FF D8` signature).
    Jpeg,
    /// PNG; used for everything that is not recognisably JPEG.
    Png,
}

impl CoverFormat {
    /// Detect the format from the leading bytes of the image.
    pub fn detect(data: &[u8]) -> Self {
        if data.starts_with(&[0xFF, 0xD8]) {
            Self::Jpeg
        } else {
            Self::Png
        }
    }

    /// Wrap image bytes as an MP4 `covr` value with this format.
    pub(crate) fn to_image(self, data: Vec<u8>) -> Img<Vec<u8>> {
        let fmt = match self {
            Self::Jpeg => ImgFmt::Jpeg,
            Self::Png => ImgFmt::Png,
        };
        Img::new(fmt, data)
    }
}

/// Fetch the cover image body.
///
/// Any transport failure or non-success status is an error; the caller
/// decides whether that matters.
pub(super) async fn fetch_cover(
    client: &reqwest::Client,
    url: &str,
    timeout: std::time::Duration,
) -> Result<Vec<u8>, reqwest::Error> {
    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await?
        .error_for_status()?;
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}
