//! Metadata lookup: inspect a URL without downloading anything.

use crate::dl::{DownloadOptions, Extractor, InfoDict, YtDlp};
use crate::error::{Error, Result};
use crate::format::description_excerpt;

const UNKNOWN: &str = "Unknown";

/// Descriptive fields shown before a download.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoMetadata {
    pub title: String,
    pub channel: String,
    /// Whole seconds, `0` when unknown
    pub duration_secs: u64,
    /// Thumbnail URL, empty when the site provides none
    pub thumbnail: String,
    pub view_count: u64,
    /// Description excerpt, see [`description_excerpt`]
    pub description: String,
}

impl From<InfoDict> for VideoMetadata {
    fn from(info: InfoDict) -> Self {
        Self {
            title: info.title.unwrap_or_else(|| UNKNOWN.to_string()),
            channel: info.channel.unwrap_or_else(|| UNKNOWN.to_string()),
            duration_secs: info.duration.map_or(0, |secs| secs as u64),
            thumbnail: info.thumbnail.unwrap_or_default(),
            view_count: info.view_count.unwrap_or(0),
            description: description_excerpt(info.description.as_deref().unwrap_or_default()),
        }
    }
}

/// Inspect-only preset: single video, extractor output suppressed.
pub fn inspect_options() -> DownloadOptions {
    DownloadOptions {
        noplaylist: Some(true),
        quiet: Some(true),
        no_warnings: Some(true),
        ..Default::default()
    }
}

/// Look up `url` without downloading.
///
/// The URL is not validated locally; any extractor failure becomes
/// [`Error::Resolution`] with the extractor's message.
pub fn resolve(extractor: &impl Extractor, url: &str) -> Result<VideoMetadata> {
    tracing::info!(url, "fetching video info");

    let info = extractor
        .extract_info(url, &inspect_options(), false)
        .map_err(|e| Error::Resolution(e.to_string()))?;

    tracing::debug!(id = ?info.id, title = ?info.title, "video info resolved");

    Ok(info.into())
}

/// [`resolve`] using yt-dlp.
pub fn resolve_url(url: &str) -> Result<VideoMetadata> {
    resolve(&YtDlp, url)
}
