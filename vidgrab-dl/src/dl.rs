//! yt-dlp Python API wrappers.
//!
//! Typed subset of [yt-dlp](https://github.com/yt-dlp/yt-dlp) `YoutubeDL` parameters and
//! info dict fields. Both cross the Python boundary as JSON.
//!
//! ```no_run
//! use vidgrab_dl::dl::{DownloadOptions, Extractor, YtDlp};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = DownloadOptions {
//!     quiet: Some(true),
//!     noplaylist: Some(true),
//!     ..Default::default()
//! };
//! let info = YtDlp.extract_info("https://youtube.com/watch?v=example", &opts, false)?;
//! println!("{:?}", info.title);
//! # Ok(())
//! # }
//! ```

use pyo3::prelude::*;
use pyo3::types::PyDict;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filename templates using `%(field)s` syntax. Key `default` required.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OutputTemplates(pub HashMap<String, String>);

impl OutputTemplates {
    /// Create with a single default template.
    pub fn simple(default: impl Into<String>) -> Self {
        Self(HashMap::from([("default".to_string(), default.into())]))
    }
}

/// Download directories: `home`, `temp`, optional type-specific paths.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OutputPaths(pub HashMap<String, String>);

impl OutputPaths {
    pub fn with_home(self, home: &Path) -> Self {
        self.with_key("home", home)
    }

    pub fn with_temp(self, temp: &Path) -> Self {
        self.with_key("temp", temp)
    }

    fn with_key(mut self, key: &str, value: &Path) -> Self {
        self.0
            .insert(key.to_string(), value.to_string_lossy().to_string());
        self
    }
}

/// Per-user download folder for videos: `<downloads>/YouTube`.
///
/// Falls back to `~/Downloads/YouTube`, then to `./YouTube` when no home exists.
pub fn default_output_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_default()
        .join("YouTube")
}

/// yt-dlp configuration passed to `YoutubeDL(params)`.
///
/// Unset fields are left out of the params dict so yt-dlp applies its own defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DownloadOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<OutputPaths>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outtmpl: Option<OutputTemplates>,
    /// Container that separate video/audio streams are merged into
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_output_format: Option<String>,
    /// Download only the video when the URL also names a playlist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noplaylist: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiet: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_warnings: Option<bool>,
}

/// Fields read from the sanitized info dict returned by `extract_info`.
///
/// yt-dlp omits or nulls fields a site does not provide, so everything is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InfoDict {
    /// Video identifier
    pub id: Option<String>,
    /// Video title
    pub title: Option<String>,
    /// Full name of the channel the video is uploaded on
    pub channel: Option<String>,
    /// Full name of the video uploader
    pub uploader: Option<String>,
    /// Length of the video in seconds
    pub duration: Option<f64>,
    /// Full URL to a video thumbnail image
    pub thumbnail: Option<String>,
    /// How many users have watched the video
    pub view_count: Option<u64>,
    /// Full video description
    pub description: Option<String>,
    /// Height of the selected (or merged) video stream
    pub height: Option<u32>,
    /// File extension of the selected format
    pub ext: Option<String>,
    /// URL to the video webpage
    pub webpage_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum ExtractorError {
    /// Exception raised inside yt-dlp; holds `str(exception)` unmodified
    #[error("{0}")]
    Raised(String),

    /// Params or info dict could not be converted
    #[error("yt-dlp json conversion failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Source of video info dicts.
///
/// Implemented by [`YtDlp`]; the resolver and executor only see this trait.
pub trait Extractor {
    /// Resolve `url` into an info dict, downloading the selected formats when `download` is set.
    fn extract_info(
        &self,
        url: &str,
        opts: &DownloadOptions,
        download: bool,
    ) -> Result<InfoDict, ExtractorError>;
}

/// The yt-dlp Python library, imported through the embedded interpreter.
///
/// Each call builds a fresh `YoutubeDL` and closes it afterwards.
#[derive(Clone, Copy, Debug, Default)]
pub struct YtDlp;

impl Extractor for YtDlp {
    fn extract_info(
        &self,
        url: &str,
        opts: &DownloadOptions,
        download: bool,
    ) -> Result<InfoDict, ExtractorError> {
        let params = serde_json::to_string(opts)?;

        tracing::debug!(url, download, %params, "calling yt-dlp");

        let info = Python::attach(|py| {
            extract_info_json(py, url, &params, download)
                .map_err(|err| ExtractorError::Raised(err.value(py).to_string()))
        })?;

        Ok(serde_json::from_str(&info)?)
    }
}

/// `YoutubeDL(json.loads(params)).extract_info(url, download=...)`, sanitized and dumped to JSON.
fn extract_info_json(py: Python<'_>, url: &str, params: &str, download: bool) -> PyResult<String> {
    let json = py.import("json")?;
    let params = json.call_method1("loads", (params,))?;

    let ydl = py.import("yt_dlp")?.getattr("YoutubeDL")?.call1((params,))?;

    let kwargs = PyDict::new(py);
    kwargs.set_item("download", download)?;

    let info = ydl.call_method("extract_info", (url,), Some(&kwargs));
    let closed = ydl.call_method0("close");
    let info = info?;
    closed?;

    let info = ydl.call_method1("sanitize_info", (info,))?;
    json.call_method1("dumps", (info,))?.extract()
}
