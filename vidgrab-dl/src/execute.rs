//! Download a single video at a capped resolution, merged into one MP4.

use crate::dl::{DownloadOptions, Extractor, OutputPaths, YtDlp};
use crate::error::{Error, Result};
use crate::quality::{MERGE_FORMAT, QualityTier};
use std::path::{Path, PathBuf};

/// One user-triggered download.
#[derive(Clone, Debug, PartialEq)]
pub struct DownloadRequest {
    pub url: String,
    pub quality: QualityTier,
    /// Created with parents if missing
    pub output_dir: PathBuf,
}

/// Successful download.
#[derive(Clone, Debug, PartialEq)]
pub struct Downloaded {
    pub title: String,
    /// `<output_dir>/<title>_<height>p.mp4`
    ///
    /// Rebuilt from the info dict rather than read back from yt-dlp, so it can differ
    /// from the file on disk when yt-dlp sanitizes characters in the title.
    pub filename: PathBuf,
}

pub type DownloadOutcome = Result<Downloaded>;

impl DownloadRequest {
    /// yt-dlp options for this request: the tier preset rooted at `output_dir`.
    pub fn options(&self) -> DownloadOptions {
        let mut opts: DownloadOptions = self.quality.into();
        opts.paths = Some(OutputPaths::default().with_home(&self.output_dir));
        opts
    }
}

/// Expected output path for a title and resolved height.
pub fn output_filename(output_dir: &Path, title: &str, height: u32) -> PathBuf {
    output_dir.join(format!("{title}_{height}p.{MERGE_FORMAT}"))
}

/// Download `request.url` into `request.output_dir`.
///
/// Every failure, including creating the directory, becomes [`Error::Download`]
/// with the underlying message. Partial files left by yt-dlp are not removed.
pub fn execute(extractor: &impl Extractor, request: &DownloadRequest) -> DownloadOutcome {
    tracing::info!(
        url = request.url,
        quality = %request.quality,
        dir = ?request.output_dir.display(),
        "downloading video"
    );

    std::fs::create_dir_all(&request.output_dir).map_err(|e| Error::Download(e.to_string()))?;

    let info = extractor
        .extract_info(&request.url, &request.options(), true)
        .map_err(|e| Error::Download(e.to_string()))?;

    let title = info.title.unwrap_or_else(|| "Unknown".to_string());
    let height = info.height.unwrap_or_else(|| request.quality.height());
    let filename = output_filename(&request.output_dir, &title, height);

    tracing::info!(title = %title, height, file = ?filename.display(), "download finished");

    Ok(Downloaded { title, filename })
}

/// [`execute`] using yt-dlp.
pub fn execute_url(request: &DownloadRequest) -> DownloadOutcome {
    execute(&YtDlp, request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeExtractor;
    use serde_json::json;

    fn request(quality: QualityTier, output_dir: PathBuf) -> DownloadRequest {
        DownloadRequest {
            url: "https://youtu.be/jNQXAC9IVRw".to_string(),
            quality,
            output_dir,
        }
    }

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("vidgrab-dl-unit").join(name);
        if dir.exists() {
            std::fs::remove_dir_all(&dir).ok();
        }
        dir
    }

    #[test]
    fn filename_embeds_resolved_height() {
        let extractor = FakeExtractor::info(r#"{"title": "Clip", "height": 720, "ext": "mp4"}"#);
        let dir = temp_dir("height");

        let downloaded = execute(&extractor, &request(QualityTier::Hd720, dir.clone())).unwrap();

        assert_eq!(downloaded.title, "Clip");
        assert_eq!(downloaded.filename, dir.join("Clip_720p.mp4"));
        assert!(downloaded.filename.to_string_lossy().contains("_720p."));
    }

    #[test]
    fn lower_source_height_wins() {
        let extractor = FakeExtractor::info(r#"{"title": "Zoo", "height": 240}"#);
        let dir = temp_dir("lower");

        let downloaded = execute(&extractor, &request(QualityTier::Fhd1080, dir.clone())).unwrap();

        assert_eq!(downloaded.filename, dir.join("Zoo_240p.mp4"));
    }

    #[test]
    fn missing_fields_fall_back() {
        let extractor = FakeExtractor::info("{}");
        let dir = temp_dir("fallback");

        let downloaded = execute(&extractor, &request(QualityTier::Sd480, dir.clone())).unwrap();

        assert_eq!(downloaded.title, "Unknown");
        assert_eq!(downloaded.filename, dir.join("Unknown_480p.mp4"));
    }

    #[test]
    fn creates_nested_output_dir() {
        let extractor = FakeExtractor::info(r#"{"title": "Clip"}"#);
        let root = temp_dir("nested");
        let dir = root.join("a").join("b");

        execute(&extractor, &request(QualityTier::Hd720, dir.clone())).unwrap();

        assert!(dir.is_dir());
    }

    #[test]
    fn passes_download_preset() {
        let extractor = FakeExtractor::info(r#"{"title": "Clip"}"#);
        let dir = temp_dir("preset");

        execute(&extractor, &request(QualityTier::Uhd2160, dir.clone())).unwrap();

        let call = extractor.last_call();
        assert!(call.download);
        assert_eq!(
            call.params,
            json!({
                "format": "bestvideo[height<=2160][ext=mp4]+bestaudio[ext=m4a]/best[height<=2160][ext=mp4]/best",
                "paths": {"home": dir.to_string_lossy()},
                "outtmpl": {"default": "%(title)s_%(height)sp.%(ext)s"},
                "merge_output_format": "mp4",
                "noplaylist": true,
                "quiet": false,
                "no_warnings": false,
            })
        );
    }

    #[test]
    fn failure_keeps_raw_message_and_writes_nothing() {
        let message = "ERROR: [generic] 'not a url' is not a valid URL";
        let extractor = FakeExtractor::raising(message);
        let dir = temp_dir("failure");

        let err = execute(&extractor, &request(QualityTier::Hd720, dir.clone())).unwrap_err();

        assert!(matches!(err, Error::Download(_)));
        assert_eq!(err.message(), message);
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[test]
    fn unusable_output_dir_is_download_error() {
        let extractor = FakeExtractor::info(r#"{"title": "Clip"}"#);
        let root = temp_dir("blocked");
        std::fs::create_dir_all(&root).unwrap();
        let file = root.join("file");
        std::fs::write(&file, b"").unwrap();

        let err = execute(&extractor, &request(QualityTier::Hd720, file.join("sub"))).unwrap_err();

        assert!(matches!(err, Error::Download(_)));
        assert!(!err.message().is_empty());
        assert!(extractor.calls.borrow().is_empty());
    }

    #[test]
    fn repeated_calls_are_independent() {
        let extractor = FakeExtractor::info(r#"{"title": "Clip", "height": 480}"#);
        let req = request(QualityTier::Sd480, temp_dir("repeat"));

        let first = execute(&extractor, &req).unwrap();
        let second = execute(&extractor, &req).unwrap();

        assert_eq!(first, second);

        let calls = extractor.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].params, calls[1].params);
    }
}
