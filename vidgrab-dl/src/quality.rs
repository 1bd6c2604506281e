//! Resolution tiers and their yt-dlp download presets.
//!
//! Each tier caps the vertical resolution and prefers MP4 video with M4A audio:
//!
//! 1. best video `<=` height (mp4) + best audio (m4a), merged
//! 2. best single pre-merged stream `<=` height (mp4)
//! 3. best available stream, any container
//!
//! ```no_run
//! use vidgrab_dl::{dl::{DownloadOptions, Extractor, YtDlp}, quality::QualityTier};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts: DownloadOptions = QualityTier::Hd720.into();
//! YtDlp.extract_info("https://youtube.com/watch?v=example", &opts, true)?;
//! # Ok(())
//! # }
//! ```
//!
//! **Output:** `<title>_<height>p.mp4`

use crate::dl::{DownloadOptions, OutputTemplates};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Output name: resolved title and height of the downloaded stream.
pub const OUTPUT_TEMPLATE: &str = "%(title)s_%(height)sp.%(ext)s";

/// Container separate video/audio streams are merged into.
pub const MERGE_FORMAT: &str = "mp4";

/// Target vertical resolution ceiling.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum QualityTier {
    /// 2160p (4K)
    Uhd2160,
    /// 1080p (Full HD)
    #[default]
    Fhd1080,
    /// 720p (HD)
    Hd720,
    /// 480p (SD)
    Sd480,
}

impl QualityTier {
    /// All tiers, highest first.
    pub const ALL: [QualityTier; 4] = [Self::Uhd2160, Self::Fhd1080, Self::Hd720, Self::Sd480];

    /// Height ceiling in pixels.
    pub fn height(self) -> u32 {
        match self {
            Self::Uhd2160 => 2160,
            Self::Fhd1080 => 1080,
            Self::Hd720 => 720,
            Self::Sd480 => 480,
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Uhd2160 => "4K (2160p)",
            Self::Fhd1080 => "1080p Full HD",
            Self::Hd720 => "720p HD",
            Self::Sd480 => "480p SD",
        }
    }

    /// yt-dlp format-selection expression, most preferred alternative first.
    pub fn format_expression(self) -> &'static str {
        match self {
            Self::Uhd2160 => {
                "bestvideo[height<=2160][ext=mp4]+bestaudio[ext=m4a]/best[height<=2160][ext=mp4]/best"
            }
            Self::Fhd1080 => {
                "bestvideo[height<=1080][ext=mp4]+bestaudio[ext=m4a]/best[height<=1080][ext=mp4]/best"
            }
            Self::Hd720 => {
                "bestvideo[height<=720][ext=mp4]+bestaudio[ext=m4a]/best[height<=720][ext=mp4]/best"
            }
            Self::Sd480 => {
                "bestvideo[height<=480][ext=mp4]+bestaudio[ext=m4a]/best[height<=480][ext=mp4]/best"
            }
        }
    }

    /// Tier for an exact height, if one exists.
    pub fn from_height(height: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.height() == height)
    }
}

impl FromStr for QualityTier {
    type Err = Infallible;

    /// Accepts `2160`, `1080`, `720`, `480` with an optional trailing `p`.
    /// Anything else falls back to the default tier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let tier = s
            .strip_suffix(['p', 'P'])
            .unwrap_or(s)
            .parse()
            .ok()
            .and_then(Self::from_height);

        Ok(tier.unwrap_or_else(|| {
            tracing::warn!(quality = s, fallback = %Self::default(), "unknown quality tier");
            Self::default()
        }))
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.height())
    }
}

impl From<QualityTier> for DownloadOptions {
    /// Capped-height MP4 preset; yt-dlp progress and warnings stay visible.
    fn from(tier: QualityTier) -> Self {
        Self {
            format: Some(tier.format_expression().to_string()),
            paths: None,
            outtmpl: Some(OutputTemplates::simple(OUTPUT_TEMPLATE)),
            merge_output_format: Some(MERGE_FORMAT.to_string()),
            noplaylist: Some(true),
            quiet: Some(false),
            no_warnings: Some(false),
        }
    }
}
