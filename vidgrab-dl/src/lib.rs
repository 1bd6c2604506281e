//! Video lookup and download through [yt-dlp](https://github.com/yt-dlp/yt-dlp).
//!
//! ## Modules
//!
//! - [`dl`] - yt-dlp parameter/info types and the [`dl::Extractor`] seam
//! - [`quality`] - Resolution tiers and their format-selection presets
//! - [`info`] - Metadata lookup without downloading
//! - [`execute`] - Quality-capped download merged into a single MP4
//! - [`format`] - Display helpers for durations, counts and descriptions
//!
//! ## Quick Start
//!
//! **Inspect a video**:
//! ```no_run
//! use vidgrab_dl::info::resolve_url;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let meta = resolve_url("https://youtube.com/watch?v=example")?;
//! println!("{} by {}", meta.title, meta.channel);
//! # Ok(())
//! # }
//! ```
//!
//! **Download at 720p**:
//! ```no_run
//! use vidgrab_dl::execute::{DownloadRequest, execute_url};
//! use vidgrab_dl::quality::QualityTier;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let request = DownloadRequest {
//!     url: "https://youtube.com/watch?v=example".to_string(),
//!     quality: QualityTier::Hd720,
//!     output_dir: "videos".into(),
//! };
//! let downloaded = execute_url(&request)?;
//! println!("saved to {}", downloaded.filename.display());
//! # Ok(())
//! # }
//! ```

pub mod dl;
pub mod error;
pub mod execute;
pub mod format;
pub mod info;
pub mod quality;

#[cfg(test)]
pub(crate) mod fake;
