//! Configuration types for resolved CLI arguments.
//!
//! Args structs (for CLI parsing) remain in cli.rs.

use crate::cli::OutputArgs;
use eyre::Result;
use std::path::PathBuf;
use vidgrab_dl::dl::default_output_dir;

/// Resolved download folder.
///
/// Converted from OutputArgs via TryFrom; falls back to the per-user default.
#[derive(Debug)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl TryFrom<OutputArgs> for OutputConfig {
    type Error = eyre::Error;

    fn try_from(args: OutputArgs) -> Result<Self> {
        let dir = args.output.unwrap_or_else(default_output_dir);

        tracing::debug!(dir = ?dir.display(), "resolved output directory");

        Ok(Self { dir })
    }
}
