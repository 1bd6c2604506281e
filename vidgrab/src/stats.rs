//! Stats subcommand - count downloaded MP4 files and their total size.

use crate::cli::OutputArgs;
use crate::config::OutputConfig;
use eyre::{Context, Result};
use std::path::{Path, PathBuf};
use vidgrab_dl::quality::MERGE_FORMAT;

const GIB: f64 = (1u64 << 30) as f64;

/// CLI arguments for folder statistics.
#[derive(clap::Args, Debug)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Resolved configuration for folder statistics.
#[derive(Debug)]
pub struct Config {
    pub dir: PathBuf,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let output = OutputConfig::try_from(args.output)?;
        Ok(Self { dir: output.dir })
    }
}

/// MP4 files directly inside a download folder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LibraryStats {
    pub count: usize,
    pub total_bytes: u64,
}

impl LibraryStats {
    pub fn total_gib(&self) -> f64 {
        self.total_bytes as f64 / GIB
    }
}

/// Scan `dir` (not recursive). A missing folder counts as empty.
pub fn library_stats(dir: &Path) -> std::io::Result<LibraryStats> {
    if !dir.exists() {
        return Ok(LibraryStats::default());
    }

    let mut stats = LibraryStats::default();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) != Some(MERGE_FORMAT) {
            continue;
        }

        let metadata = entry.metadata()?;
        if metadata.is_file() {
            stats.count += 1;
            stats.total_bytes += metadata.len();
        }
    }

    Ok(stats)
}

pub fn execute(config: Config) -> Result<()> {
    let stats = library_stats(&config.dir)
        .wrap_err_with(|| format!("failed to scan {:?}", config.dir.display()))?;

    tracing::debug!(dir = ?config.dir.display(), ?stats, "scanned download folder");

    println!("Folder: {}", config.dir.display());
    println!("Downloaded videos: {}", stats.count);
    if stats.count > 0 {
        println!("Total size: {:.2} GB", stats.total_gib());
    }

    Ok(())
}
