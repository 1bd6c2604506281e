//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "vidgrab")]
#[command(about = "Video info and quality-capped downloads via yt-dlp")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show title, channel, duration and views without downloading
    Info(crate::info::Args),

    /// Download a video as MP4 at or below the chosen resolution
    Get(crate::get::Args),

    /// Count downloaded MP4 files and their total size
    Stats(crate::stats::Args),

    /// List supported quality tiers
    Qualities,
}

/// Output directory shared by subcommands that touch the download folder.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Download folder (default: <system downloads>/YouTube)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Info(args) => crate::info::execute(args.try_into()?),
        Commands::Get(args) => crate::get::execute(args.try_into()?),
        Commands::Stats(args) => crate::stats::execute(args.try_into()?),
        Commands::Qualities => {
            crate::get::list_qualities();
            Ok(())
        }
    }
}
