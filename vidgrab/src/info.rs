//! Info subcommand - show video metadata without downloading.

use eyre::{Context, Result};
use std::fmt::Write;
use vidgrab_dl::format::{format_count, format_duration};
use vidgrab_dl::info::{VideoMetadata, resolve_url};

/// CLI arguments for the info lookup.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Video URL
    pub url: String,
}

/// Resolved configuration for the info lookup.
#[derive(Debug)]
pub struct Config {
    pub url: String,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        Ok(Self { url: args.url })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let meta = resolve_url(&config.url).wrap_err("failed to fetch video info")?;

    print!("{}", render(&meta));

    Ok(())
}

/// Render metadata as the block printed to stdout.
pub fn render(meta: &VideoMetadata) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", meta.title);
    let _ = writeln!(out, "  Channel:   {}", meta.channel);
    let _ = writeln!(
        out,
        "  Duration:  {}",
        format_duration(Some(meta.duration_secs))
    );
    let _ = writeln!(out, "  Views:     {}", format_count(meta.view_count));
    if !meta.thumbnail.is_empty() {
        let _ = writeln!(out, "  Thumbnail: {}", meta.thumbnail);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", meta.description);

    out
}
