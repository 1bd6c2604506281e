//! Get subcommand - download a video at or below the chosen resolution.

use crate::cli::OutputArgs;
use crate::config::OutputConfig;
use color_eyre::Section;
use eyre::{Context, Result};
use vidgrab_dl::execute::{DownloadRequest, execute_url};
use vidgrab_dl::quality::QualityTier;

/// CLI arguments for a download.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Video URL
    pub url: String,

    /// Resolution ceiling: 2160, 1080, 720 or 480 (others fall back to 1080)
    #[arg(short, long, default_value = "1080")]
    pub quality: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Resolved configuration for a download.
#[derive(Debug)]
pub struct Config {
    pub request: DownloadRequest,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let output = OutputConfig::try_from(args.output)?;

        Ok(Self {
            request: DownloadRequest {
                url: args.url,
                quality: args.quality.parse().unwrap_or_default(),
                output_dir: output.dir,
            },
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let url = &config.request.url;

    let downloaded = execute_url(&config.request)
        .wrap_err_with(|| format!("failed to download in {}p", config.request.quality))
        .with_suggestion(|| format!("vidgrab info {url:?}"))?;

    println!("Downloaded: {}", downloaded.title);
    println!("Saved to: {}", downloaded.filename.display());

    Ok(())
}

/// Print the supported tiers, highest first.
pub fn list_qualities() {
    for tier in QualityTier::ALL {
        let default = if tier == QualityTier::default() {
            " (default)"
        } else {
            ""
        };
        println!("{:>4}  {}{default}", tier.height(), tier.label());
    }
}
