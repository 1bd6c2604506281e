//! vidgrab CLI - video info and quality-capped downloads

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;
use vidgrab::cli::{Cli, run_cli};

fn main() -> Result<()> {
    color_eyre::install()?;

    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    run_cli(Cli::parse())
}
