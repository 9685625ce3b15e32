//! `song-catalog` command-line entry point.

use clap::Parser;
use song_catalog::cli;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(
            EnvFilter::from_default_env()
                .add_directive("song_catalog=info".parse()?)
                .add_directive("catalog=info".parse()?)
                .add_directive("db=info".parse()?)
                .add_directive("enrichment=info".parse()?),
        )
        .init();

    cli::run_command(args)
}
