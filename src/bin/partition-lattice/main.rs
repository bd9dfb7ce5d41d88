use anyhow::Result;
use clap::Parser;
use log::debug;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Library diagnostics go through `log`; the subscriber's bridge picks them up.
    let level = if cli.debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();
    debug!("{} v{}", env!("CARGO_BIN_NAME"), env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Enumerate(ground) => commands::enumerate(ground.ground()?),
        Commands::Hasse { ground, json } => commands::hasse(ground.ground()?, json),
        Commands::Join { left, right } => commands::join(&left, &right),
        Commands::Effect { left, right, pair } => commands::effect(&left, &right, &pair),
        Commands::Demo => commands::demo(),
    }
}
