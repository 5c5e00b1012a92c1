// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use collage::app::SnapshotStore;
use collage::config::Config;
use collage::errors::ConfigError;
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "collage")]
#[command(about = "Capture a photo, preview it and upload it")]
#[command(version = env!("GIT_VERSION"))]
#[command(subcommand_required = false)]
struct Cli {
    /// Configuration file (default: ~/.config/collage/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Snapshot file kept between sessions
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Run,

    /// Print the effective configuration
    Config,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=collage=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load(&config_path)?;

    match cli.command {
        Some(Commands::Config) => cli::show_config(&config, &config_path)?,
        Some(Commands::Run) | None => {
            let state_path = cli
                .state
                .or_else(SnapshotStore::default_path)
                .ok_or(ConfigError::NoStateDirectory)?;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(cli::run_session(config, SnapshotStore::new(state_path)))?;
        }
    }

    Ok(())
}
