//! Strictly Cube - console entry point.

use anyhow::Result;
use clap::Parser;
use strictly_cube_console::{Cli, Command, Session, SessionConfig, write_lines, write_replay};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SessionConfig::from_file(path)?,
        None => SessionConfig::default(),
    };
    if let Some(filter) = &cli.log_filter {
        config = config.with_log_filter(filter.clone());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            info!("Starting interactive session");
            Session::new(config).run(std::io::stdin().lock(), stdout.lock())?;
        }
        Command::Lines { category } => write_lines(category, &mut stdout.lock())?,
        Command::Replay { moves } => write_replay(&moves, &mut stdout.lock())?,
    }
    Ok(())
}
