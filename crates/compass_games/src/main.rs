//! Compass Games - play tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use compass_games::{Cli, GameConfig, TerminalConsole, ThinkDelay};
use compass_tictactoe::{OpponentEngine, RngChooser, Session};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_tracing(&config)?;

    run(&config)
}

/// Logs to a file so tracing output never lands on top of the board.
fn init_tracing(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}

#[instrument(skip(config))]
fn run(config: &GameConfig) -> Result<()> {
    info!(seed = ?config.seed(), "Starting Compass Games");

    let chooser = match config.seed() {
        Some(seed) => RngChooser::seeded(*seed),
        None => RngChooser::from_entropy(),
    };
    let engine = OpponentEngine::new(chooser);

    let stdin = io::stdin();
    let console = TerminalConsole::new(
        stdin.lock(),
        io::stdout(),
        *config.clear_screen(),
        ThinkDelay::from_entropy(config.think_delay_ms()),
    );

    let mut session = Session::new(console, engine);
    let tally = session.run()?;

    let mut console = session.into_console();
    console.farewell(&tally)?;
    Ok(())
}
