//! Command-line interface for compass_games.

use crate::config::{ConfigError, GameConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

/// Compass Games - tic-tac-toe against a heuristic opponent
///
/// Moves are entered as compass names: nw n ne / w c e / sw s se.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "compass_games")]
#[command(about = "Tic-tac-toe against a heuristic opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./compass_games.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the opponent's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the opponent's thinking pause
    #[arg(long)]
    pub no_delay: bool,

    /// Do not clear the terminal before drawing the board
    #[arg(long)]
    pub no_clear: bool,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Loads the config file and applies command-line overrides on top.
    #[instrument(skip(self))]
    pub fn resolve_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = GameConfig::load(self.config.as_deref())?;
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.no_delay {
            config = config.with_think_delay_ms(Vec::new());
        }
        if self.no_clear {
            config = config.with_clear_screen(false);
        }
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }
        Ok(config)
    }
}
