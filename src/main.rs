//! Tic Tac Toe - unified CLI.

use anyhow::Result;
use clap::Parser;
use tictactoe_arena::cli::{Cli, Command};
use tictactoe_arena::config::GameConfig;
use tictactoe_arena::{console, tui};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play { mode, config } => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .init();
            let config = GameConfig::load(config.as_deref())?;
            console::run(mode, &config)
        }
        Command::Tui { mode, config } => {
            // The TUI installs its own file-backed subscriber.
            let config = GameConfig::load(config.as_deref())?;
            tui::run(mode, &config).await
        }
    }
}
