//! Command-line interface for tictactoe_arena.

use crate::session::GameMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic Tac Toe - two AI tiers and a session scoreboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic Tac Toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play with plain console prompts
    Play {
        /// Game mode; selected interactively when omitted
        #[arg(long, value_enum)]
        mode: Option<GameMode>,

        /// Path to a TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Play in the full-screen terminal UI
    Tui {
        /// Initial game mode
        #[arg(long, value_enum)]
        mode: Option<GameMode>,

        /// Path to a TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
