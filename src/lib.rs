//! Tic Tac Toe with two AI difficulty tiers and a session scoreboard.
//!
//! # Architecture
//!
//! - **game**: board model, typed positions, and the pure outcome evaluator
//! - **ai**: the easy (randomized-heuristic) and hard (minimax) strategies
//! - **scoreboard** / **session**: score tallying and per-session game state
//! - **console** / **tui**: the two presentation surfaces driving the core
//!
//! # Example
//!
//! ```
//! use tictactoe_arena::{GameMode, GameSession, GameStatus};
//!
//! let mut session = GameSession::new(GameMode::TwoPlayer);
//! session.apply_move(0)?; // X takes the top-left corner
//! assert_eq!(session.status(), GameStatus::InProgress);
//! # Ok::<(), tictactoe_arena::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod ai;
pub mod cli;
pub mod config;
pub mod console;
pub mod game;
pub mod scoreboard;
pub mod session;
pub mod tui;

// Crate-level exports - AI strategies
pub use ai::{DEFAULT_SMART_CHANCE, Difficulty, EasyAi, Minimax, Strategy};

// Crate-level exports - configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - game core
pub use game::{
    Board, GameError, GameStatus, InvalidMove, Mark, Player, Position, Square, evaluate,
};

// Crate-level exports - scoring and sessions
pub use scoreboard::{GameResult, ScoreSummary, Scoreboard};
pub use session::{GameMode, GameSession};
