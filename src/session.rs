//! Game session management: one board, one mode, one scoreboard.

use crate::ai::Difficulty;
use crate::game::{Board, GameError, GameStatus, InvalidMove, Mark, rules};
use crate::scoreboard::{GameResult, ScoreSummary, Scoreboard};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who drives the O side.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, strum::Display,
)]
pub enum GameMode {
    /// Human vs beatable computer.
    Easy,
    /// Human vs unbeatable computer.
    Hard,
    /// Two humans sharing the keyboard.
    #[strum(serialize = "Two Player")]
    TwoPlayer,
}

impl GameMode {
    /// Difficulty of the computer side, when there is one.
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            GameMode::Easy => Some(Difficulty::Easy),
            GameMode::Hard => Some(Difficulty::Hard),
            GameMode::TwoPlayer => None,
        }
    }

    /// Scoreboard side names under this mode.
    pub fn side_names(self) -> (&'static str, &'static str) {
        match self {
            GameMode::TwoPlayer => ("Player 1", "Player 2"),
            GameMode::Easy | GameMode::Hard => ("You", "Computer"),
        }
    }

    /// The next mode in the cycle, wrapping around.
    pub fn next(self) -> Self {
        match self {
            GameMode::Easy => GameMode::Hard,
            GameMode::Hard => GameMode::TwoPlayer,
            GameMode::TwoPlayer => GameMode::Easy,
        }
    }
}

/// One interactive session: a live board, the active mode, and the running
/// score.
///
/// Sessions are plain owned values; separate sessions never share state, so
/// a test harness can drive several at once.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    mode: GameMode,
    scoreboard: Scoreboard,
}

impl GameSession {
    /// Starts a session in the given mode with a zeroed scoreboard.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        info!(%mode, "starting session");
        let (player_one, player_two) = mode.side_names();
        Self {
            board: Board::new(),
            mode,
            scoreboard: Scoreboard::new(player_one, player_two),
        }
    }

    /// Returns the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the active mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Evaluates the board to its current status.
    pub fn status(&self) -> GameStatus {
        rules::evaluate(&self.board)
    }

    /// The side whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.board.to_move()
    }

    /// Indices of all empty squares, in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.board.legal_moves()
    }

    /// Scoreboard snapshot for display.
    pub fn summary(&self) -> ScoreSummary {
        self.scoreboard.summary()
    }

    /// Applies a move for the side to move and returns the evaluated status.
    ///
    /// The move that finishes the game also records its outcome, so each
    /// game contributes exactly one scoreboard entry.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidMove` when the game is already over or
    /// the board rejects the position; the session is left unchanged.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, pos: usize) -> Result<GameStatus, GameError> {
        if self.status().is_terminal() {
            warn!(pos, "move rejected: game already over");
            return Err(InvalidMove::Finished.into());
        }

        let mark = self.board.to_move();
        self.board.apply_move(pos, mark)?;

        let status = self.status();
        if let Some(result) = GameResult::from_status(&status, Mark::X) {
            info!(?result, "game finished");
            self.scoreboard.record(result);
        }
        debug!(pos, ?mark, ?status, "move applied");
        Ok(status)
    }

    /// Starts a fresh game, keeping the mode and the scores.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        debug!("resetting board for a new game");
        self.board.reset();
    }

    /// Switches mode and renames the scoreboard sides.
    ///
    /// Counters carry over; resetting them stays an explicit, separate
    /// action.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        if mode == self.mode {
            return;
        }
        info!(old = %self.mode, new = %mode, "changing mode");
        self.mode = mode;
        let (player_one, player_two) = mode.side_names();
        self.scoreboard.set_names(player_one, player_two);
    }

    /// Zeroes the scoreboard.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        info!("resetting scores");
        self.scoreboard.reset();
    }
}
