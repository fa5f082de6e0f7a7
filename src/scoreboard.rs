//! Session score tracking.

use crate::game::{GameStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Outcome of a finished game, from the session's fixed seating.
///
/// Player one is the side holding X: the human in vs-computer modes,
/// Player 1 in two-player mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Player one won.
    PlayerOneWin,
    /// Player two won.
    PlayerTwoWin,
    /// Nobody won.
    Draw,
}

impl GameResult {
    /// Maps a terminal status to a result, with `player_one` naming the
    /// mark counted as player one. Returns `None` while the game is still
    /// in progress.
    pub fn from_status(status: &GameStatus, player_one: Player) -> Option<Self> {
        match status {
            GameStatus::InProgress => None,
            GameStatus::Draw => Some(GameResult::Draw),
            GameStatus::Won { winner, .. } => Some(if *winner == player_one {
                GameResult::PlayerOneWin
            } else {
                GameResult::PlayerTwoWin
            }),
        }
    }
}

/// Win and draw counters for one session.
///
/// Incremented exactly once per completed game; never persisted beyond the
/// running process.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Display name for player one.
    player_one_name: String,
    /// Display name for player two.
    player_two_name: String,
    /// Games won by player one.
    player_one_wins: u32,
    /// Games won by player two.
    player_two_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Scoreboard {
    /// Creates a zeroed scoreboard with the given side names.
    pub fn new(player_one_name: impl Into<String>, player_two_name: impl Into<String>) -> Self {
        Self {
            player_one_name: player_one_name.into(),
            player_two_name: player_two_name.into(),
            player_one_wins: 0,
            player_two_wins: 0,
            draws: 0,
        }
    }

    /// Records the result of a completed game.
    #[instrument(skip(self))]
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::PlayerOneWin => self.player_one_wins += 1,
            GameResult::PlayerTwoWin => self.player_two_wins += 1,
            GameResult::Draw => self.draws += 1,
        }
        debug!(
            player_one_wins = self.player_one_wins,
            player_two_wins = self.player_two_wins,
            draws = self.draws,
            "result recorded"
        );
    }

    /// Resets all counters to zero, keeping the side names.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.player_one_wins = 0;
        self.player_two_wins = 0;
        self.draws = 0;
    }

    /// Renames the two sides, keeping the counters.
    pub fn set_names(&mut self, player_one: impl Into<String>, player_two: impl Into<String>) {
        self.player_one_name = player_one.into();
        self.player_two_name = player_two.into();
    }

    /// Total games recorded.
    pub fn games_played(&self) -> u32 {
        self.player_one_wins + self.player_two_wins + self.draws
    }

    /// Snapshot of names, counters, and the derived total.
    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary {
            player_one_name: self.player_one_name.clone(),
            player_two_name: self.player_two_name.clone(),
            player_one_wins: self.player_one_wins,
            player_two_wins: self.player_two_wins,
            draws: self.draws,
            games_played: self.games_played(),
        }
    }
}

/// Scoreboard snapshot for display; the surfaces choose the format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Display name for player one.
    pub player_one_name: String,
    /// Display name for player two.
    pub player_two_name: String,
    /// Games won by player one.
    pub player_one_wins: u32,
    /// Games won by player two.
    pub player_two_wins: u32,
    /// Drawn games.
    pub draws: u32,
    /// Total games recorded.
    pub games_played: u32,
}
