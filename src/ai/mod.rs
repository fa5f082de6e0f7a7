//! Computer move selection: the beatable easy tier and the optimal hard tier.

mod easy;
mod minimax;

pub use easy::{DEFAULT_SMART_CHANCE, EasyAi};
pub use minimax::Minimax;

use crate::game::{Board, GameError, Player};
use serde::{Deserialize, Serialize};

/// A move-selection strategy for one side.
pub trait Strategy: Send {
    /// Chooses a board index (0-8) for `mark` to play on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoLegalMove`] when the board is already decided
    /// or has no empty square; drivers must not call this in that state.
    fn choose_move(&mut self, board: &Board, mark: Player) -> Result<usize, GameError>;

    /// Returns the strategy's display name.
    fn name(&self) -> &'static str;
}

/// AI difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Beatable: smart with fixed probability, random otherwise.
    Easy,
    /// Unbeatable: exhaustive minimax.
    Hard,
}

impl Difficulty {
    /// Builds a boxed strategy for this tier.
    ///
    /// `smart_chance` configures the easy tier's smart-move probability and
    /// is ignored by the hard tier.
    pub fn strategy(self, smart_chance: f64) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => Box::new(EasyAi::new(smart_chance)),
            Difficulty::Hard => Box::new(Minimax::new()),
        }
    }
}
