//! Error types for the game core.

use derive_more::{Display, Error};

/// Errors the game core can produce.
///
/// Both are local, recoverable conditions: drivers re-prompt on
/// `InvalidMove`, while `NoLegalMove` signals a driver bug (an AI asked to
/// move on a board with nothing left to play).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A move that violates the board contract.
    #[display("invalid move: {_0}")]
    InvalidMove(InvalidMove),
    /// An AI was asked to move with no legal move available.
    #[display("no legal move available")]
    NoLegalMove,
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// Position is outside the board.
    #[display("position out of range")]
    OutOfRange,
    /// Square is already occupied.
    #[display("square is already occupied")]
    Occupied,
    /// The other side is to move.
    #[display("not that player's turn")]
    WrongTurn,
    /// The game is already decided.
    #[display("the game is already over")]
    Finished,
}

impl From<InvalidMove> for GameError {
    fn from(reason: InvalidMove) -> Self {
        GameError::InvalidMove(reason)
    }
}
