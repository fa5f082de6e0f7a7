//! Core domain types for tic-tac-toe.

use super::error::{GameError, InvalidMove};
use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Squares are addressed by index 0-8 in row-major order; the presentation
/// surfaces translate the player-facing 1-9 numbering at the boundary.
/// `apply_move` maintains the alternating-turn invariant (X moves first);
/// `set` is the unchecked escape hatch for tests and AI probes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Sets the square at the given position, bypassing turn-order checks.
    pub fn set(&mut self, pos: usize, square: Square) -> Result<(), GameError> {
        if pos >= 9 {
            return Err(InvalidMove::OutOfRange.into());
        }
        self.squares[pos] = square;
        Ok(())
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// The side whose turn it is: X when the mark counts are equal, else O.
    pub fn to_move(&self) -> Player {
        if self.count(Player::X) == self.count(Player::O) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Places `player`'s mark at `pos`, enforcing the move contract.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidMove` when the position is out of the 0-8
    /// range, the square is occupied, or it is not `player`'s turn. The
    /// board is left unchanged on error.
    pub fn apply_move(&mut self, pos: usize, player: Player) -> Result<(), GameError> {
        if pos >= 9 {
            return Err(InvalidMove::OutOfRange.into());
        }
        if self.squares[pos] != Square::Empty {
            return Err(InvalidMove::Occupied.into());
        }
        if player != self.to_move() {
            return Err(InvalidMove::WrongTurn.into());
        }
        self.squares[pos] = Square::Occupied(player);
        Ok(())
    }

    /// Indices of all empty squares, in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..self.squares.len())
            .filter(|&pos| self.squares[pos] == Square::Empty)
            .collect()
    }

    /// Returns a copy of the board with `player`'s mark added at `pos`.
    ///
    /// Turn order is not checked; this is the snapshot primitive the AI
    /// strategies use to probe hypothetical moves for either side. Returns
    /// `None` when the square is unavailable.
    pub fn with_move(&self, pos: usize, player: Player) -> Option<Board> {
        if !self.is_empty(pos) {
            return None;
        }
        let mut next = self.clone();
        next.squares[pos] = Square::Occupied(player);
        Some(next)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|&s| s != Square::Empty)
    }

    /// Clears all squares back to empty.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(Player::X) => "X".to_string(),
                    Square::Occupied(Player::O) => "O".to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
///
/// Always derived from the board by [`super::rules::evaluate`], never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The winning player.
        winner: Player,
        /// The completed line.
        line: [Position; 3],
    },
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True once the game is decided.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}
