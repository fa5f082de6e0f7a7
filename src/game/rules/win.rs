//! Win detection logic for tic-tac-toe.

use crate::game::position::Position;
use crate::game::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub(crate) const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds a completed line on the board.
///
/// Returns the winner together with the winning triple, `None` otherwise.
/// On boards reached through legal alternating play at most one side can
/// hold a completed line, so the first match is the outcome.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    for line in LINES {
        let [a, b, c] = line;
        if let Some(Square::Occupied(player)) = board.get(a.to_index()) {
            if board.get(b.to_index()) == Some(Square::Occupied(player))
                && board.get(c.to_index()) == Some(Square::Occupied(player))
            {
                return Some((player, line));
            }
        }
    }
    None
}

/// Checks if there is a winner on the board.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
