//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::game::types::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winner is a draw.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{Player, Square};

    fn occupy(board: &mut Board, positions: &[usize], player: Player) {
        for &pos in positions {
            board.set(pos, Square::Occupied(player)).unwrap();
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        occupy(&mut board, &[4], Player::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        occupy(&mut board, &[0, 2, 4, 5, 7], Player::X);
        occupy(&mut board, &[1, 3, 6, 8], Player::O);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        occupy(&mut board, &[0, 1, 2], Player::X);
        occupy(&mut board, &[3, 4], Player::O);
        assert!(!is_draw(&board));
    }
}
