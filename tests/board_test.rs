//! Tests for the board move contract.

use tictactoe_arena::{Board, GameError, InvalidMove, Player, Square};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.squares().iter().all(|&s| s == Square::Empty));
    assert_eq!(board.to_move(), Player::X);
    assert_eq!(board.legal_moves(), (0..9).collect::<Vec<_>>());
}

#[test]
fn test_apply_move_places_mark_and_alternates_turn() {
    let mut board = Board::new();
    board.apply_move(4, Player::X).unwrap();

    assert_eq!(board.get(4), Some(Square::Occupied(Player::X)));
    assert_eq!(board.to_move(), Player::O);

    board.apply_move(0, Player::O).unwrap();
    assert_eq!(board.to_move(), Player::X);
}

#[test]
fn test_apply_move_rejects_occupied_cell() {
    let mut board = Board::new();
    board.apply_move(4, Player::X).unwrap();

    let before = board.clone();
    let err = board.apply_move(4, Player::O).unwrap_err();
    assert_eq!(err, GameError::InvalidMove(InvalidMove::Occupied));
    assert_eq!(board, before);
}

#[test]
fn test_apply_move_rejects_out_of_range() {
    let mut board = Board::new();
    let before = board.clone();

    let err = board.apply_move(9, Player::X).unwrap_err();
    assert_eq!(err, GameError::InvalidMove(InvalidMove::OutOfRange));
    assert_eq!(board, before);
}

#[test]
fn test_apply_move_rejects_wrong_turn() {
    let mut board = Board::new();

    // O cannot open the game.
    let err = board.apply_move(0, Player::O).unwrap_err();
    assert_eq!(err, GameError::InvalidMove(InvalidMove::WrongTurn));

    // X cannot move twice in a row.
    board.apply_move(0, Player::X).unwrap();
    let before = board.clone();
    let err = board.apply_move(1, Player::X).unwrap_err();
    assert_eq!(err, GameError::InvalidMove(InvalidMove::WrongTurn));
    assert_eq!(board, before);
}

#[test]
fn test_legal_moves_shrink_in_ascending_order() {
    let mut board = Board::new();
    board.apply_move(4, Player::X).unwrap();
    board.apply_move(0, Player::O).unwrap();

    assert_eq!(board.legal_moves(), vec![1, 2, 3, 5, 6, 7, 8]);
}

#[test]
fn test_reset_restores_all_nine_moves() {
    let mut board = Board::new();
    board.apply_move(0, Player::X).unwrap();
    board.apply_move(4, Player::O).unwrap();
    board.apply_move(8, Player::X).unwrap();

    board.reset();
    assert_eq!(board.legal_moves(), (0..9).collect::<Vec<_>>());
    assert_eq!(board.to_move(), Player::X);
}

#[test]
fn test_with_move_leaves_original_untouched() {
    let mut board = Board::new();
    board.apply_move(0, Player::X).unwrap();

    let probe = board.with_move(1, Player::O).unwrap();
    assert_eq!(probe.get(1), Some(Square::Occupied(Player::O)));
    assert_eq!(board.get(1), Some(Square::Empty));

    // Occupied and out-of-range probes are refused.
    assert!(board.with_move(0, Player::O).is_none());
    assert!(board.with_move(9, Player::O).is_none());
}
