//! Tests for the randomized-heuristic easy strategy.

use tictactoe_arena::{Board, EasyAi, GameError, Player, Square, Strategy};

fn occupy(board: &mut Board, positions: &[usize], player: Player) {
    for &pos in positions {
        board.set(pos, Square::Occupied(player)).unwrap();
    }
}

/// X X . / O O . / . . . - X to move, winning move at index 2.
fn board_with_win_at_2() -> Board {
    let mut board = Board::new();
    occupy(&mut board, &[0, 1], Player::X);
    occupy(&mut board, &[3, 4], Player::O);
    board
}

#[test]
fn test_takes_the_win_about_a_third_of_the_time() {
    // 5 legal moves remain, so the winning square is chosen with
    // probability 0.3 + 0.7 / 5 = 0.44; over 1000 trials that is 440
    // expected with a standard deviation near 16.
    let board = board_with_win_at_2();
    let mut ai = EasyAi::seeded(42, 0.3);

    let mut wins = 0;
    for _ in 0..1000 {
        let pos = ai.choose_move(&board, Player::X).unwrap();
        assert!(board.legal_moves().contains(&pos));
        if pos == 2 {
            wins += 1;
        }
    }

    assert!((360..=520).contains(&wins), "win taken {wins} times");
    assert!(wins < 1000, "easy AI must not be deterministic");
}

#[test]
fn test_always_smart_takes_the_win() {
    let board = board_with_win_at_2();
    let mut ai = EasyAi::seeded(7, 1.0);

    for _ in 0..100 {
        assert_eq!(ai.choose_move(&board, Player::X).unwrap(), 2);
    }
}

#[test]
fn test_always_smart_blocks_when_no_win_exists() {
    // O O . / X . . / . . . - X to move has no win and must block at 2.
    let mut board = Board::new();
    occupy(&mut board, &[0, 1], Player::O);
    occupy(&mut board, &[3], Player::X);

    let mut ai = EasyAi::seeded(7, 1.0);
    for _ in 0..100 {
        assert_eq!(ai.choose_move(&board, Player::X).unwrap(), 2);
    }
}

#[test]
fn test_smart_falls_back_to_random_without_threats() {
    // No win or block available anywhere on an empty board.
    let board = Board::new();
    let mut ai = EasyAi::seeded(11, 1.0);

    for _ in 0..50 {
        let pos = ai.choose_move(&board, Player::X).unwrap();
        assert!(pos < 9);
    }
}

#[test]
fn test_random_only_stays_legal() {
    let board = board_with_win_at_2();
    let mut ai = EasyAi::seeded(3, 0.0);

    for _ in 0..200 {
        let pos = ai.choose_move(&board, Player::X).unwrap();
        assert!(board.legal_moves().contains(&pos));
    }
}

#[test]
fn test_no_legal_move_on_full_board() {
    let mut board = Board::new();
    occupy(&mut board, &[0, 2, 4, 5, 7], Player::X);
    occupy(&mut board, &[1, 3, 6, 8], Player::O);
    assert!(board.is_full());

    let err = EasyAi::seeded(1, 0.3)
        .choose_move(&board, Player::X)
        .unwrap_err();
    assert_eq!(err, GameError::NoLegalMove);
}

#[test]
fn test_no_legal_move_on_decided_board() {
    // X already won; the remaining empty squares are not playable.
    let mut board = Board::new();
    occupy(&mut board, &[0, 1, 2], Player::X);
    occupy(&mut board, &[3, 4], Player::O);

    let err = EasyAi::seeded(1, 0.3)
        .choose_move(&board, Player::O)
        .unwrap_err();
    assert_eq!(err, GameError::NoLegalMove);
}
