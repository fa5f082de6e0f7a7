//! Tests for the optimal minimax strategy.

use tictactoe_arena::{
    Board, EasyAi, GameError, GameStatus, Minimax, Player, Square, Strategy, evaluate,
};

fn occupy(board: &mut Board, positions: &[usize], player: Player) {
    for &pos in positions {
        board.set(pos, Square::Occupied(player)).unwrap();
    }
}

#[test]
fn test_takes_immediate_win() {
    // X X . / O O . / . . . - X to move must complete the top row.
    let mut board = Board::new();
    occupy(&mut board, &[0, 1], Player::X);
    occupy(&mut board, &[3, 4], Player::O);

    let pos = Minimax::new().choose_move(&board, Player::X).unwrap();
    assert_eq!(pos, 2);
}

#[test]
fn test_blocks_forced_loss() {
    // O O . / X . . / . . . - X to move must block at the top right.
    let mut board = Board::new();
    occupy(&mut board, &[0, 1], Player::O);
    occupy(&mut board, &[3], Player::X);

    let pos = Minimax::new().choose_move(&board, Player::X).unwrap();
    assert_eq!(pos, 2);
}

#[test]
fn test_prefers_winning_over_blocking() {
    // X can win at 2 while O threatens at 5; winning ends the game first.
    let mut board = Board::new();
    occupy(&mut board, &[0, 1], Player::X);
    occupy(&mut board, &[3, 4], Player::O);

    let pos = Minimax::new().choose_move(&board, Player::X).unwrap();
    let next = board.with_move(pos, Player::X).unwrap();
    assert_eq!(evaluate(&next).winner(), Some(Player::X));
}

#[test]
fn test_self_play_from_empty_board_is_a_draw() {
    let mut board = Board::new();
    let mut strategy = Minimax::new();

    while !evaluate(&board).is_terminal() {
        let mark = board.to_move();
        let pos = strategy.choose_move(&board, mark).unwrap();
        board.apply_move(pos, mark).unwrap();
    }

    assert_eq!(evaluate(&board), GameStatus::Draw);
}

#[test]
fn test_never_loses_to_seeded_easy_opponents() {
    for seed in 0..10 {
        // Easy opens as X, minimax answers as O.
        let status = play_out(
            &mut EasyAi::seeded(seed, 0.3),
            &mut Minimax::new(),
        );
        assert_ne!(status.winner(), Some(Player::X), "seed {seed} beat minimax");

        // Seats swapped.
        let status = play_out(
            &mut Minimax::new(),
            &mut EasyAi::seeded(seed, 0.3),
        );
        assert_ne!(status.winner(), Some(Player::O), "seed {seed} beat minimax");
    }
}

fn play_out(player_x: &mut dyn Strategy, player_o: &mut dyn Strategy) -> GameStatus {
    let mut board = Board::new();
    loop {
        let status = evaluate(&board);
        if status.is_terminal() {
            return status;
        }
        let mark = board.to_move();
        let pos = match mark {
            Player::X => player_x.choose_move(&board, mark).unwrap(),
            Player::O => player_o.choose_move(&board, mark).unwrap(),
        };
        board.apply_move(pos, mark).unwrap();
    }
}

#[test]
fn test_tie_break_is_deterministic_lowest_index() {
    // Every opening move draws under optimal play, so the root tie-break
    // settles on index 0.
    let board = Board::new();
    let mut strategy = Minimax::new();
    assert_eq!(strategy.choose_move(&board, Player::X).unwrap(), 0);
    assert_eq!(strategy.choose_move(&board, Player::X).unwrap(), 0);
}

#[test]
fn test_prefers_the_faster_win() {
    // O . . / . X X / . . O - X to move. Playing 1 forges a double threat
    // that forces a win in three plies; playing 3 wins immediately. Depth
    // adjustment must pick the immediate win even though 1 sorts first.
    let mut board = Board::new();
    occupy(&mut board, &[4, 5], Player::X);
    occupy(&mut board, &[0, 8], Player::O);

    let pos = Minimax::new().choose_move(&board, Player::X).unwrap();
    assert_eq!(pos, 3);
}

#[test]
fn test_no_legal_move_on_decided_board() {
    // X already won; empty squares remain but the game is over.
    let mut board = Board::new();
    occupy(&mut board, &[0, 1, 2], Player::X);
    occupy(&mut board, &[3, 4], Player::O);

    let err = Minimax::new().choose_move(&board, Player::O).unwrap_err();
    assert_eq!(err, GameError::NoLegalMove);
}

#[test]
fn test_no_legal_move_on_full_board() {
    // Full drawn board.
    let mut board = Board::new();
    occupy(&mut board, &[0, 2, 4, 5, 7], Player::X);
    occupy(&mut board, &[1, 3, 6, 8], Player::O);
    assert!(board.is_full());

    let err = Minimax::new().choose_move(&board, Player::X).unwrap_err();
    assert_eq!(err, GameError::NoLegalMove);
}
