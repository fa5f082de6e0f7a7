//! Optimal strategy via exhaustive game-tree search.

use super::Strategy;
use crate::game::{Board, GameError, GameStatus, Player, rules};
use tracing::{debug, instrument};

/// Score of a decided game before depth adjustment.
const WIN_SCORE: i32 = 10;

/// Unbeatable opponent.
///
/// Searches the full remaining game tree (at most 9 plies, so pruning is
/// unnecessary) over immutable board snapshots. Terminal scores are depth
/// adjusted - wins lose a point per ply, losses gain one - so the strategy
/// takes the fastest win and drags out unavoidable losses. Ties between
/// equally scored root moves resolve to the lowest position index, which
/// also makes the strategy fully deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

impl Minimax {
    /// Creates the minimax strategy.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for Minimax {
    #[instrument(skip(self))]
    fn choose_move(&mut self, board: &Board, mark: Player) -> Result<usize, GameError> {
        let legal = board.legal_moves();
        if legal.is_empty() || rules::evaluate(board).is_terminal() {
            return Err(GameError::NoLegalMove);
        }

        let mut best: Option<(usize, i32)> = None;
        for pos in legal {
            let Some(next) = board.with_move(pos, mark) else {
                continue;
            };
            let score = search(&next, mark, mark.opponent(), 1);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        let (pos, score) = best.ok_or(GameError::NoLegalMove)?;
        debug!(position = pos, score, "minimax selected move");
        Ok(pos)
    }

    fn name(&self) -> &'static str {
        "Hard"
    }
}

/// Scores `board` from `mark`'s perspective, with `to_move` next to play.
///
/// `depth` counts plies already simulated from the root position.
fn search(board: &Board, mark: Player, to_move: Player, depth: i32) -> i32 {
    match rules::evaluate(board) {
        GameStatus::Won { winner, .. } => {
            if winner == mark {
                WIN_SCORE - depth
            } else {
                depth - WIN_SCORE
            }
        }
        GameStatus::Draw => 0,
        GameStatus::InProgress => {
            let maximizing = to_move == mark;
            let mut best = if maximizing { i32::MIN } else { i32::MAX };
            for pos in board.legal_moves() {
                let Some(next) = board.with_move(pos, to_move) else {
                    continue;
                };
                let score = search(&next, mark, to_move.opponent(), depth + 1);
                best = if maximizing {
                    best.max(score)
                } else {
                    best.min(score)
                };
            }
            best
        }
    }
}
