//! Beatable AI mixing heuristic play with randomness.

use super::Strategy;
use crate::game::{Board, GameError, Player, rules};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Default probability of attempting a smart move.
pub const DEFAULT_SMART_CHANCE: f64 = 0.3;

/// The two ways an easy move can be picked, decided by a single draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MovePlan {
    /// Win if possible, else block, else fall through to random.
    Smart,
    /// Uniform choice among legal moves.
    Random,
}

/// Beatable-but-nontrivial opponent.
///
/// With probability `smart_chance` it looks for an immediate win, then an
/// immediate block; otherwise (or when neither exists) it plays a uniformly
/// random legal move. The randomness source is injected so tests can fix a
/// seed.
#[derive(Debug)]
pub struct EasyAi<R = StdRng> {
    rng: R,
    smart_chance: f64,
}

impl EasyAi<StdRng> {
    /// Creates an easy AI seeded from system entropy.
    pub fn new(smart_chance: f64) -> Self {
        Self::with_rng(StdRng::from_entropy(), smart_chance)
    }

    /// Creates an easy AI with a fixed seed, for reproducible play.
    pub fn seeded(seed: u64, smart_chance: f64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), smart_chance)
    }
}

impl Default for EasyAi<StdRng> {
    fn default() -> Self {
        Self::new(DEFAULT_SMART_CHANCE)
    }
}

impl<R: Rng> EasyAi<R> {
    /// Uses the supplied randomness source; `smart_chance` is clamped to
    /// the [0, 1] probability range.
    pub fn with_rng(rng: R, smart_chance: f64) -> Self {
        Self {
            rng,
            smart_chance: smart_chance.clamp(0.0, 1.0),
        }
    }

    fn draw_plan(&mut self) -> MovePlan {
        if self.rng.gen_bool(self.smart_chance) {
            MovePlan::Smart
        } else {
            MovePlan::Random
        }
    }
}

/// Finds a move that immediately wins for `player`.
///
/// Probes legal moves in ascending order, so ties resolve to the lowest
/// index.
pub fn winning_move(board: &Board, player: Player) -> Option<usize> {
    board.legal_moves().into_iter().find(|&pos| {
        board
            .with_move(pos, player)
            .is_some_and(|next| rules::check_winner(&next) == Some(player))
    })
}

impl<R: Rng + Send> Strategy for EasyAi<R> {
    fn choose_move(&mut self, board: &Board, mark: Player) -> Result<usize, GameError> {
        let legal = board.legal_moves();
        if legal.is_empty() || rules::evaluate(board).is_terminal() {
            return Err(GameError::NoLegalMove);
        }

        let plan = self.draw_plan();
        if plan == MovePlan::Smart {
            if let Some(pos) = winning_move(board, mark) {
                debug!(position = pos, "easy AI takes winning move");
                return Ok(pos);
            }
            if let Some(pos) = winning_move(board, mark.opponent()) {
                debug!(position = pos, "easy AI blocks opponent");
                return Ok(pos);
            }
        }

        let pos = legal[self.rng.gen_range(0..legal.len())];
        debug!(position = pos, ?plan, "easy AI plays random move");
        Ok(pos)
    }

    fn name(&self) -> &'static str {
        "Easy"
    }
}
