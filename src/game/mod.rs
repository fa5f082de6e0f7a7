//! Board model, positions, rules, and core error types.

mod error;
mod position;
pub mod rules;
mod types;

pub use error::{GameError, InvalidMove};
pub use position::Position;
pub use rules::evaluate;
pub use types::{Board, GameStatus, Player, Square};

/// Alias for clarity in session management.
pub type Mark = Player;
