//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::game::{Board, Mark};
use anyhow::Result;
use crossterm::event::KeyCode;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move (board index 0-8) for `mark` on the board snapshot.
    async fn get_move(&mut self, board: &Board, mark: Mark) -> Result<usize>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// True for computer players; used to announce thinking in the UI.
    fn is_computer(&self) -> bool {
        false
    }
}

/// Key receiver shared by human players taking turns on one keyboard.
///
/// Turn-based play means at most one player awaits a key at a time, so the
/// lock is never contended.
#[derive(Clone)]
pub struct SharedKeys {
    rx: Arc<Mutex<mpsc::UnboundedReceiver<KeyCode>>>,
}

impl SharedKeys {
    /// Wraps a key channel receiver for sharing between players.
    pub fn new(rx: mpsc::UnboundedReceiver<KeyCode>) -> Self {
        Self {
            rx: Arc::new(Mutex::new(rx)),
        }
    }

    /// Waits for the next key; `None` when the channel closes.
    pub async fn next(&self) -> Option<KeyCode> {
        self.rx.lock().await.recv().await
    }
}
