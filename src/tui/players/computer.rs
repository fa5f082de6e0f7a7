//! Computer player wrapping a core strategy.

use super::Player;
use crate::ai::Strategy;
use crate::game::{Board, Mark};
use anyhow::Result;
use std::time::Duration;
use tracing::debug;

/// Computer player driving one of the AI strategies.
///
/// The strategy works on the board snapshot it is handed; the orchestrator
/// applies the returned move afterwards.
pub struct ComputerPlayer {
    name: String,
    strategy: Box<dyn Strategy>,
    thinking_delay: Duration,
}

impl ComputerPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>, delay_ms: u64) -> Self {
        Self {
            name: name.into(),
            strategy,
            thinking_delay: Duration::from_millis(delay_ms),
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    async fn get_move(&mut self, board: &Board, mark: Mark) -> Result<usize> {
        // Small pause so moves stay readable in the UI.
        tokio::time::sleep(self.thinking_delay).await;

        let pos = self.strategy.choose_move(board, mark)?;
        debug!(player = %self.name, position = pos, "computer chose move");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_computer(&self) -> bool {
        true
    }
}
