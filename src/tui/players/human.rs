//! Human player that gets input from the keyboard.

use super::{Player, SharedKeys};
use crate::game::{Board, Mark};
use anyhow::Result;
use crossterm::event::KeyCode;

/// Human player fed by the UI's key channel.
pub struct HumanPlayer {
    name: String,
    keys: SharedKeys,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, keys: SharedKeys) -> Self {
        Self {
            name: name.into(),
            keys,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_move(&mut self, _board: &Board, _mark: Mark) -> Result<usize> {
        while let Some(key) = self.keys.next().await {
            if let KeyCode::Char(c) = key {
                if let Some(digit) = c.to_digit(10) {
                    let pos = digit as usize;
                    if (1..=9).contains(&pos) {
                        return Ok(pos - 1);
                    }
                }
            }
        }

        anyhow::bail!("input channel closed")
    }

    fn name(&self) -> &str {
        &self.name
    }
}
