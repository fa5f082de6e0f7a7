//! Game orchestration between players.

use super::players::Player;
use crate::game::{GameError, GameStatus, Mark};
use crate::scoreboard::ScoreSummary;
use crate::session::GameSession;
use anyhow::Result;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A computer player is choosing its move.
    Thinking {
        /// Player display name.
        player: String,
    },
    /// Move was made.
    MoveMade {
        /// Player display name.
        player: String,
        /// Board index of the move.
        position: usize,
    },
    /// A move was rejected; the player is re-prompted.
    Rejected {
        /// Player display name.
        player: String,
        /// Why the move was rejected.
        reason: String,
    },
    /// Game ended; the session has recorded the result.
    GameOver {
        /// Winner display name, `None` on a draw.
        winner: Option<String>,
        /// Scoreboard snapshot after recording.
        summary: ScoreSummary,
    },
}

/// Drives one game between two players over the shared session.
pub struct Orchestrator {
    session: Arc<Mutex<GameSession>>,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        session: Arc<Mutex<GameSession>>,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session,
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Runs the game loop until the session reaches a terminal status.
    pub async fn run(&mut self) -> Result<()> {
        info!("starting game orchestration");

        loop {
            // Snapshot under the lock; never hold it across an await.
            let (board, status, summary) = {
                let session = self.session.lock().unwrap();
                (session.board().clone(), session.status(), session.summary())
            };

            match status {
                GameStatus::Won { winner, .. } => {
                    let name = self.player_for(winner).name().to_string();
                    info!(winner = %name, "game over");
                    self.event_tx.send(GameEvent::GameOver {
                        winner: Some(name),
                        summary,
                    })?;
                    return Ok(());
                }
                GameStatus::Draw => {
                    info!("game over: draw");
                    self.event_tx
                        .send(GameEvent::GameOver { winner: None, summary })?;
                    return Ok(());
                }
                GameStatus::InProgress => {}
            }

            let mark = board.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let name = player.name().to_string();

            if player.is_computer() {
                self.event_tx.send(GameEvent::Thinking {
                    player: name.clone(),
                })?;
            }

            debug!(player = %name, ?mark, "waiting for move");
            let position = player.get_move(&board, mark).await?;

            let applied = self.session.lock().unwrap().apply_move(position);
            match applied {
                Ok(_) => {
                    self.event_tx.send(GameEvent::MoveMade {
                        player: name,
                        position,
                    })?;
                }
                Err(err @ GameError::InvalidMove(_)) => {
                    warn!(player = %name, position, %err, "move rejected");
                    self.event_tx.send(GameEvent::Rejected {
                        player: name,
                        reason: err.to_string(),
                    })?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn player_for(&self, mark: Mark) -> &dyn Player {
        match mark {
            Mark::X => self.player_x.as_ref(),
            Mark::O => self.player_o.as_ref(),
        }
    }
}
