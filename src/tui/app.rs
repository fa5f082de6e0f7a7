//! Application state and logic.

use super::orchestrator::GameEvent;
use crate::session::GameSession;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// UI-side state: the shared session plus presentation details.
pub struct App {
    session: Arc<Mutex<GameSession>>,
    status_message: String,
    game_over: bool,
}

impl App {
    /// Creates the application over a shared session.
    pub fn new(session: Arc<Mutex<GameSession>>) -> Self {
        Self {
            session,
            status_message: "Player X's turn. Press 1-9 to make a move.".to_string(),
            game_over: false,
        }
    }

    /// Snapshot of the session for rendering.
    pub fn session(&self) -> GameSession {
        self.session.lock().unwrap().clone()
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the current game has finished.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Replaces the status message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Resets presentation state for a fresh game.
    pub fn begin_game(&mut self) {
        self.game_over = false;
        self.status_message = "New game. Player X's turn. Press 1-9 to make a move.".to_string();
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "handling game event");

        match event {
            GameEvent::Thinking { player } => {
                self.status_message = format!("{} is thinking...", player);
            }
            GameEvent::MoveMade { player, position } => {
                self.status_message = format!("{} played position {}", player, position + 1);
            }
            GameEvent::Rejected { player, reason } => {
                self.status_message = format!("{}: {}. Try again.", player, reason);
            }
            GameEvent::GameOver { winner, .. } => {
                self.game_over = true;
                let outcome = match winner {
                    Some(name) => format!("{} wins!", name),
                    None => "It's a draw!".to_string(),
                };
                self.status_message = format!(
                    "{} 'n' new game, 'm' change mode, 'r' reset scores, 'q' quit.",
                    outcome
                );
            }
        }
    }
}
