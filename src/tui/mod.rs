//! Terminal UI front end.
//!
//! The UI loop owns the terminal and the keyboard; each game runs in an
//! orchestrator task that talks to the session behind a mutex and reports
//! progress over an event channel.

mod app;
mod orchestrator;
mod players;
mod ui;

use crate::config::GameConfig;
use crate::session::{GameMode, GameSession};
use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use orchestrator::{GameEvent, Orchestrator};
use players::{ComputerPlayer, HumanPlayer, Player, SharedKeys};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::{error, info};

/// Runs the TUI until the player quits.
pub async fn run(mode: Option<GameMode>, config: &GameConfig) -> Result<()> {
    // Log to a file so tracing output does not corrupt the alternate screen.
    let log_file = std::fs::File::create("tictactoe_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("starting TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let session = Arc::new(Mutex::new(GameSession::new(
        mode.unwrap_or(*config.default_mode()),
    )));
    let res = run_app(&mut terminal, session, config).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    res
}

/// One running game: its orchestrator task and channels.
struct RunningGame {
    handle: tokio::task::JoinHandle<()>,
    events: mpsc::UnboundedReceiver<GameEvent>,
    keys: mpsc::UnboundedSender<KeyCode>,
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    session: Arc<Mutex<GameSession>>,
    config: &GameConfig,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    let mut app = App::new(session.clone());
    let mut game = start_game(&session, config);

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Drain events from the orchestrator.
        while let Ok(event) = game.events.try_recv() {
            app.handle_event(event);
        }

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => {
                        game.handle.abort();
                        return Ok(());
                    }
                    KeyCode::Char('n') => {
                        // Abandoned games are simply not recorded.
                        game.handle.abort();
                        session.lock().unwrap().new_game();
                        app.begin_game();
                        game = start_game(&session, config);
                    }
                    KeyCode::Char('m') => {
                        if app.game_over() {
                            let next = {
                                let mut session = session.lock().unwrap();
                                let next = session.mode().next();
                                session.set_mode(next);
                                next
                            };
                            app.set_status(format!(
                                "Mode: {}. Scores carry over; 'r' resets them, 'n' starts a game.",
                                next
                            ));
                        } else {
                            app.set_status(
                                "Finish the game before changing mode ('n' abandons it).",
                            );
                        }
                    }
                    KeyCode::Char('r') => {
                        session.lock().unwrap().reset_scores();
                        app.set_status("Scores have been reset.");
                    }
                    code => {
                        // Everything else goes to whichever human is waiting.
                        let _ = game.keys.send(code);
                    }
                }
            }
        }
    }
}

/// Builds the players for the current mode and spawns one game.
fn start_game(session: &Arc<Mutex<GameSession>>, config: &GameConfig) -> RunningGame {
    let (key_tx, key_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let keys = SharedKeys::new(key_rx);

    let mode = session.lock().unwrap().mode();
    let (player_x, player_o): (Box<dyn Player>, Box<dyn Player>) = match mode.difficulty() {
        Some(difficulty) => (
            Box::new(HumanPlayer::new("You", keys.clone())),
            Box::new(ComputerPlayer::new(
                "Computer",
                difficulty.strategy(*config.smart_chance()),
                *config.thinking_delay_ms(),
            )),
        ),
        None => (
            Box::new(HumanPlayer::new("Player 1", keys.clone())),
            Box::new(HumanPlayer::new("Player 2", keys)),
        ),
    };

    let mut orchestrator = Orchestrator::new(session.clone(), player_x, player_o, event_tx);
    let handle = tokio::spawn(async move {
        if let Err(e) = orchestrator.run().await {
            error!(error = %e, "orchestrator error");
        }
    });

    RunningGame {
        handle,
        events: event_rx,
        keys: key_tx,
    }
}
