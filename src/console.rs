//! Plain console front end.
//!
//! Drives the core through prompts and line input: mode selection, the move
//! loop, and the post-game menu (play again, change mode, reset scores,
//! quit).

use crate::ai::Strategy;
use crate::config::GameConfig;
use crate::game::{Board, GameError, GameStatus, Mark};
use crate::scoreboard::ScoreSummary;
use crate::session::{GameMode, GameSession};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Runs the console game loop until the player quits.
pub fn run(mode: Option<GameMode>, config: &GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), config.clone());
    console.run(mode)
}

/// Console driver over any line-based input and output.
struct Console<R, W> {
    input: R,
    out: W,
    config: GameConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn new(input: R, out: W, config: GameConfig) -> Self {
        Self { input, out, config }
    }

    fn run(&mut self, mode: Option<GameMode>) -> Result<()> {
        writeln!(self.out, "\n{}", "=".repeat(40))?;
        writeln!(self.out, "       WELCOME TO TIC TAC TOE")?;
        writeln!(self.out, "{}", "=".repeat(40))?;

        let mode = match mode {
            Some(mode) => mode,
            None => self.select_mode()?,
        };
        let mut session = GameSession::new(mode);

        loop {
            self.play_game(&mut session)?;
            self.show_summary(&session.summary())?;
            if !self.post_game_menu(&mut session)? {
                return Ok(());
            }
        }
    }

    /// Plays one game to completion and lets the session record it.
    fn play_game(&mut self, session: &mut GameSession) -> Result<()> {
        session.new_game();
        let smart_chance = *self.config.smart_chance();
        let mut strategy: Option<Box<dyn Strategy>> = session
            .mode()
            .difficulty()
            .map(|difficulty| difficulty.strategy(smart_chance));

        writeln!(self.out, "\n=== TIC TAC TOE ({} Mode) ===", session.mode())?;
        match session.mode() {
            GameMode::TwoPlayer => writeln!(self.out, "Player 1 is X, Player 2 is O")?,
            GameMode::Easy | GameMode::Hard => writeln!(self.out, "You are X, Computer is O")?,
        }
        info!(mode = %session.mode(), "game started");

        loop {
            self.show_board(session.board())?;

            let to_move = session.to_move();
            let status = match strategy.as_mut().filter(|_| to_move == Mark::O) {
                Some(strategy) => {
                    writeln!(self.out, "Computer is thinking...")?;
                    let pos = strategy.choose_move(session.board(), to_move)?;
                    let status = session.apply_move(pos)?;
                    writeln!(self.out, "Computer plays position {}", pos + 1)?;
                    status
                }
                None => {
                    let name = turn_label(session.mode(), to_move);
                    self.prompt_move(session, &name)?
                }
            };

            match status {
                GameStatus::InProgress => continue,
                GameStatus::Won { winner, .. } => {
                    self.show_board(session.board())?;
                    match session.mode() {
                        GameMode::TwoPlayer => {
                            let name = turn_label(session.mode(), winner);
                            writeln!(self.out, "{} wins!", name)?;
                        }
                        GameMode::Easy | GameMode::Hard => {
                            if winner == Mark::X {
                                writeln!(self.out, "Congratulations! You win!")?;
                            } else {
                                writeln!(self.out, "Computer wins! Better luck next time.")?;
                            }
                        }
                    }
                    return Ok(());
                }
                GameStatus::Draw => {
                    self.show_board(session.board())?;
                    writeln!(self.out, "It's a draw!")?;
                    return Ok(());
                }
            }
        }
    }

    /// Prompts until a legal move is applied; returns the resulting status.
    fn prompt_move(&mut self, session: &mut GameSession, name: &str) -> Result<GameStatus> {
        loop {
            write!(self.out, "{}, enter your move (1-9): ", name)?;
            self.out.flush()?;
            let line = self.read_line()?;

            let Some(pos) = parse_position(&line) else {
                writeln!(self.out, "Please enter a number between 1 and 9.")?;
                continue;
            };

            match session.apply_move(pos) {
                Ok(status) => return Ok(status),
                Err(err @ GameError::InvalidMove(_)) => {
                    debug!(pos, %err, "rejected move");
                    writeln!(self.out, "Invalid move. Position is either taken or out of range.")?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn select_mode(&mut self) -> Result<GameMode> {
        writeln!(self.out, "\n=== SELECT GAME MODE ===")?;
        writeln!(self.out, "1. Easy Mode (vs Computer - beatable)")?;
        writeln!(self.out, "2. Hard Mode (vs Computer - unbeatable)")?;
        writeln!(self.out, "3. Two Player Mode")?;

        loop {
            write!(self.out, "\nEnter your choice (1-3): ")?;
            self.out.flush()?;
            match self.read_line()?.trim() {
                "1" => return Ok(GameMode::Easy),
                "2" => return Ok(GameMode::Hard),
                "3" => return Ok(GameMode::TwoPlayer),
                _ => writeln!(self.out, "Please enter 1, 2, or 3.")?,
            }
        }
    }

    /// Post-game menu; returns `false` when the player quits.
    fn post_game_menu(&mut self, session: &mut GameSession) -> Result<bool> {
        loop {
            writeln!(self.out, "\nWhat would you like to do?")?;
            writeln!(self.out, "1. Play again (same mode)")?;
            writeln!(self.out, "2. Change game mode")?;
            writeln!(self.out, "3. Reset scores")?;
            writeln!(self.out, "4. Quit")?;
            write!(self.out, "\nEnter your choice (1-4): ")?;
            self.out.flush()?;

            match self.read_line()?.trim() {
                "1" => return Ok(true),
                "2" => {
                    let mode = self.select_mode()?;
                    if mode != session.mode() {
                        if session.summary().games_played > 1
                            && self.confirm("\nGame mode changed. Reset scores? (y/n): ")?
                        {
                            session.reset_scores();
                            writeln!(self.out, "Scores have been reset!")?;
                        }
                        session.set_mode(mode);
                    }
                    return Ok(true);
                }
                "3" => {
                    session.reset_scores();
                    writeln!(self.out, "Scores have been reset!")?;
                    self.show_summary(&session.summary())?;
                }
                "4" => {
                    writeln!(self.out, "\n{}", "=".repeat(40))?;
                    writeln!(self.out, "        FINAL SCORES")?;
                    self.show_summary(&session.summary())?;
                    writeln!(self.out, "\nThanks for playing!")?;
                    return Ok(false);
                }
                _ => writeln!(self.out, "Please enter 1, 2, 3, or 4.")?,
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        Ok(self.read_line()?.trim().eq_ignore_ascii_case("y"))
    }

    fn show_board(&mut self, board: &Board) -> Result<()> {
        writeln!(self.out, "\n{}\n", board.display())?;
        Ok(())
    }

    fn show_summary(&mut self, summary: &ScoreSummary) -> Result<()> {
        writeln!(self.out, "\n{}", "=".repeat(40))?;
        writeln!(self.out, "            SCOREBOARD")?;
        writeln!(self.out, "{}", "=".repeat(40))?;
        writeln!(self.out, "  {}: {}", summary.player_one_name, summary.player_one_wins)?;
        writeln!(self.out, "  {}: {}", summary.player_two_name, summary.player_two_wins)?;
        writeln!(self.out, "  Draws: {}", summary.draws)?;
        writeln!(self.out, "  Games Played: {}", summary.games_played)?;
        writeln!(self.out, "{}", "=".repeat(40))?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            anyhow::bail!("input closed");
        }
        Ok(line)
    }
}

/// Prompt label for the side to move.
fn turn_label(mode: GameMode, mark: Mark) -> String {
    match (mode, mark) {
        (GameMode::TwoPlayer, Mark::X) => "Player 1 (X)".to_string(),
        (GameMode::TwoPlayer, Mark::O) => "Player 2 (O)".to_string(),
        (_, _) => "You".to_string(),
    }
}

/// Parses a player-facing 1-9 position into a board index.
fn parse_position(line: &str) -> Option<usize> {
    let num: usize = line.trim().parse().ok()?;
    (1..=9).contains(&num).then(|| num - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("1\n"), Some(0));
        assert_eq!(parse_position(" 9 "), Some(8));
        assert_eq!(parse_position("0"), None);
        assert_eq!(parse_position("10"), None);
        assert_eq!(parse_position("x"), None);
    }

    #[test]
    fn test_scripted_two_player_game() {
        // X takes the top row (1, 2, 3) while O plays 4 and 5, then quit.
        let script = "1\n4\n2\n5\n3\n4\n";
        let mut console = Console::new(
            Cursor::new(script.as_bytes()),
            Vec::new(),
            GameConfig::default(),
        );
        console.run(Some(GameMode::TwoPlayer)).unwrap();

        let output = String::from_utf8(console.out).unwrap();
        assert!(output.contains("Player 1 (X) wins!"));
        assert!(output.contains("Player 1: 1"));
        assert!(output.contains("Games Played: 1"));
        assert!(output.contains("Thanks for playing!"));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        // Occupied cell and garbage input before a valid draw-out; then quit.
        let script = "1\n1\nx\n2\n3\n5\n4\n6\n8\n7\n9\n4\n";
        let mut console = Console::new(
            Cursor::new(script.as_bytes()),
            Vec::new(),
            GameConfig::default(),
        );
        console.run(Some(GameMode::TwoPlayer)).unwrap();

        let output = String::from_utf8(console.out).unwrap();
        assert!(output.contains("Invalid move."));
        assert!(output.contains("Please enter a number between 1 and 9."));
    }
}
