//! Frame rendering for the TUI.

use super::app::App;
use crate::game::{Board, GameStatus, Player, Position, Square};
use crate::scoreboard::ScoreSummary;
use crate::session::GameSession;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Draws the full frame: title, board, scoreboard, status line.
pub fn draw(f: &mut Frame, app: &App) {
    let session = app.session();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(13),
            Constraint::Length(3),
        ])
        .split(f.area());

    draw_title(f, chunks[0], &session);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(42), Constraint::Length(30)])
        .split(chunks[1]);

    draw_board(f, body[0], &session);
    draw_scoreboard(f, body[1], &session.summary());
    draw_status(f, chunks[2], app.status_message());
}

fn draw_title(f: &mut Frame, area: Rect, session: &GameSession) {
    let title = Paragraph::new(format!("Tic Tac Toe - {} Mode", session.mode()))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn draw_status(f: &mut Frame, area: Rect, message: &str) {
    let status = Paragraph::new(message)
        .alignment(Alignment::Center)
        .block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(status, area);
}

fn draw_scoreboard(f: &mut Frame, area: Rect, summary: &ScoreSummary) {
    let text = format!(
        "{}: {}\n{}: {}\nDraws: {}\n\nGames Played: {}",
        summary.player_one_name,
        summary.player_one_wins,
        summary.player_two_name,
        summary.player_two_wins,
        summary.draws,
        summary.games_played,
    );
    let panel = Paragraph::new(text)
        .block(Block::default().title("Scoreboard").borders(Borders::ALL));
    f.render_widget(panel, area);
}

/// Renders the board grid, highlighting the winning line when there is one.
fn draw_board(f: &mut Frame, area: Rect, session: &GameSession) {
    let board = session.board();
    let winning_line: Option<[Position; 3]> = match session.status() {
        GameStatus::Won { line, .. } => Some(line),
        _ => None,
    };

    let board_area = center_rect(area, 40, 13);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], board, 0, winning_line);
    render_separator(f, rows[1]);
    render_row(f, rows[2], board, 3, winning_line);
    render_separator(f, rows[3]);
    render_row(f, rows[4], board, 6, winning_line);
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    start: usize,
    winning_line: Option<[Position; 3]>,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(f, cols[0], board, start, winning_line);
    render_vertical_sep(f, cols[1]);
    render_square(f, cols[2], board, start + 1, winning_line);
    render_vertical_sep(f, cols[3]);
    render_square(f, cols[4], board, start + 2, winning_line);
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    pos: usize,
    winning_line: Option<[Position; 3]>,
) {
    let highlighted = winning_line
        .is_some_and(|line| line.iter().any(|p| p.to_index() == pos));

    let (text, style) = match board.get(pos) {
        Some(Square::Occupied(Player::X)) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Square::Occupied(Player::O)) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ => (
            format!("{}", pos + 1),
            Style::default().fg(Color::DarkGray),
        ),
    };
    let style = if highlighted {
        style.bg(Color::Green)
    } else {
        style
    };

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
