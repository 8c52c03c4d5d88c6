//! TUI rendering with ratatui
//!
//! Guess grid, on-screen keyboard, messages and status bar.

use super::app::{App, MessageStyle};
use crate::core::LetterState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Grid
            Constraint::Percentage(45), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Tile colors, matching the classic green/yellow/gray scheme
const fn state_color(state: LetterState) -> Color {
    match state {
        LetterState::Correct => Color::Rgb(0x6a, 0xaa, 0x64),
        LetterState::Present => Color::Rgb(0xc9, 0xb4, 0x58),
        LetterState::Absent => Color::Rgb(0x3a, 0x3a, 0x3c),
    }
}

fn tile(letter: char, state: Option<LetterState>) -> Span<'static> {
    let style = match state {
        Some(state) => Style::default()
            .fg(Color::White)
            .bg(state_color(state))
            .add_modifier(Modifier::BOLD),
        None => Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(0x11, 0x11, 0x11))
            .add_modifier(Modifier::BOLD),
    };
    Span::styled(format!(" {letter} "), style)
}

fn grid_lines(app: &App) -> Vec<Line<'static>> {
    let session = &app.session;
    let word_length = session.word_length();
    let mut lines = Vec::with_capacity(session.max_guesses() * 2);

    for row in 0..session.max_guesses() {
        let mut spans = Vec::with_capacity(word_length * 2);
        if let Some(feedback) = session.history().get(row) {
            for (letter, state) in feedback.letters() {
                spans.push(tile(letter, Some(state)));
                spans.push(Span::raw(" "));
            }
        } else if row == session.guesses_used() && !session.is_game_over() {
            let mut typed = app.input_buffer.chars();
            for _ in 0..word_length {
                spans.push(tile(typed.next().unwrap_or('_'), None));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..word_length {
                spans.push(tile('·', None));
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let grid = Paragraph::new(grid_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Guesses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(grid, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.letter_hints();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|key| {
                    let state = hints[(key as u8 - b'A') as usize];
                    let style = match state {
                        Some(state) => Style::default().fg(Color::White).bg(state_color(state)),
                        None => Style::default().fg(Color::Gray),
                    };
                    Span::styled(key.to_string(), style)
                })
                .flat_map(|key| [key, Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = if app.session.is_win() {
        (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            Color::Green,
        )
    } else if app.session.is_game_over() {
        (" Game over | Press 'n' for new game or 'q' to quit ", Color::Red)
    } else {
        (" Type your guess | Enter to submit ", Color::Yellow)
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let guesses_text = format!("Guesses left: {}", app.session.remaining_guesses());
    let guesses = Paragraph::new(guesses_text).alignment(Alignment::Center);
    f.render_widget(guesses, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let streak_text = format!(
        "Streak: {} (best {})",
        app.stats.current_streak, app.stats.best_streak
    );
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help_text = if app.session.is_game_over() {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | ^N: New Game"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
