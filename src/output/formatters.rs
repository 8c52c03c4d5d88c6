//! Formatting utilities for terminal output

use crate::core::{GuessFeedback, LetterState};
use crate::game::{GameSession, GameStatus};
use colored::{ColoredString, Colorize};

/// One letter as a colored tile, e.g. " A " on green
#[must_use]
pub fn colored_tile(letter: char, state: LetterState) -> ColoredString {
    let tile = format!(" {letter} ").bold();
    match state {
        LetterState::Correct => tile.black().on_green(),
        LetterState::Present => tile.black().on_yellow(),
        LetterState::Absent => tile.white().on_bright_black(),
    }
}

/// A whole guess as a row of colored tiles
#[must_use]
pub fn colored_row(feedback: &GuessFeedback) -> String {
    feedback
        .letters()
        .map(|(letter, state)| colored_tile(letter, state).to_string())
        .collect()
}

/// Spoiler-free result grid, e.g. "Wordle 3/6" followed by emoji rows
#[must_use]
pub fn share_grid(session: &GameSession) -> String {
    let score = match session.status() {
        GameStatus::Won => session.guesses_used().to_string(),
        GameStatus::Lost | GameStatus::Active => "X".to_string(),
    };

    let mut grid = format!("Wordle {score}/{}\n", session.max_guesses());
    for feedback in session.history() {
        grid.push('\n');
        grid.push_str(&feedback.to_emoji());
    }
    grid
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_row_keeps_letters_in_order() {
        colored::control::set_override(false);
        let mut session = GameSession::new("CRANE", 6, 5);
        let feedback = session.submit_guess("SLATE").unwrap();
        assert_eq!(colored_row(&feedback), " S  L  A  T  E ");
    }

    #[test]
    fn share_grid_for_win() {
        let mut session = GameSession::new("CRANE", 6, 5);
        session.submit_guess("SLATE").unwrap();
        session.submit_guess("CRANE").unwrap();
        assert_eq!(share_grid(&session), "Wordle 2/6\n\n⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_grid_for_loss() {
        let mut session = GameSession::new("CRANE", 1, 5);
        session.submit_guess("SLATE").unwrap();
        assert!(share_grid(&session).starts_with("Wordle X/1"));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
