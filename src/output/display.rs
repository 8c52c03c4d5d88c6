//! Display functions for games and command results

use super::formatters::{colored_row, create_progress_bar, share_grid};
use crate::commands::ScoreResult;
use crate::core::GuessFeedback;
use crate::game::{GameSession, GameStatus, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Write one scored guess: tiles plus the guess count
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_feedback_row<W: Write>(
    out: &mut W,
    feedback: &GuessFeedback,
    session: &GameSession,
) -> io::Result<()> {
    writeln!(
        out,
        "  {}   {}/{}",
        colored_row(feedback),
        session.guesses_used(),
        session.max_guesses()
    )
}

/// Write the end-of-game banner, revealing the secret
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_outcome<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    let Some(secret) = session.revealed_secret() else {
        return writeln!(
            out,
            "Guesses left: {}",
            session.remaining_guesses().to_string().bright_cyan()
        );
    };

    writeln!(out, "\n{}", "═".repeat(40).bright_cyan())?;
    match session.status() {
        GameStatus::Won => {
            let cheer = match session.guesses_used() {
                1 => "🏆 Hole in one!",
                2 => "⭐ Magnificent!",
                3 => "💫 Splendid!",
                4 => "✨ Great!",
                5 => "👍 Nice work!",
                _ => "😅 Phew!",
            };
            writeln!(out, "  {}", cheer.bright_yellow().bold())?;
            writeln!(
                out,
                "  {} {}",
                "You win! The word was:".bright_green().bold(),
                secret.bright_white().bold()
            )?;
        }
        GameStatus::Lost | GameStatus::Active => {
            writeln!(
                out,
                "  {} {}",
                "Out of guesses! The word was:".red().bold(),
                secret.bright_white().bold()
            )?;
        }
    }
    writeln!(out, "\n{}", share_grid(session))?;
    writeln!(out, "{}", "═".repeat(40).bright_cyan())
}

/// Write games played, win rate, streaks and the guess distribution
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_statistics<W: Write>(
    out: &mut W,
    stats: &Statistics,
    max_guesses: usize,
) -> io::Result<()> {
    writeln!(out, "\n📊 {}", "Statistics:".bright_cyan().bold())?;
    writeln!(out, "   Played:        {}", stats.total_games)?;
    writeln!(out, "   Win rate:      {:.0}%", stats.win_rate())?;
    writeln!(out, "   Streak:        {}", stats.current_streak)?;
    writeln!(out, "   Best streak:   {}", stats.best_streak)?;

    let most = (1..=max_guesses)
        .map(|n| stats.wins_in(n))
        .max()
        .unwrap_or(0);
    for guesses in 1..=max_guesses {
        let count = stats.wins_in(guesses);
        let bar = create_progress_bar(count as f64, most as f64, 20);
        writeln!(out, "   {guesses}: {} {count}", bar.green())?;
    }
    Ok(())
}

/// Print the result of scoring a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        result.secret.bright_yellow().bold(),
        result.feedback.guess().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", colored_row(&result.feedback));
    println!(
        "  {}  {}",
        result.feedback.to_emoji(),
        result.feedback.to_symbols()
    );
    if result.feedback.is_solved() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}
