//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a guess, get a colored row back.

use crate::config::GameConfig;
use crate::game::{GameSession, Statistics, submit_checked};
use crate::output::{write_feedback_row, write_outcome, write_statistics};
use crate::wordlists::WordSource;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What the player asked for after a game ended or was abandoned
enum Next {
    NewGame,
    Quit,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the word
/// list is empty.
pub fn run_simple<R: Rng + ?Sized>(
    words: &WordSource,
    config: &GameConfig,
    rng: &mut R,
) -> Result<Statistics> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(words, config, rng, stdin.lock(), stdout.lock())
}

/// Run the game loop over arbitrary input and output streams
///
/// Ends on `quit`, on declining a rematch, or at end of input. Returns the
/// statistics gathered over all finished games.
///
/// # Errors
///
/// Returns an error if reading or writing fails or if the word list is empty.
pub fn run_simple_with<R, I, W>(
    words: &WordSource,
    config: &GameConfig,
    rng: &mut R,
    mut input: I,
    mut out: W,
) -> Result<Statistics>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════╗")?;
    writeln!(out, "║          Wordle - Simple Mode        ║")?;
    writeln!(out, "╚══════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {}-letter word in {} tries.",
        config.word_length, config.max_guesses
    )?;
    writeln!(out, "Commands: 'new' for a new game, 'quit' to exit\n")?;

    let mut stats = Statistics::default();

    loop {
        let secret = words
            .random_word_with(rng)
            .context("word list is empty, cannot pick a secret")?;
        let session = GameSession::with_config(secret, config);

        match play_round(session, words, &mut stats, &mut input, &mut out)? {
            Next::NewGame => writeln!(out, "\n🔄 New game started!\n")?,
            Next::Quit => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(stats);
            }
        }
    }
}

fn play_round<I: BufRead, W: Write>(
    mut session: GameSession,
    words: &WordSource,
    stats: &mut Statistics,
    input: &mut I,
    out: &mut W,
) -> Result<Next> {
    loop {
        let prompt = format!(
            "Guess {}/{}",
            session.guesses_used() + 1,
            session.max_guesses()
        );
        let Some(line) = read_input(input, out, &prompt)? else {
            return Ok(Next::Quit);
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(Next::Quit),
            "new" => return Ok(Next::NewGame),
            _ => {}
        }

        match submit_checked(&mut session, words, &line) {
            Ok(feedback) => {
                write_feedback_row(out, &feedback, &session)?;
                write_outcome(out, &session)?;
            }
            Err(err) => {
                writeln!(out, "{} {err}\n", "❌".red())?;
                continue;
            }
        }

        if session.is_game_over() {
            stats.record(&session);
            write_statistics(out, stats, session.max_guesses())?;

            let answer = read_input(input, out, "\nPlay again? (yes/no)")?;
            return Ok(match answer.as_deref().map(str::to_lowercase).as_deref() {
                Some("yes" | "y") => Next::NewGame,
                _ => Next::Quit,
            });
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_input<I: BufRead, W: Write>(
    input: &mut I,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
