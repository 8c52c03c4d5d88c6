//! Wordle - CLI
//!
//! Play Wordle in the terminal, either in a full-screen TUI or line by line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_game::{
    commands::{run_simple, score_guess},
    config::Config,
    output::print_score_result,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Play Wordle in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line [env: WORDLE_WORDS_FILE] [default: words.txt]
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Letters per word [env: WORDLE_WORD_LENGTH] [default: 5]
    #[arg(short = 'l', long, global = true)]
    word_length: Option<usize>,

    /// Guesses per game [env: WORDLE_MAX_GUESSES] [default: 6]
    #[arg(short = 'g', long, global = true)]
    max_guesses: Option<usize>,

    /// Seed for reproducible secrets [env: WORDLE_SEED]
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line by line, no TUI)
    Simple,

    /// Score a single guess against a secret
    Score {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },
}

impl Cli {
    /// Layer command-line flags over environment configuration
    fn config(&self) -> Config {
        let mut config = Config::from_env();
        if let Some(path) = &self.words {
            config.words_path.clone_from(path);
        }
        if let Some(length) = self.word_length {
            config.game.word_length = length.max(1);
        }
        if let Some(guesses) = self.max_guesses {
            config.game.max_guesses = guesses.max(1);
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    tracing::debug!(?config, "configuration resolved");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
    }
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_guess(secret, guess)?;
    print_score_result(&result);
    Ok(())
}

fn run_simple_command(config: &Config) -> Result<()> {
    let words = config.load_words()?;
    let mut rng = config.rng();
    run_simple(&words, &config.game, &mut rng)?;
    Ok(())
}

fn run_play_command(config: &Config) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let words = config.load_words()?;
    let app = App::new(words, config.game, config.rng())?;
    run_tui(app)
}
