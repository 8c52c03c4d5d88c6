//! Game and shell configuration
//!
//! Values are layered: built-in defaults, then environment variables, then
//! command-line flags (applied by the binary).

use crate::wordlists::{WordSource, loader};
use anyhow::{Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::path::PathBuf;

/// Default dictionary file, looked up relative to the working directory
pub const DEFAULT_WORDS_FILE: &str = "words.txt";

/// Limits for a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Letters per word, shared by dictionary loading and scoring
    pub word_length: usize,
    pub max_guesses: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            max_guesses: 6,
        }
    }
}

/// Everything the shell needs to start playing
#[derive(Debug, Clone)]
pub struct Config {
    pub words_path: PathBuf,
    pub game: GameConfig,
    /// Seed for secret selection; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_path: PathBuf::from(DEFAULT_WORDS_FILE),
            game: GameConfig::default(),
            seed: None,
        }
    }
}

impl Config {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `WORDLE_WORDS_FILE` - dictionary path (default: `words.txt`)
    /// - `WORDLE_WORD_LENGTH` - letters per word (default: 5)
    /// - `WORDLE_MAX_GUESSES` - guesses per game (default: 6)
    /// - `WORDLE_SEED` - seed for reproducible secrets (default: random)
    ///
    /// Unparsable values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("WORDLE_WORDS_FILE")
            && !path.trim().is_empty()
        {
            config.words_path = PathBuf::from(path);
        }
        if let Some(length) = read_env::<usize>("WORDLE_WORD_LENGTH") {
            config.game.word_length = length.max(1);
        }
        if let Some(guesses) = read_env::<usize>("WORDLE_MAX_GUESSES") {
            config.game.max_guesses = guesses.max(1);
        }
        if let Some(seed) = read_env::<u64>("WORDLE_SEED") {
            config.seed = Some(seed);
        }

        config
    }

    /// Random source for picking secrets
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Load the dictionary, substituting the built-in list when it is empty
    ///
    /// # Errors
    ///
    /// Returns an error if neither the dictionary file nor the built-in list
    /// holds any word of the configured length.
    pub fn load_words(&self) -> Result<WordSource> {
        let words = loader::load_from_file(&self.words_path, self.game.word_length);
        if !words.is_empty() {
            return Ok(words);
        }

        tracing::warn!(
            path = %self.words_path.display(),
            reason = words.load_diagnostic().unwrap_or("no usable words"),
            "dictionary unavailable, using built-in word list"
        );

        let fallback = WordSource::fallback(self.game.word_length);
        if fallback.is_empty() {
            bail!(
                "no {}-letter words available: {} is unusable and the built-in list has none",
                self.game.word_length,
                self.words_path.display()
            );
        }
        Ok(fallback)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
