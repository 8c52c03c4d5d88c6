//! A single round of Wordle
//!
//! The session owns the secret and moves through an explicit state machine:
//!
//! ```text
//! Active --guess == secret------------------> Won
//! Active --miss, guesses used == max--------> Lost
//! Active --miss, guesses used <  max--------> Active
//! ```
//!
//! `Won` and `Lost` are terminal. A new round is a new session.

use super::GuessError;
use crate::config::GameConfig;
use crate::core::{GuessFeedback, evaluate};

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// One game: a fixed secret, a guess budget and the guesses made so far
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: String,
    max_guesses: usize,
    word_length: usize,
    history: Vec<GuessFeedback>,
    status: GameStatus,
}

impl GameSession {
    /// Start a game for `secret`
    ///
    /// The secret is uppercased. A session with `max_guesses == 0` starts out
    /// `Lost`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::{GameSession, GameStatus};
    ///
    /// let mut session = GameSession::new("crane", 6, 5);
    /// let feedback = session.submit_guess("slate").unwrap();
    /// assert_eq!(feedback.guess(), "SLATE");
    /// assert_eq!(session.guesses_used(), 1);
    /// assert_eq!(session.status(), GameStatus::Active);
    ///
    /// session.submit_guess("CRANE").unwrap();
    /// assert!(session.is_win());
    /// ```
    #[must_use]
    pub fn new(secret: &str, max_guesses: usize, word_length: usize) -> Self {
        let status = if max_guesses == 0 {
            GameStatus::Lost
        } else {
            GameStatus::Active
        };

        Self {
            secret: secret.to_uppercase(),
            max_guesses,
            word_length,
            history: Vec::with_capacity(max_guesses),
            status,
        }
    }

    #[must_use]
    pub fn with_config(secret: &str, config: &GameConfig) -> Self {
        Self::new(secret, config.max_guesses, config.word_length)
    }

    /// Score a guess and advance the state machine
    ///
    /// # Errors
    ///
    /// - [`GuessError::GameAlreadyOver`] if the session is `Won` or `Lost`
    /// - [`GuessError::WrongLength`] if the uppercased guess does not have the
    ///   configured number of letters
    /// - [`GuessError::SecretLength`] if the session was built with a secret
    ///   of another length; such a session never accepts a guess
    ///
    /// A rejected guess does not consume an attempt.
    pub fn submit_guess(&mut self, raw_guess: &str) -> Result<GuessFeedback, GuessError> {
        if self.status.is_terminal() {
            return Err(GuessError::GameAlreadyOver);
        }

        let guess = raw_guess.to_uppercase();
        let actual = guess.chars().count();
        if actual != self.word_length {
            return Err(GuessError::WrongLength {
                expected: self.word_length,
                actual,
            });
        }

        let secret_length = self.secret.chars().count();
        if secret_length != self.word_length {
            tracing::warn!(
                secret_length,
                word_length = self.word_length,
                "secret does not fit the session's word length"
            );
            return Err(GuessError::SecretLength {
                expected: self.word_length,
                actual: secret_length,
            });
        }

        let states = evaluate(&self.secret, &guess);
        let solved = guess == self.secret;
        let feedback = GuessFeedback::new(guess, states);
        self.history.push(feedback.clone());

        self.status = if solved {
            GameStatus::Won
        } else if self.history.len() >= self.max_guesses {
            GameStatus::Lost
        } else {
            GameStatus::Active
        };

        tracing::debug!(
            guess = feedback.guess(),
            pattern = %feedback.to_symbols(),
            used = self.history.len(),
            status = ?self.status,
            "guess scored"
        );

        Ok(feedback)
    }

    /// The secret word
    ///
    /// Shells should only disclose it once the game is over; see
    /// [`GameSession::revealed_secret`].
    #[inline]
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// The secret, but only once the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&str> {
        self.status.is_terminal().then_some(self.secret.as_str())
    }

    #[inline]
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses.saturating_sub(self.history.len())
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.status == GameStatus::Won
    }

    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Accepted guesses in order
    #[must_use]
    pub fn history(&self) -> &[GuessFeedback] {
        &self.history
    }
}
