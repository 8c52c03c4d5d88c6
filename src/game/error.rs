//! Guess rejection errors
//!
//! All of these are recoverable: the shell shows the message and lets the
//! player try again (or start a new game).

/// Rejections raised by [`GameSession::submit_guess`](super::GameSession::submit_guess)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    /// The session already reached `Won` or `Lost`
    #[error("Game is already over.")]
    GameAlreadyOver,

    #[error("Guess must be {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// The session was built with a secret that does not fit its word length
    #[error("Secret word has {actual} letters, expected {expected}")]
    SecretLength { expected: usize, actual: usize },
}

/// Rejections raised while checking raw player input before it reaches the session
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessRejection {
    #[error("Please enter a {expected}-letter word.")]
    WrongLength { expected: usize, actual: usize },

    #[error("Letters only, please.")]
    NotAlphabetic,

    #[error("Word not in list.")]
    NotInWordList(String),

    #[error(transparent)]
    Game(#[from] GuessError),
}
