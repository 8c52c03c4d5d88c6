//! Checks raw player input before it reaches the session
//!
//! Order matters for the messages the player sees: game over first, then
//! length, then alphabet, then dictionary membership.

use super::{GameSession, GuessError, GuessRejection};
use crate::core::GuessFeedback;
use crate::wordlists::WordSource;

/// Validate `raw` against the session and dictionary, then submit it
///
/// # Errors
///
/// Returns a [`GuessRejection`] describing the first failed check. Rejected
/// input never consumes a guess.
///
/// # Examples
/// ```
/// use wordle_game::game::{GameSession, GuessRejection, submit_checked};
/// use wordle_game::wordlists::WordSource;
///
/// let words = WordSource::new(["CRANE", "SLATE"]);
/// let mut session = GameSession::new("CRANE", 6, 5);
///
/// assert!(matches!(
///     submit_checked(&mut session, &words, "zzzzz"),
///     Err(GuessRejection::NotInWordList(_))
/// ));
/// assert!(submit_checked(&mut session, &words, " slate ").is_ok());
/// assert_eq!(session.guesses_used(), 1);
/// ```
pub fn submit_checked(
    session: &mut GameSession,
    words: &WordSource,
    raw: &str,
) -> Result<GuessFeedback, GuessRejection> {
    if session.is_game_over() {
        return Err(GuessError::GameAlreadyOver.into());
    }

    let guess = raw.trim().to_uppercase();
    let actual = guess.chars().count();
    if actual != session.word_length() {
        return Err(GuessRejection::WrongLength {
            expected: session.word_length(),
            actual,
        });
    }

    if !guess.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(GuessRejection::NotAlphabetic);
    }

    if !words.is_valid_word(&guess) {
        return Err(GuessRejection::NotInWordList(guess));
    }

    Ok(session.submit_guess(&guess)?)
}
