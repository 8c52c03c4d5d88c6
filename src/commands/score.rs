//! Score a single guess against a given secret

use crate::core::GuessFeedback;
use crate::game::GameSession;
use anyhow::{Result, bail};

/// Result of scoring one guess
pub struct ScoreResult {
    pub secret: String,
    pub feedback: GuessFeedback,
}

/// Score `guess` against `secret` without a dictionary check
///
/// # Errors
///
/// Returns an error if either word contains anything but letters `A`-`Z`, or
/// if the two words differ in length.
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult> {
    let secret = normalize(secret, "secret")?;
    let guess = normalize(guess, "guess")?;

    let length = secret.len();
    if guess.len() != length {
        bail!(
            "guess {guess} has {} letters but secret has {length}",
            guess.len()
        );
    }

    let mut session = GameSession::new(&secret, 1, length);
    let feedback = session.submit_guess(&guess)?;
    Ok(ScoreResult { secret, feedback })
}

fn normalize(word: &str, what: &str) -> Result<String> {
    let word = word.trim().to_uppercase();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_uppercase()) {
        bail!("{what} must contain only letters A-Z, got {word:?}");
    }
    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;

    #[test]
    fn scores_pair() {
        let result = score_guess("speed", "erase").unwrap();
        assert_eq!(result.secret, "SPEED");
        assert_eq!(result.feedback.guess(), "ERASE");
        assert_eq!(result.feedback.to_symbols(), "Y--YY");
    }

    #[test]
    fn exact_match() {
        let result = score_guess("crane", "CRANE").unwrap();
        assert!(result.feedback.is_solved());
        assert_eq!(result.feedback.states(), &[LetterState::Correct; 5]);
    }

    #[test]
    fn any_length_when_equal() {
        let result = score_guess("cat", "act").unwrap();
        assert_eq!(result.feedback.to_symbols(), "YYG");
    }

    #[test]
    fn rejects_mismatched_lengths() {
        assert!(score_guess("crane", "cat").is_err());
    }

    #[test]
    fn rejects_non_letters() {
        assert!(score_guess("cr4ne", "crane").is_err());
        assert!(score_guess("crane", "").is_err());
    }
}
