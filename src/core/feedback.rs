//! Scored guess as handed back to the caller

use super::LetterState;

/// Result of one accepted guess
///
/// Holds the normalized guess and one [`LetterState`] per letter, index-aligned
/// with the guess characters. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessFeedback {
    guess: String,
    states: Vec<LetterState>,
}

impl GuessFeedback {
    pub(crate) fn new(guess: String, states: Vec<LetterState>) -> Self {
        debug_assert_eq!(guess.chars().count(), states.len());
        Self { guess, states }
    }

    /// The uppercase guess
    #[inline]
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub fn states(&self) -> &[LetterState] {
        &self.states
    }

    /// Pairs of guessed letter and its classification
    pub fn letters(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        self.guess.chars().zip(self.states.iter().copied())
    }

    /// Check if every letter is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.states.iter().all(|&s| s == LetterState::Correct)
    }

    /// Emoji row such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.states.iter().map(|s| s.emoji()).collect()
    }

    /// Symbol row such as "GY-GY"
    #[must_use]
    pub fn to_symbols(&self) -> String {
        self.states.iter().map(|s| s.symbol()).collect()
    }
}
