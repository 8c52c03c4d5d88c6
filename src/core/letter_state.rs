//! Per-letter feedback classification

use std::fmt;

/// Classification of one guessed letter against the secret
///
/// - `Correct`: right letter, right position
/// - `Present`: letter occurs in the secret at another position
/// - `Absent`: letter does not occur, or every occurrence is already claimed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    Correct,
    Present,
    Absent,
}

impl LetterState {
    /// Single-character symbol: `G` (green), `Y` (yellow), `-` (gray)
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Emoji square as used in shared Wordle results
    #[inline]
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_and_emoji() {
        assert_eq!(LetterState::Correct.symbol(), 'G');
        assert_eq!(LetterState::Present.symbol(), 'Y');
        assert_eq!(LetterState::Absent.symbol(), '-');
        assert_eq!(LetterState::Correct.emoji(), '🟩');
        assert_eq!(LetterState::Absent.emoji(), '⬜');
    }

    #[test]
    fn display_uses_symbol() {
        assert_eq!(LetterState::Present.to_string(), "Y");
    }
}
