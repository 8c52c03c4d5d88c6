//! Word lists for Wordle
//!
//! A dictionary loaded from disk, plus a small built-in list compiled into the
//! binary for when no dictionary is available.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{FALLBACK, FALLBACK_COUNT};
pub use loader::WordSourceError;
pub use source::WordSource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_count_matches_const() {
        assert_eq!(FALLBACK.len(), FALLBACK_COUNT);
    }

    #[test]
    fn fallback_words_are_uppercase_letters() {
        for &word in FALLBACK {
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn fallback_keeps_classic_words() {
        for word in ["APPLE", "CRANE", "WORLD", "CHAIR", "POINT"] {
            assert!(FALLBACK.contains(&word), "missing {word}");
        }
    }
}
