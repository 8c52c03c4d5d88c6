//! Dictionary of playable words
//!
//! A `WordSource` answers "is this a legal guess?" and picks secrets.

use super::FALLBACK;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Owned set of uppercase candidate words
///
/// Duplicates collapse to a single entry; the first-seen order is kept so that
/// seeded selection is reproducible.
#[derive(Debug, Clone, Default)]
pub struct WordSource {
    words: Vec<String>,
    index: FxHashSet<String>,
    diagnostic: Option<String>,
}

impl WordSource {
    /// Build a source from an explicit list
    ///
    /// Words are uppercased but otherwise trusted: no length or alphabet check.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordSource;
    ///
    /// let words = WordSource::new(["apple", "Crane", "APPLE"]);
    /// assert_eq!(words.len(), 2);
    /// assert!(words.is_valid_word("crane"));
    /// assert!(!words.is_valid_word("slate"));
    /// ```
    #[must_use]
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut source = Self::default();
        for word in words {
            source.insert(word.as_ref().to_uppercase());
        }
        source
    }

    /// Built-in words with exactly `word_length` letters
    #[must_use]
    pub fn fallback(word_length: usize) -> Self {
        Self::new(
            FALLBACK
                .iter()
                .filter(|word| word.chars().count() == word_length),
        )
    }

    /// Add an already-normalized word; returns `false` if it was present
    pub(crate) fn insert(&mut self, word: String) -> bool {
        if self.index.contains(&word) {
            return false;
        }
        self.index.insert(word.clone());
        self.words.push(word);
        true
    }

    pub(crate) fn set_diagnostic(&mut self, reason: String) {
        self.diagnostic = Some(reason);
    }

    /// Why loading produced fewer words than expected, if known
    #[must_use]
    pub fn load_diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Words in first-seen order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn is_valid_word(&self, candidate: &str) -> bool {
        self.index.contains(&candidate.to_uppercase())
    }

    /// Pick a word uniformly at random using the thread-local generator
    ///
    /// Returns `None` if the source is empty.
    #[must_use]
    pub fn random_word(&self) -> Option<&str> {
        self.random_word_with(&mut rand::rng())
    }

    /// Pick a word uniformly at random using `rng`
    ///
    /// Returns `None` if the source is empty.
    pub fn random_word_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn new_normalizes_without_filtering() {
        let words = WordSource::new(["apple", "ab", "x1y2z"]);
        assert_eq!(words.words(), &["APPLE", "AB", "X1Y2Z"]);
        assert!(words.load_diagnostic().is_none());
    }

    #[test]
    fn duplicates_collapse_in_first_seen_order() {
        let words = WordSource::new(["grape", "apple", "GRAPE", "Apple"]);
        assert_eq!(words.words(), &["GRAPE", "APPLE"]);
    }

    #[test]
    fn membership_is_case_insensitive() {
        let words = WordSource::new(["CRANE"]);
        assert!(words.is_valid_word("crane"));
        assert!(words.is_valid_word("CrAnE"));
        assert!(!words.is_valid_word("crate"));
        assert!(!words.is_valid_word(""));
    }

    #[test]
    fn empty_source() {
        let words = WordSource::new(Vec::<String>::new());
        assert!(words.is_empty());
        assert_eq!(words.len(), 0);
        assert!(words.random_word().is_none());
    }

    #[test]
    fn fallback_contains_builtin_words() {
        let words = WordSource::fallback(5);
        for word in ["APPLE", "CRANE", "WORLD", "CHAIR", "POINT"] {
            assert!(words.is_valid_word(word), "missing {word}");
        }
        assert!(WordSource::fallback(9).is_empty());
    }

    #[test]
    fn random_word_covers_every_word() {
        let words = WordSource::new(["APPLE", "CRANE", "WORLD", "CHAIR", "POINT"]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen: HashMap<String, usize> = HashMap::new();

        for _ in 0..1000 {
            let word = words.random_word_with(&mut rng).unwrap();
            assert!(words.is_valid_word(word));
            *seen.entry(word.to_string()).or_default() += 1;
        }

        assert_eq!(seen.len(), 5);
        // Uniform draws: each word should land near 200 times
        assert!(seen.values().all(|&count| count > 100), "{seen:?}");
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let words = WordSource::fallback(5);
        let first: Vec<&str> = {
            let mut rng = StdRng::seed_from_u64(9);
            (0..10)
                .filter_map(|_| words.random_word_with(&mut rng))
                .collect()
        };
        let second: Vec<&str> = {
            let mut rng = StdRng::seed_from_u64(9);
            (0..10)
                .filter_map(|_| words.random_word_with(&mut rng))
                .collect()
        };
        assert_eq!(first, second);
    }

    #[test]
    fn thread_rng_draw_stays_in_set() {
        let words = WordSource::new(["APPLE", "CRANE"]);
        for _ in 0..50 {
            let word = words.random_word().unwrap();
            assert!(word == "APPLE" || word == "CRANE");
        }
    }
}
