//! Guess scoring against a secret word
//!
//! Implements Wordle's feedback rules including duplicate letters: exact
//! matches claim their letter first, then the remaining occurrences are handed
//! out left to right.

use super::LetterState;

/// Size of the availability counter, one slot per letter `A`-`Z`
const ALPHABET: usize = 26;

/// Map an uppercase ASCII letter to its counter slot
#[inline]
fn letter_index(ch: char) -> Option<usize> {
    ch.is_ascii_uppercase().then(|| (ch as u8 - b'A') as usize)
}

/// Count how many times each letter `A`-`Z` occurs in `word`
fn letter_counts(word: &[char]) -> [u8; ALPHABET] {
    let mut counts = [0u8; ALPHABET];
    for idx in word.iter().copied().filter_map(letter_index) {
        counts[idx] = counts[idx].saturating_add(1);
    }
    counts
}

/// Score `guess` against `secret`, one [`LetterState`] per position
///
/// Both words are expected in uppercase and of equal length; a length
/// mismatch is a caller error.
///
/// # Algorithm
/// 1. First pass: mark exact position matches as `Correct` and remove them
///    from the available pool
/// 2. Second pass: left to right, mark `Present` while the letter still has
///    availability, otherwise `Absent`
///
/// Characters outside `A`-`Z` are never `Present`.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterState, evaluate};
///
/// let states = evaluate("ABCDE", "EDCBA");
/// assert_eq!(states[2], LetterState::Correct);
/// assert!(states.iter().filter(|s| **s == LetterState::Present).count() == 4);
/// ```
#[must_use]
pub fn evaluate(secret: &str, guess: &str) -> Vec<LetterState> {
    let secret: Vec<char> = secret.chars().collect();
    let guess: Vec<char> = guess.chars().collect();
    debug_assert_eq!(
        secret.len(),
        guess.len(),
        "secret and guess must have the same length"
    );

    let mut available = letter_counts(&secret);
    let mut result: Vec<Option<LetterState>> = vec![None; guess.len()];

    // First pass: greens
    for (i, (&g, &s)) in guess.iter().zip(&secret).enumerate() {
        if g == s {
            result[i] = Some(LetterState::Correct);
            if let Some(idx) = letter_index(g) {
                available[idx] = available[idx].saturating_sub(1);
            }
        }
    }

    // Second pass: yellows from whatever is left, leftmost first
    result
        .into_iter()
        .zip(&guess)
        .map(|(state, &g)| {
            state.unwrap_or_else(|| match letter_index(g) {
                Some(idx) if available[idx] > 0 => {
                    available[idx] -= 1;
                    LetterState::Present
                }
                _ => LetterState::Absent,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState::{Absent, Correct, Present};
    use proptest::prelude::*;

    #[test]
    fn all_absent() {
        assert_eq!(evaluate("FGHIJ", "ABCDE"), vec![Absent; 5]);
    }

    #[test]
    fn exact_match_is_all_correct() {
        for word in ["CRANE", "SLATE", "AUDIO", "ZZZZZ", "AAAAA"] {
            assert_eq!(evaluate(word, word), vec![Correct; 5]);
        }
    }

    #[test]
    fn reversed_letters() {
        assert_eq!(
            evaluate("ABCDE", "EDCBA"),
            vec![Present, Present, Correct, Present, Present]
        );
    }

    #[test]
    fn duplicate_letters_leftmost_claims_first() {
        // SPEED has one S and two E's; ERASE spends both E's and the S
        assert_eq!(
            evaluate("SPEED", "ERASE"),
            vec![Present, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        // FLOOR: the second O of ROBOT is green, the first O takes the other one
        assert_eq!(
            evaluate("FLOOR", "ROBOT"),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn duplicate_letters_exhausted_by_green() {
        // Only one L in PLANT; it is claimed by the exact match
        assert_eq!(
            evaluate("PLANT", "LLAMA"),
            vec![Absent, Correct, Correct, Absent, Absent]
        );
    }

    #[test]
    fn classic_crane_slate() {
        assert_eq!(
            evaluate("SLATE", "CRANE"),
            vec![Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn non_letters_are_never_present() {
        assert_eq!(
            evaluate("ABCDE", "1B?ÉA"),
            vec![Absent, Correct, Absent, Absent, Present]
        );
    }

    #[test]
    fn other_word_lengths() {
        assert_eq!(evaluate("CAT", "ACT"), vec![Present, Present, Correct]);
        assert_eq!(
            evaluate("BANANA", "ANANAS"),
            vec![Present, Present, Present, Present, Present, Absent]
        );
    }

    fn count_credited(secret: &str, guess: &str, letter: char) -> usize {
        guess
            .chars()
            .zip(evaluate(secret, guess))
            .filter(|&(c, s)| c == letter && s != Absent)
            .count()
    }

    proptest! {
        #[test]
        fn one_state_per_position(secret in "[A-Z]{5}", guess in "[A-Z]{5}") {
            prop_assert_eq!(evaluate(&secret, &guess).len(), 5);
        }

        #[test]
        fn credit_never_exceeds_secret_count(secret in "[A-E]{5}", guess in "[A-E]{5}") {
            for letter in 'A'..='E' {
                let in_secret = secret.chars().filter(|&c| c == letter).count();
                prop_assert!(count_credited(&secret, &guess, letter) <= in_secret);
            }
        }

        #[test]
        fn correct_iff_same_letter(secret in "[A-Z]{6}", guess in "[A-Z]{6}") {
            let states = evaluate(&secret, &guess);
            for ((s, g), state) in secret.chars().zip(guess.chars()).zip(states) {
                prop_assert_eq!(s == g, state == Correct);
            }
        }

        #[test]
        fn self_match_is_perfect(word in "[A-Z]{1,8}") {
            prop_assert!(evaluate(&word, &word).into_iter().all(|s| s == Correct));
        }
    }
}
