//! Word list loading utilities
//!
//! Dictionaries are plain text, one word per line. Lines are trimmed and
//! uppercased; anything that is not exactly `word_length` letters `A`-`Z` is
//! skipped.

use super::WordSource;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Failure to open a dictionary file
#[derive(Debug, thiserror::Error)]
pub enum WordSourceError {
    #[error("failed to read word list {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Normalize one dictionary line, or `None` if it is not a playable word
#[must_use]
pub fn normalize_line(line: &str, word_length: usize) -> Option<String> {
    let word = line.trim().to_uppercase();
    let well_formed =
        word.len() == word_length && word.chars().all(|c| c.is_ascii_uppercase());
    well_formed.then_some(word)
}

/// Load words from any line-oriented reader
///
/// Malformed lines are dropped. A read error part-way through keeps the words
/// read so far and is recorded in [`WordSource::load_diagnostic`].
pub fn load_from_reader<R: BufRead>(reader: R, word_length: usize) -> WordSource {
    let mut source = WordSource::default();
    let mut dropped = 0usize;

    for line in reader.lines() {
        match line {
            Ok(line) => match normalize_line(&line, word_length) {
                Some(word) => {
                    source.insert(word);
                }
                None => dropped += 1,
            },
            Err(err) => {
                tracing::warn!(error = %err, "word list read interrupted");
                source.set_diagnostic(format!("read interrupted: {err}"));
                break;
            }
        }
    }

    tracing::debug!(
        kept = source.len(),
        dropped,
        word_length,
        "loaded word list"
    );
    source
}

/// Load words from a file, failing if the file cannot be opened
///
/// # Errors
///
/// Returns [`WordSourceError::Unreadable`] if the file cannot be opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::try_load_from_file;
///
/// let words = try_load_from_file("words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn try_load_from_file<P: AsRef<Path>>(
    path: P,
    word_length: usize,
) -> Result<WordSource, WordSourceError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| WordSourceError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(load_from_reader(BufReader::new(file), word_length))
}

/// Load words from a file, yielding an empty source if it cannot be read
///
/// The reason is kept in [`WordSource::load_diagnostic`] and logged, so the
/// caller can substitute a fallback list.
#[must_use]
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> WordSource {
    try_load_from_file(path, word_length).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "word list unavailable");
        let mut source = WordSource::default();
        source.set_diagnostic(err.to_string());
        source
    })
}
