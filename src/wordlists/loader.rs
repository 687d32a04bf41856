//! Word list loading utilities
//!
//! Files hold one word per line. Blank lines are ignored; lines that are not
//! valid words, or have the wrong length, are skipped with a warning.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a file
///
/// When `expected_len` is given, words of any other length are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use guess_entropy::wordlists::loader::load_from_file;
///
/// let words = load_from_file("answers.txt", Some(5)).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, expected_len: Option<usize>) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content, expected_len);

    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Load raw, non-blank lines from a file
///
/// Used for guess lists, where malformed entries are reported per word by the
/// batch evaluator instead of being dropped here.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Parse newline-separated words, skipping invalid entries
fn parse_words(content: &str, expected_len: Option<usize>) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) if expected_len.is_none_or(|len| word.len() == len) => Some(word),
                Ok(word) => {
                    warn!(line = idx + 1, word = %word, "skipping word of unexpected length");
                    None
                }
                Err(e) => {
                    warn!(line = idx + 1, entry = trimmed, error = %e, "skipping invalid word");
                    None
                }
            }
        })
        .collect()
}

/// Convert a string slice to a Word vector, dropping invalid entries
///
/// # Examples
/// ```
/// use guess_entropy::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "sl4te", "irate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
