//! Error taxonomy for entropy evaluation
//!
//! Every failure is a local precondition violation: surfaced to the caller
//! immediately and never retried.

use crate::core::WordError;
use std::fmt;

/// Errors produced by the enumerator, compiler, filter, scorer and evaluator
#[derive(Debug, Clone, PartialEq)]
pub enum EntropyError {
    /// Word length of zero, or one whose pattern space does not fit in memory
    InvalidLength(usize),
    /// Two sequences that must line up position by position have different lengths
    LengthMismatch { expected: usize, found: usize },
    /// Filtering or evaluation against zero candidates
    EmptyPool,
    /// Probability outside [0, 1]
    InvalidProbability(f64),
    /// Guess text that is not a valid word
    InvalidWord(WordError),
}

impl fmt::Display for EntropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(f, "Invalid word length: {len}"),
            Self::LengthMismatch { expected, found } => {
                write!(f, "Length mismatch: expected {expected}, found {found}")
            }
            Self::EmptyPool => write!(f, "Candidate pool is empty"),
            Self::InvalidProbability(p) => write!(f, "Probability {p} is outside [0, 1]"),
            Self::InvalidWord(e) => write!(f, "Invalid word: {e}"),
        }
    }
}

impl std::error::Error for EntropyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for EntropyError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            EntropyError::LengthMismatch {
                expected: 5,
                found: 4
            }
            .to_string(),
            "Length mismatch: expected 5, found 4"
        );
        assert_eq!(EntropyError::EmptyPool.to_string(), "Candidate pool is empty");
        assert_eq!(
            EntropyError::from(WordError::Empty).to_string(),
            "Invalid word: Word must contain at least one letter"
        );
    }

    #[test]
    fn word_error_is_source() {
        use std::error::Error;

        let err = EntropyError::from(WordError::InvalidCharacters);
        assert!(err.source().is_some());
        assert!(EntropyError::EmptyPool.source().is_none());
    }
}
