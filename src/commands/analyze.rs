//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific guess.

use crate::core::Word;
use crate::error::EntropyError;
use crate::solver::entropy::{EntropyReport, evaluate};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub report: EntropyReport,
    pub expected_reduction: f64,
}

/// Analyze the entropy of a guess against a pool of candidates
///
/// The guess does not need to be part of the pool.
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (empty, or contains non-letters)
/// - The pool is empty or holds words of a different length
pub fn analyze_word(word: &str, pool: &[Word]) -> Result<AnalysisResult, EntropyError> {
    let guess = Word::new(word)?;
    let report = evaluate(&guess, pool)?;

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        expected_reduction: report.entropy.exp2(),
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    const POOL: &[&str] = &[
        "aback", "abase", "abate", "abbey", "abbot", "abhor", "abide", "abled", "abode", "abort",
        "about", "above", "abuse", "abyss", "acorn", "acrid", "actor", "acute", "adage", "adapt",
    ];

    #[test]
    fn analyze_valid_word() {
        let words = words_from_slice(POOL);

        let result = analyze_word("aback", &words).unwrap();

        assert_eq!(result.word, "ABACK");
        assert!(result.report.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert_eq!(result.report.pool_size, 20);
    }

    #[test]
    fn analyze_word_outside_pool() {
        let words = words_from_slice(POOL);

        let result = analyze_word("crane", &words).unwrap();
        assert!(result.report.entropy >= 0.0);
    }

    #[test]
    fn analyze_invalid_word() {
        let words = words_from_slice(POOL);

        assert!(matches!(
            analyze_word("ab4ck", &words),
            Err(EntropyError::InvalidWord(_))
        ));
        assert!(matches!(
            analyze_word("abacus", &words),
            Err(EntropyError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn analyze_empty_pool() {
        assert!(matches!(
            analyze_word("crane", &[]),
            Err(EntropyError::EmptyPool)
        ));
    }

    #[test]
    fn report_properties() {
        let words = words_from_slice(POOL);

        let result = analyze_word("abbey", &words).unwrap();

        assert!(result.report.max_matches <= words.len());
        assert!(result.report.informative_patterns <= result.report.patterns);
        assert!(result.report.expected_remaining >= 0.0);
    }
}
