//! Feedback command
//!
//! Computes the pattern the game would show for a guess against an answer.

use crate::core::{FeedbackPattern, Word};
use anyhow::{Context, Result};

/// Result of scoring a guess against a known answer
pub struct FeedbackResult {
    pub guess: Word,
    pub answer: Word,
    pub pattern: FeedbackPattern,
}

/// Compute the feedback for `guess` when `answer` is hidden
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn run_feedback(guess: &str, answer: &str) -> Result<FeedbackResult> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    let answer = Word::new(answer).with_context(|| format!("invalid answer '{answer}'"))?;
    let pattern = FeedbackPattern::calculate(&guess, &answer)?;

    Ok(FeedbackResult {
        guess,
        answer,
        pattern,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_for_known_answer() {
        let result = run_feedback("crane", "slate").unwrap();
        assert_eq!(result.pattern.to_emoji(), "⬜⬜🟩⬜🟩");
        assert!(!result.pattern.is_perfect());
    }

    #[test]
    fn feedback_rejects_mismatched_lengths() {
        assert!(run_feedback("crane", "slates").is_err());
        assert!(run_feedback("cr4ne", "slate").is_err());
    }
}
