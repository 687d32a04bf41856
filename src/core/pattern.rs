//! Feedback pattern representation and enumeration
//!
//! A pattern is one [`LetterStatus`] per guess position. Patterns of length L
//! are numbered in base 3, where position `i` contributes `digit × 3^i`:
//! - 0 = Absent (gray)
//! - 1 = Misplaced (yellow)
//! - 2 = Correct (green)
//!
//! [`PatternSpace`] walks that numbering to produce all 3^L patterns.

use super::{LetterStatus, Word};
use crate::error::EntropyError;
use std::fmt;
use std::iter::FusedIterator;

/// Feedback pattern for a guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(Vec<LetterStatus>);

impl FeedbackPattern {
    /// Create a pattern from explicit statuses
    #[must_use]
    pub const fn new(statuses: Vec<LetterStatus>) -> Self {
        Self(statuses)
    }

    /// Decode pattern number `index` for words of length `len`
    ///
    /// Digits above the top position are ignored.
    #[must_use]
    pub fn from_index(mut index: usize, len: usize) -> Self {
        let mut statuses = Vec::with_capacity(len);
        for _ in 0..len {
            // Remainder is always 0-2
            statuses.push(LetterStatus::from_digit(index % 3).unwrap_or(LetterStatus::Absent));
            index /= 3;
        }
        Self(statuses)
    }

    /// Per-position statuses
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length pattern
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Base-3 number of this pattern, or `None` if it overflows `usize`
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.0.iter().rev().try_fold(0usize, |acc, status| {
            acc.checked_mul(3)?.checked_add(status.digit())
        })
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Calculate the pattern the game returns when `guess` is played against `answer`
    ///
    /// Duplicate letters follow the usual game rules.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (greens) and remove them from the answer's letter pool
    /// 2. Second pass: mark present-but-wrong-position (yellows) from the remaining pool
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the two words differ in length.
    ///
    /// # Examples
    /// ```
    /// use guess_entropy::core::{FeedbackPattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = FeedbackPattern::calculate(&guess, &answer).unwrap();
    ///
    /// assert_eq!(pattern.to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    pub fn calculate(guess: &Word, answer: &Word) -> Result<Self, EntropyError> {
        if guess.len() != answer.len() {
            return Err(EntropyError::LengthMismatch {
                expected: guess.len(),
                found: answer.len(),
            });
        }

        let mut result = vec![LetterStatus::Absent; guess.len()];
        let mut answer_available = answer.letter_counts();

        for (i, (&g, &a)) in guess.letters().iter().zip(answer.letters()).enumerate() {
            if g == a {
                result[i] = LetterStatus::Correct;
                if let Some(count) = answer_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (status, &letter) in result.iter_mut().zip(guess.letters()) {
            if *status == LetterStatus::Absent
                && let Some(count) = answer_available.get_mut(&letter)
                && *count > 0
            {
                *status = LetterStatus::Misplaced;
                *count -= 1;
            }
        }

        Ok(Self(result))
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for FeedbackPattern {
    type Err = String;

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("Pattern string is empty".to_string());
        }
        s.chars()
            .map(LetterStatus::from_char)
            .collect::<Option<Vec<_>>>()
            .map(Self)
            .ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

/// Every feedback pattern for one word length
///
/// # Examples
/// ```
/// use guess_entropy::core::PatternSpace;
///
/// let space = PatternSpace::new(2).unwrap();
/// assert_eq!(space.size(), 9);
/// assert_eq!(space.iter().count(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSpace {
    len: usize,
    size: usize,
}

impl PatternSpace {
    /// Create the pattern space for words of length `len`
    ///
    /// # Errors
    /// Returns `InvalidLength` if `len` is zero or 3^len overflows `usize`.
    pub fn new(len: usize) -> Result<Self, EntropyError> {
        if len == 0 {
            return Err(EntropyError::InvalidLength(len));
        }
        let size = u32::try_from(len)
            .ok()
            .and_then(|exp| 3usize.checked_pow(exp))
            .ok_or(EntropyError::InvalidLength(len))?;
        Ok(Self { len, size })
    }

    /// Pattern length
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.len
    }

    /// Number of patterns (3^len)
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Fresh iterator over all patterns, in base-3 counting order
    #[must_use]
    pub const fn iter(&self) -> Patterns {
        Patterns {
            len: self.len,
            next: 0,
            end: self.size,
        }
    }
}

impl IntoIterator for &PatternSpace {
    type Item = FeedbackPattern;
    type IntoIter = Patterns;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator produced by [`PatternSpace::iter`]
#[derive(Debug, Clone)]
pub struct Patterns {
    len: usize,
    next: usize,
    end: usize,
}

impl Iterator for Patterns {
    type Item = FeedbackPattern;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let pattern = FeedbackPattern::from_index(self.next, self.len);
        self.next += 1;
        Some(pattern)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Patterns {}

impl FusedIterator for Patterns {}
