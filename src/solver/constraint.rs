//! Compiling a guess and one feedback pattern into a matching rule
//!
//! Evidence is aggregated per letter over the whole pattern before any
//! position rule is built. A letter the game marks gray at one position but
//! green or yellow at another is therefore only forbidden where it was gray,
//! never excluded from the whole word.

use crate::core::{FeedbackPattern, LetterStatus, Word};
use crate::error::EntropyError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Set of uppercase ASCII letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> Option<u32> {
        if letter.is_ascii_uppercase() {
            Some(1u32 << (letter - b'A'))
        } else {
            None
        }
    }

    /// Add a letter; anything outside `A..=Z` is ignored
    #[inline]
    pub fn insert(&mut self, letter: u8) {
        if let Some(bit) = Self::bit(letter) {
            self.0 |= bit;
        }
    }

    /// Copy of this set with `letter` added
    #[inline]
    #[must_use]
    pub fn with(mut self, letter: u8) -> Self {
        self.insert(letter);
        self
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'A'..=b'Z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

/// What one position of a candidate word must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionRule {
    /// The position must hold exactly this letter
    Exact(u8),
    /// The position must hold none of these letters
    Forbid(LetterSet),
}

impl PositionRule {
    #[inline]
    #[must_use]
    pub const fn allows(self, letter: u8) -> bool {
        match self {
            Self::Exact(required) => letter == required,
            Self::Forbid(forbidden) => !forbidden.contains(letter),
        }
    }
}

/// Matching rule derived from a guess and one feedback pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    positions: Vec<PositionRule>,
    required: LetterSet,
    excluded: LetterSet,
}

/// Everything the pattern says about one letter of the guess
#[derive(Debug, Default, Clone, Copy)]
struct LetterEvidence {
    /// Marked green or yellow somewhere
    present: bool,
    /// Marked yellow somewhere
    misplaced: bool,
    /// Marked gray somewhere
    absent: bool,
}

impl Constraint {
    /// Compile `guess` and `pattern` into a constraint
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the pattern length differs from the guess length.
    ///
    /// # Examples
    /// ```
    /// use guess_entropy::core::{FeedbackPattern, Word};
    /// use guess_entropy::solver::{Constraint, PositionRule};
    ///
    /// let guess = Word::new("store").unwrap();
    /// let pattern: FeedbackPattern = "-Y-GY".parse().unwrap();
    /// let constraint = Constraint::compile(&guess, &pattern).unwrap();
    ///
    /// assert_eq!(constraint.positions()[3], PositionRule::Exact(b'R'));
    /// assert!(constraint.required().contains(b'T'));
    /// assert!(constraint.excluded().contains(b'S'));
    /// assert!(!constraint.matches(&Word::new("tamer").unwrap()));
    /// ```
    pub fn compile(guess: &Word, pattern: &FeedbackPattern) -> Result<Self, EntropyError> {
        if guess.len() != pattern.len() {
            return Err(EntropyError::LengthMismatch {
                expected: guess.len(),
                found: pattern.len(),
            });
        }

        let mut evidence: FxHashMap<u8, LetterEvidence> = FxHashMap::default();
        for (&letter, &status) in guess.letters().iter().zip(pattern.statuses()) {
            let entry = evidence.entry(letter).or_default();
            match status {
                LetterStatus::Correct => entry.present = true,
                LetterStatus::Misplaced => {
                    entry.present = true;
                    entry.misplaced = true;
                }
                LetterStatus::Absent => entry.absent = true,
            }
        }

        let mut required = LetterSet::EMPTY;
        let mut excluded = LetterSet::EMPTY;
        for (&letter, seen) in &evidence {
            if seen.misplaced {
                required.insert(letter);
            }
            if seen.absent && !seen.present {
                excluded.insert(letter);
            }
        }

        let positions = guess
            .letters()
            .iter()
            .zip(pattern.statuses())
            .map(|(&letter, &status)| match status {
                LetterStatus::Correct => PositionRule::Exact(letter),
                LetterStatus::Misplaced | LetterStatus::Absent => {
                    PositionRule::Forbid(excluded.with(letter))
                }
            })
            .collect();

        Ok(Self {
            positions,
            required,
            excluded,
        })
    }

    /// Per-position rules
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[PositionRule] {
        &self.positions
    }

    /// Letters that must appear at least once
    #[inline]
    #[must_use]
    pub const fn required(&self) -> LetterSet {
        self.required
    }

    /// Letters forbidden at every position without an exact requirement
    #[inline]
    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.excluded
    }

    /// Word length this constraint applies to
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Check whether `word` satisfies every clause
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.positions.len()
            && self
                .positions
                .iter()
                .zip(word.letters())
                .all(|(rule, &letter)| rule.allows(letter))
            && self.required.iter().all(|letter| word.has_letter(letter))
    }
}
