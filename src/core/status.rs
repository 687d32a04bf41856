//! Per-letter feedback status

/// Feedback for one letter position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Letter not in the answer (gray)
    Absent,
    /// Letter in the answer, wrong position (yellow)
    Misplaced,
    /// Letter in the answer at this position (green)
    Correct,
}

impl LetterStatus {
    /// All statuses in base-3 digit order
    pub const ALL: [Self; 3] = [Self::Absent, Self::Misplaced, Self::Correct];

    /// Base-3 digit used when numbering patterns
    #[inline]
    #[must_use]
    pub const fn digit(self) -> usize {
        match self {
            Self::Absent => 0,
            Self::Misplaced => 1,
            Self::Correct => 2,
        }
    }

    /// Inverse of [`LetterStatus::digit`] for digits 0-2
    #[inline]
    #[must_use]
    pub const fn from_digit(digit: usize) -> Option<Self> {
        match digit {
            0 => Some(Self::Absent),
            1 => Some(Self::Misplaced),
            2 => Some(Self::Correct),
            _ => None,
        }
    }

    /// Parse a feedback character
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/'.'/⬜/⬛.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Misplaced),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Emoji square for this status
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬜',
        }
    }
}
