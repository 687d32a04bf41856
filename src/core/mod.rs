//! Core domain types
//!
//! Words, per-letter feedback and the space of feedback patterns. Everything
//! here is pure and independent of the evaluation algorithms in `solver`.

mod pattern;
mod status;
mod word;

pub use pattern::{FeedbackPattern, PatternSpace, Patterns};
pub use status::LetterStatus;
pub use word::{Word, WordError};
