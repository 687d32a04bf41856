//! Formatting utilities for terminal output

use crate::solver::{Constraint, LetterSet, PositionRule};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the pool's maximum of log₂(pool size)
#[must_use]
pub fn entropy_bar(entropy: f64, pool_size: usize, width: usize) -> String {
    let max_entropy = (pool_size.max(2) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// Space-separated letters, or "-" for an empty set
#[must_use]
pub fn letter_list(letters: LetterSet) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }
    letters
        .iter()
        .map(|letter| (letter as char).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per position describing what a candidate must hold there
#[must_use]
pub fn describe_positions(constraint: &Constraint) -> Vec<String> {
    constraint
        .positions()
        .iter()
        .enumerate()
        .map(|(i, rule)| match *rule {
            PositionRule::Exact(letter) => format!("{}: = {}", i + 1, letter as char),
            PositionRule::Forbid(letters) => format!("{}: ≠ {}", i + 1, letter_list(letters)),
        })
        .collect()
}
