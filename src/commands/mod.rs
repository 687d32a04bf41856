//! Command implementations

pub mod analyze;
pub mod feedback;
pub mod filter;
pub mod rank;

pub use analyze::{AnalysisResult, analyze_word};
pub use feedback::{FeedbackResult, run_feedback};
pub use filter::{FilterResult, run_filter};
pub use rank::{RankConfig, RankResult, run_rank};
