//! Display functions for command results

use super::formatters::{describe_positions, entropy_bar, letter_list};
use crate::commands::{AnalysisResult, FeedbackResult, FilterResult, RankResult};
use colored::Colorize;

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    let report = &result.report;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(report.entropy, report.pool_size, 30);

    println!("\n📊 Against {} possible answers:", report.pool_size);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", report.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        report.expected_remaining
    );
    println!("   Worst case:  {} candidates", report.max_matches);
    println!(
        "   Patterns:    {} of {} match at least one answer",
        report.informative_patterns, report.patterns
    );
}

/// Print the best guesses of a ranking run
pub fn print_rank_result(result: &RankResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TOP GUESSES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} guesses scored against {} possible answers\n",
        result.total_words, result.pool_size
    );

    for (rank, (word, bits)) in result.best.iter().enumerate() {
        let bar = entropy_bar(*bits, result.pool_size, 30);
        println!(
            "   {:>3}. {} [{}] {}",
            rank + 1,
            word.to_uppercase().bright_yellow().bold(),
            bar.green(),
            format!("{bits:.4} bits").bright_yellow()
        );
    }

    if !result.failed.is_empty() {
        println!(
            "\n⚠️  {}",
            format!("{} guesses could not be scored:", result.failed.len()).yellow()
        );
        for (word, error) in &result.failed {
            println!("   {} {}", word.red(), format!("({error})").bright_black());
        }
    }

    println!("\n⏱  Time taken:   {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second: {:.1}", result.words_per_second);
}

/// Print a compiled constraint and the pool words it keeps
pub fn print_filter_result(result: &FilterResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Filtering: {} {}",
        result.guess.text().bright_yellow().bold(),
        result.pattern
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n{}", "Positions:".bright_cyan().bold());
    for line in describe_positions(&result.constraint) {
        println!("   {line}");
    }
    println!(
        "   Must contain: {}",
        letter_list(result.constraint.required())
    );
    println!(
        "   Excluded:     {}",
        letter_list(result.constraint.excluded())
    );

    println!(
        "\n📊 {} of {} candidates match (p = {:.4}, {:.3} bits)",
        result.matches.len(),
        result.pool_size,
        result.probability,
        result.bits
    );
    for word in &result.matches {
        println!("   {}", word.text().green());
    }
}

/// Print the feedback for a guess against a known answer
pub fn print_feedback_result(result: &FeedbackResult) {
    println!(
        "\n{} vs {}: {}",
        result.guess.text().bright_yellow().bold(),
        result.answer.text().bright_yellow(),
        result.pattern
    );
    if result.pattern.is_perfect() {
        println!("{}", "✅ Solved!".green().bold());
    }
}
