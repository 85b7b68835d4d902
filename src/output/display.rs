//! Display functions for command results

use super::formatters::{create_progress_bar, plural, word_columns};
use crate::commands::{BenchmarkResult, QuartilesResult, WordleResult, WordscapesResult};
use crate::dictionary::DictionaryError;
use crate::solver::{MAX_GROUP_SIZE, MIN_GROUP_SIZE};
use colored::Colorize;
use std::fmt::Write;

const WORDS_PER_ROW: usize = 8;

/// Print the candidates left after a set of Wordle rows
pub fn print_wordle_result(result: &WordleResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "WORDLE".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, attempt) in result.attempts.iter().enumerate() {
        println!(
            "  {}. {} {}",
            (i + 1).to_string().bright_black(),
            attempt.guess_text().bright_white().bold(),
            attempt.to_emoji()
        );
    }

    println!();
    if result.is_solved() {
        println!("{}", "✅ Solved!".green().bold());
        return;
    }
    if result.candidates.is_empty() {
        println!("{}", "❌ No words match these rows".red().bold());
        return;
    }

    println!(
        "📊 {} remaining",
        plural(result.candidates.len(), "candidate").bright_yellow().bold()
    );
    let shown = if verbose {
        result.candidates.len()
    } else {
        result.candidates.len().min(WORDS_PER_ROW * 5)
    };
    for row in word_columns(&result.candidates[..shown], WORDS_PER_ROW) {
        println!("   {row}");
    }
    if shown < result.candidates.len() {
        println!("   … and {} more (use --verbose)", result.candidates.len() - shown);
    }
}

/// Print the Quartiles buckets
pub fn print_quartiles_result(result: &QuartilesResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "QUARTILES:".bright_cyan().bold(),
        result.tiles.join(" ").bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !result.rejected.is_empty() {
        println!(
            "\n⚠️  Skipped {}: {}",
            plural(result.rejected.len(), "tile"),
            result.rejected.join(", ").yellow()
        );
    }

    for tile_count in MIN_GROUP_SIZE..=MAX_GROUP_SIZE {
        let words = result.words.with_tile_count(tile_count);
        println!(
            "\n🧩 {} ({})",
            format!("{tile_count} tiles").bright_cyan().bold(),
            plural(words.len(), "word")
        );
        for row in word_columns(words, WORDS_PER_ROW) {
            println!("   {row}");
        }
    }

    println!(
        "\n   Arrangements checked: {}",
        result.total_possibilities.to_string().bright_black()
    );
}

/// Print Wordscapes matches grouped by length
pub fn print_wordscapes_result(result: &WordscapesResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORDSCAPES:".bright_cyan().bold(),
        result.letters.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.solved_count > 0 {
        println!("\n   Excluding {}", plural(result.solved_count, "solved word"));
    }

    if result.groups.is_empty() {
        println!("\n{}", "❌ No words can be made from these letters".red().bold());
        return;
    }

    for group in &result.groups {
        println!(
            "\n🔤 {} ({})",
            format!("{} letters", group.length).bright_cyan().bold(),
            plural(group.words.len(), "word")
        );
        for row in word_columns(&group.words, WORDS_PER_ROW) {
            println!("   {row}");
        }
    }

    println!("\n   Total: {}", plural(result.word_count(), "word").bright_yellow());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Queries run:      {}", result.total_queries);
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!(
        "   Queries/second:   {}",
        format!("{:.1}", result.queries_per_second)
            .bright_yellow()
            .bold()
    );

    let misses = result.misses();
    if misses == 0 {
        println!("   Answers found:    {}", "all".green());
    } else {
        println!("   Answers missed:   {}", misses.to_string().red().bold());
    }

    println!("\n📈 {}", "Mix:".bright_cyan().bold());
    for (kind, stats) in &result.per_kind {
        let pct = if result.total_queries == 0 {
            0.0
        } else {
            stats.queries as f64 / result.total_queries as f64 * 100.0
        };
        let avg = if stats.queries == 0 {
            0.0
        } else {
            stats.matches as f64 / stats.queries as f64
        };
        println!(
            "   {kind:<10} {} {:5} ({pct:5.1}%)  avg {avg:.1} matches",
            create_progress_bar(pct, 100.0, 30).green(),
            stats.queries
        );
    }
}

/// Report a dictionary failure as its own state
pub fn print_dictionary_error(wordlist: &str, error: &DictionaryError) {
    eprintln!("{} {}", "⚠️ ".red().bold(), dictionary_error_message(wordlist, error));
}

/// One line naming the wordlist, the failure and its cause
#[must_use]
pub fn dictionary_error_message(wordlist: &str, error: &DictionaryError) -> String {
    let mut message = format!("Could not load wordlist '{wordlist}': {error}");
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        let _ = write!(message, ": {cause}");
        source = cause.source();
    }
    message
}
