//! Formatting utilities for terminal output

use crate::core::Word;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Lay words out in rows of `per_row`, left-aligned to the longest
#[must_use]
pub fn word_columns(words: &[Word], per_row: usize) -> Vec<String> {
    let width = words.iter().map(Word::len).max().unwrap_or(0);
    words
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|word| format!("{:<width$}", word.text()))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// "1 word" / "3 words"
#[must_use]
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
