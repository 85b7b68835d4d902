//! Wordle command
//!
//! Parses `GUESS:FEEDBACK` rows and lists the words still possible.

use crate::core::{Attempt, Word};
use crate::dictionary::DictionaryIndex;
use crate::session::AttemptHistory;
use anyhow::{Context, Result};

/// Result of filtering the dictionary against a set of rows
pub struct WordleResult {
    pub attempts: Vec<Attempt>,
    pub candidates: Vec<Word>,
}

impl WordleResult {
    /// True once a row came back all green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.attempts.last().is_some_and(Attempt::is_solved)
    }
}

/// Apply each `GUESS:FEEDBACK` row in order and collect the candidates
///
/// # Errors
///
/// Fails on an unparseable row or when more rows are given than the board
/// holds.
pub fn run_wordle<S: AsRef<str>>(index: &DictionaryIndex, rows: &[S]) -> Result<WordleResult> {
    let mut history = AttemptHistory::new();

    for (i, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        let attempt: Attempt = row
            .parse()
            .with_context(|| format!("Row {} ({row:?}) is not GUESS:FEEDBACK", i + 1))?;
        history
            .push(attempt)
            .with_context(|| format!("Cannot add row {}", i + 1))?;
    }

    let candidates = history.suggestions(index).into_iter().cloned().collect();

    Ok(WordleResult {
        attempts: history.attempts().to_vec(),
        candidates,
    })
}
