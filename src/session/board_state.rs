//! Analyzed Wordscapes boards
//!
//! Board analysis happens elsewhere; it hands over JSON describing the letter
//! wheel, how many words of each length are still missing, and which words
//! are already filled in. This module turns that into a matcher query.

use crate::core::Submission;
use serde::Deserialize;
use std::path::Path;

/// Words of one length still to be found
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MissingSlot {
    pub length: usize,
    /// Unknown when the analysis could not count the blanks
    #[serde(default)]
    pub count: Option<u32>,
}

/// Words of one length already on the board
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SolvedWords {
    #[serde(default)]
    pub length: usize,
    #[serde(default)]
    pub words: Vec<String>,
}

/// An analyzed board as delivered by the board reader
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub letters: Vec<String>,
    #[serde(default)]
    pub missing_by_length: Vec<MissingSlot>,
    #[serde(default)]
    pub solved_words_by_length: Vec<SolvedWords>,
}

impl BoardState {
    /// Parse a board from JSON text
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed input.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Read a board from a JSON file
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read board file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid board JSON in {}", path.display()))
    }

    /// Lengths that still have words to find, ascending
    #[must_use]
    pub fn target_word_lengths(&self) -> Vec<usize> {
        target_word_lengths(&self.missing_by_length)
    }

    /// Every non-blank word already on the board
    #[must_use]
    pub fn solved_words(&self) -> Vec<String> {
        self.solved_words_by_length
            .iter()
            .flat_map(|entry| entry.words.iter())
            .map(|word| word.trim())
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// The matcher query for this board
    #[must_use]
    pub fn to_submission(&self) -> Submission {
        Submission::from_board(self)
    }
}

impl Submission {
    /// Wheel letters of a board, restricted to lengths with missing words
    #[must_use]
    pub fn from_board(board: &BoardState) -> Self {
        Self::from_tokens(&board.letters).with_target_lengths(board.target_word_lengths())
    }
}

/// Lengths with a positive, known number of missing words
///
/// Deduplicated and sorted ascending.
#[must_use]
pub fn target_word_lengths(missing: &[MissingSlot]) -> Vec<usize> {
    let mut lengths: Vec<usize> = missing
        .iter()
        .filter(|slot| slot.length > 0 && slot.count.is_some_and(|count| count > 0))
        .map(|slot| slot.length)
        .collect();
    lengths.sort_unstable();
    lengths.dedup();
    lengths
}
