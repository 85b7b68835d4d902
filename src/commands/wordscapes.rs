//! Wordscapes command
//!
//! Builds a letter bag from arguments and/or an analyzed board file and lists
//! the words it can spell.

use crate::core::{Submission, WordGroup};
use crate::dictionary::DictionaryIndex;
use crate::session::BoardState;
use crate::solver::match_multiset;
use anyhow::{Result, bail};
use std::path::PathBuf;

/// Inputs for one Wordscapes query
#[derive(Debug, Clone, Default)]
pub struct WordscapesConfig {
    pub letters: Vec<String>,
    pub lengths: Vec<usize>,
    pub solved: Vec<String>,
    pub board: Option<PathBuf>,
}

/// Matches grouped by length
pub struct WordscapesResult {
    /// The bag, letters sorted
    pub letters: String,
    pub groups: Vec<WordGroup>,
    /// How many already-solved words were excluded from the search
    pub solved_count: usize,
}

impl WordscapesResult {
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.groups.iter().map(|group| group.words.len()).sum()
    }
}

/// Run a Wordscapes query
///
/// A board file contributes its wheel letters, its missing lengths and its
/// solved words. Letters, lengths and solved words from the command line are
/// added on top; explicit lengths replace the board's.
///
/// # Errors
///
/// Fails if the board file cannot be read, or when no letters were given.
pub fn run_wordscapes(index: &DictionaryIndex, config: &WordscapesConfig) -> Result<WordscapesResult> {
    let board = config
        .board
        .as_ref()
        .map(BoardState::from_file)
        .transpose()?
        .unwrap_or_default();

    let mut tokens = board.letters.clone();
    tokens.extend(config.letters.iter().cloned());

    let lengths = if config.lengths.is_empty() {
        board.target_word_lengths()
    } else {
        config.lengths.clone()
    };

    let submission = Submission::from_tokens(&tokens).with_target_lengths(lengths);
    if submission.letters().is_empty() {
        bail!("No letters given; pass LETTERS or --board");
    }

    let mut solved = board.solved_words();
    solved.extend(config.solved.iter().cloned());

    Ok(WordscapesResult {
        letters: submission.letters().sorted_letters(),
        groups: match_multiset(index, &submission, &solved),
        solved_count: solved.len(),
    })
}
