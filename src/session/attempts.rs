//! Wordle attempt history
//!
//! Holds the submitted rows of one game, capped at the game's row count.

use crate::core::{Attempt, Word};
use crate::dictionary::DictionaryIndex;
use crate::solver::suggest_words;

/// Rows on a Wordle board
pub const MAX_ATTEMPTS: usize = 6;

/// Error type for session updates
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("All {} attempts have been used", MAX_ATTEMPTS)]
    Full,
}

/// The attempts submitted so far in one game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttemptHistory {
    attempts: Vec<Attempt>,
}

impl AttemptHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attempts: Vec::new(),
        }
    }

    /// Submit a row
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Full` once `MAX_ATTEMPTS` rows are in.
    pub fn push(&mut self, attempt: Attempt) -> Result<(), SessionError> {
        if self.is_full() {
            return Err(SessionError::Full);
        }
        self.attempts.push(attempt);
        Ok(())
    }

    /// Take back the last row
    pub fn undo(&mut self) -> Option<Attempt> {
        self.attempts.pop()
    }

    pub fn reset(&mut self) {
        self.attempts.clear();
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.attempts.len() >= MAX_ATTEMPTS
    }

    /// True once the latest row came back all green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.attempts.last().is_some_and(Attempt::is_solved)
    }

    /// Words still consistent with every row
    #[must_use]
    pub fn suggestions<'a>(&self, index: &'a DictionaryIndex) -> Vec<&'a Word> {
        suggest_words(index, &self.attempts)
    }
}
