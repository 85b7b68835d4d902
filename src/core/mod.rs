//! Core domain types for the word puzzles
//!
//! This module contains the fundamental domain types shared by every puzzle
//! helper. All types here are pure, immutable once built, and testable.

mod attempt;
mod letters;
mod submission;
mod word;

pub use attempt::{Attempt, FeedbackError, LetterSlot, LetterState, WORD_LENGTH};
pub use letters::LetterCounts;
pub use submission::{DEFAULT_TARGET_LENGTHS, Submission, WordGroup};
pub use word::{Word, WordError};
