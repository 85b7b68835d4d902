//! Dictionary word representation
//!
//! A Word stores an uppercase ASCII word along with its letter counts for
//! multiset matching.

use super::LetterCounts;
use std::fmt;

/// An uppercase dictionary word with letter frequency tracking
///
/// Ordering and equality follow the text, so sorted collections of words are
/// alphabetical.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    counts: LetterCounts,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word contains invalid character {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is ignored and letters are case-folded to
    /// uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use wordvinder::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("co-op").is_err());
    /// assert!(Word::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = trimmed.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let text = trimmed.to_ascii_uppercase();
        let counts = LetterCounts::from_letters(text.bytes());

        Ok(Self { text, counts })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: a Word holds at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// Check if the word contains a specific uppercase letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.counts.count(letter) > 0
    }

    /// How many times an uppercase letter occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        self.counts.count(letter)
    }

    /// Letter frequencies of the word
    #[inline]
    #[must_use]
    pub const fn letter_counts(&self) -> &LetterCounts {
        &self.counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
