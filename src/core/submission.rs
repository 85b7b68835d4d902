//! Letter-bag queries and their grouped results

use super::{LetterCounts, Word};
use std::collections::BTreeSet;

/// Word lengths searched when a submission names none
pub const DEFAULT_TARGET_LENGTHS: std::ops::RangeInclusive<usize> = 3..=8;

/// A multiset query: the available letters plus optional target lengths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    letters: LetterCounts,
    target_lengths: Option<BTreeSet<usize>>,
}

impl Submission {
    /// Build a submission from free-form tokens
    ///
    /// Every ASCII letter of every token is one letter of the bag, so
    /// `["c", "A", "t"]` and `["cat"]` are the same query. Other characters
    /// are stripped.
    ///
    /// # Examples
    /// ```
    /// use wordvinder::core::Submission;
    ///
    /// let submission = Submission::from_tokens([" c", "A", "t!"]);
    /// assert_eq!(submission.letter_count(), 3);
    /// assert!(submission.target_lengths().is_none());
    /// ```
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut letters = LetterCounts::new();
        for token in tokens {
            for letter in token.as_ref().bytes() {
                letters.add(letter);
            }
        }

        Self {
            letters,
            target_lengths: None,
        }
    }

    /// Restrict the search to the given word lengths
    ///
    /// Zero lengths are dropped; an empty set clears the restriction.
    #[must_use]
    pub fn with_target_lengths(mut self, lengths: impl IntoIterator<Item = usize>) -> Self {
        let lengths: BTreeSet<usize> = lengths.into_iter().filter(|&len| len > 0).collect();
        self.target_lengths = (!lengths.is_empty()).then_some(lengths);
        self
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterCounts {
        &self.letters
    }

    /// Number of letters in the bag
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.letters.total()
    }

    #[must_use]
    pub const fn target_lengths(&self) -> Option<&BTreeSet<usize>> {
        self.target_lengths.as_ref()
    }

    /// Lengths to search, ascending
    #[must_use]
    pub fn lengths_to_search(&self) -> Vec<usize> {
        self.target_lengths.as_ref().map_or_else(
            || DEFAULT_TARGET_LENGTHS.collect(),
            |lengths| lengths.iter().copied().collect(),
        )
    }
}

/// All matches of one length, alphabetical
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGroup {
    pub length: usize,
    pub words: Vec<Word>,
}
