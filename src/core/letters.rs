//! Letter multiset representation
//!
//! `LetterCounts` is a fixed 26-slot frequency table over `A..=Z`. It backs
//! both the multiset matcher and the anagram view of the dictionary.

use super::Word;

const ALPHABET_SIZE: usize = 26;

/// Frequency of each uppercase ASCII letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LetterCounts([u8; ALPHABET_SIZE]);

impl LetterCounts {
    /// An empty multiset
    #[must_use]
    pub const fn new() -> Self {
        Self([0; ALPHABET_SIZE])
    }

    /// Count letters from raw bytes
    ///
    /// Lowercase letters are folded to uppercase; anything that is not an
    /// ASCII letter is skipped.
    ///
    /// # Examples
    /// ```
    /// use wordvinder::core::LetterCounts;
    ///
    /// let bag = LetterCounts::from_letters("Tea-pot".bytes());
    /// assert_eq!(bag.count(b'T'), 2);
    /// assert_eq!(bag.total(), 6);
    /// ```
    pub fn from_letters(letters: impl IntoIterator<Item = u8>) -> Self {
        let mut counts = Self::new();
        for letter in letters {
            counts.add(letter);
        }
        counts
    }

    /// Add one copy of a letter, ignoring non-letters
    pub fn add(&mut self, letter: u8) {
        if let Some(slot) = slot_of(letter) {
            self.0[slot] = self.0[slot].saturating_add(1);
        }
    }

    /// How many copies of a letter are present
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u8 {
        slot_of(letter).map_or(0, |slot| self.0[slot])
    }

    /// Total number of letters in the multiset
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&n| usize::from(n)).sum()
    }

    /// True when no letters are present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// True when every letter of `other` fits within this multiset
    ///
    /// This is frequency subtraction: `other` may use a strict subset of the
    /// available letters but never more copies of any letter than are present.
    #[inline]
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(have, need)| need <= have)
    }

    /// True when `word` can be spelled from this multiset
    #[inline]
    #[must_use]
    pub fn can_build(&self, word: &Word) -> bool {
        self.contains(word.letter_counts())
    }

    /// Canonical key: the letters in alphabetical order
    ///
    /// Two words are anagrams of each other exactly when their keys match.
    #[must_use]
    pub fn sorted_letters(&self) -> String {
        let mut key = String::with_capacity(self.total());
        for (letter, &n) in (b'A'..=b'Z').zip(self.0.iter()) {
            for _ in 0..n {
                key.push(char::from(letter));
            }
        }
        key
    }
}

#[inline]
fn slot_of(letter: u8) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| usize::from(upper - b'A'))
}
