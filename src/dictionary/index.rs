//! Length-partitioned dictionary index
//!
//! Built once from a raw word list and shared read-only by every solver.

use crate::core::{LetterCounts, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Immutable view of the reference word list
///
/// Invariants:
/// - every word appears in exactly one length bucket
/// - each bucket is sorted alphabetically and holds no duplicates
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    /// Bucket `n` holds the words of length `n`
    by_length: Vec<Vec<Word>>,
    members: FxHashSet<String>,
    anagrams: FxHashMap<LetterCounts, Vec<Word>>,
    total: usize,
}

impl DictionaryIndex {
    /// Build an index from raw entries
    ///
    /// Entries are trimmed and case-folded to uppercase. Anything containing
    /// a character other than an ASCII letter is dropped silently, as are
    /// duplicates.
    ///
    /// # Examples
    /// ```
    /// use wordvinder::dictionary::DictionaryIndex;
    ///
    /// let index = DictionaryIndex::build(["cat", "Act", "co-op", "CAT"]);
    /// assert_eq!(index.len(), 2);
    /// assert!(index.contains("act"));
    /// assert!(!index.contains("co-op"));
    /// ```
    pub fn build<I, S>(raw_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut members: FxHashSet<String> = FxHashSet::default();
        let mut by_length: Vec<Vec<Word>> = Vec::new();
        let mut dropped = 0usize;

        for entry in raw_words {
            let Ok(word) = Word::new(entry.as_ref()) else {
                dropped += 1;
                continue;
            };

            if !members.insert(word.text().to_string()) {
                continue;
            }

            let len = word.len();
            if by_length.len() <= len {
                by_length.resize_with(len + 1, Vec::new);
            }
            by_length[len].push(word);
        }

        for bucket in &mut by_length {
            bucket.sort_unstable();
        }

        // Buckets are visited shortest first and each is sorted, so every
        // anagram list comes out alphabetical without a second sort
        let mut anagrams: FxHashMap<LetterCounts, Vec<Word>> = FxHashMap::default();
        for word in by_length.iter().flatten() {
            anagrams
                .entry(*word.letter_counts())
                .or_default()
                .push(word.clone());
        }

        let total = members.len();
        log::debug!(
            "Built dictionary index: {total} words in {} length buckets, {dropped} entries dropped",
            by_length.iter().filter(|bucket| !bucket.is_empty()).count()
        );

        Self {
            by_length,
            members,
            anagrams,
            total,
        }
    }

    /// All words of a given length, alphabetical
    ///
    /// Returns an empty slice for lengths with no words.
    #[inline]
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[Word] {
        self.by_length.get(length).map_or(&[], Vec::as_slice)
    }

    /// Look up an uppercase word, returning the stored entry
    #[must_use]
    pub fn get(&self, upper: &str) -> Option<&Word> {
        let bucket = self.words_of_length(upper.len());
        bucket
            .binary_search_by(|word| word.text().cmp(upper))
            .ok()
            .map(|pos| &bucket[pos])
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let trimmed = word.trim();
        if trimmed.bytes().all(|b| b.is_ascii_uppercase()) {
            self.members.contains(trimmed)
        } else {
            self.members.contains(&trimmed.to_ascii_uppercase())
        }
    }

    /// Words spelled with exactly the given letters, alphabetical
    #[must_use]
    pub fn anagrams(&self, letters: &LetterCounts) -> &[Word] {
        self.anagrams.get(letters).map_or(&[], Vec::as_slice)
    }

    /// Word lengths that have at least one word, ascending
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_length
            .iter()
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(len, _)| len)
    }

    /// Total number of distinct words
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn build_normalizes_and_partitions() {
        let index = DictionaryIndex::build(["tac", "cat", "Act", "crane", "a"]);

        assert_eq!(texts(index.words_of_length(3)), ["ACT", "CAT", "TAC"]);
        assert_eq!(texts(index.words_of_length(5)), ["CRANE"]);
        assert_eq!(texts(index.words_of_length(1)), ["A"]);
        assert!(index.words_of_length(4).is_empty());
        assert!(index.words_of_length(99).is_empty());
        assert_eq!(index.len(), 5);
    }

    #[test]
    fn build_drops_malformed_entries() {
        let index = DictionaryIndex::build(["don't", "co-op", "café", "", "  ", "x-ray", "ok"]);
        assert_eq!(index.len(), 1);
        assert!(index.contains("OK"));
    }

    #[test]
    fn build_deduplicates_case_insensitively() {
        let index = DictionaryIndex::build(["cat", "CAT", "Cat", " cat "]);
        assert_eq!(index.len(), 1);
        assert_eq!(texts(index.words_of_length(3)), ["CAT"]);
    }

    #[test]
    fn every_word_in_exactly_one_bucket() {
        let index = DictionaryIndex::build(["a", "be", "bee", "beer", "beers", "bees"]);
        let bucketed: usize = index
            .lengths()
            .map(|len| index.words_of_length(len).len())
            .sum();
        assert_eq!(bucketed, index.len());

        for len in index.lengths() {
            let bucket = index.words_of_length(len);
            assert!(bucket.iter().all(|w| w.len() == len));
            assert!(bucket.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn contains_is_case_insensitive() {
        let index = DictionaryIndex::build(["crane"]);
        assert!(index.contains("CRANE"));
        assert!(index.contains("crane"));
        assert!(index.contains(" Crane "));
        assert!(!index.contains("cranes"));
        assert!(!index.contains(""));
    }

    #[test]
    fn get_returns_stored_word() {
        let index = DictionaryIndex::build(["quite", "quit"]);
        assert_eq!(index.get("QUITE").map(Word::text), Some("QUITE"));
        assert!(index.get("quite").is_none()); // Expects uppercase
        assert!(index.get("QUITS").is_none());
    }

    #[test]
    fn anagram_view() {
        let index = DictionaryIndex::build(["tac", "cat", "act", "cart", "at"]);
        let key = LetterCounts::from_letters("TCA".bytes());
        assert_eq!(texts(index.anagrams(&key)), ["ACT", "CAT", "TAC"]);

        let missing = LetterCounts::from_letters("ZZZ".bytes());
        assert!(index.anagrams(&missing).is_empty());
    }

    #[test]
    fn empty_index() {
        let index = DictionaryIndex::build(Vec::<String>::new());
        assert!(index.is_empty());
        assert_eq!(index.lengths().count(), 0);
    }
}
