//! Wordscapes multiset matcher
//!
//! Finds every dictionary word that can be spelled from a bag of letters,
//! grouped by length.

use crate::core::{Submission, WordGroup};
use crate::dictionary::DictionaryIndex;
use rustc_hash::FxHashSet;

/// Words buildable from the submission's letters, one group per length
///
/// Lengths come from the submission, or 3 through 8 when it names none.
/// A word matches when no letter is used more often than the bag holds it;
/// it need not use every letter. Entries of `already_solved` are compared
/// case-insensitively and removed. Groups left empty are omitted.
///
/// # Examples
/// ```
/// use wordvinder::core::Submission;
/// use wordvinder::dictionary::DictionaryIndex;
/// use wordvinder::solver::match_multiset;
///
/// let index = DictionaryIndex::build(["cat", "act", "tact", "cab"]);
/// let submission = Submission::from_tokens(["c", "a", "t"]);
/// let groups = match_multiset(&index, &submission, &["act"]);
///
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].length, 3);
/// assert_eq!(groups[0].words[0].text(), "CAT");
/// ```
#[must_use]
pub fn match_multiset<S: AsRef<str>>(
    index: &DictionaryIndex,
    submission: &Submission,
    already_solved: &[S],
) -> Vec<WordGroup> {
    let letters = submission.letters();
    if letters.is_empty() {
        return Vec::new();
    }

    let solved: FxHashSet<String> = already_solved
        .iter()
        .map(|word| word.as_ref().trim().to_ascii_uppercase())
        .filter(|word| !word.is_empty())
        .collect();

    let groups: Vec<WordGroup> = submission
        .lengths_to_search()
        .into_iter()
        // A word can never be longer than the bag
        .filter(|&length| length <= letters.total())
        .filter_map(|length| {
            let words: Vec<_> = index
                .words_of_length(length)
                .iter()
                .filter(|word| letters.can_build(word))
                .filter(|word| !solved.contains(word.text()))
                .cloned()
                .collect();

            (!words.is_empty()).then_some(WordGroup { length, words })
        })
        .collect();

    log::debug!(
        "Bag {} matched {} words in {} groups ({} already solved)",
        letters.sorted_letters(),
        groups.iter().map(|g| g.words.len()).sum::<usize>(),
        groups.len(),
        solved.len()
    );

    groups
}
