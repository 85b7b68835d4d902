//! Wordle constraint solver
//!
//! Filters a length bucket of the dictionary down to the words consistent with
//! every submitted attempt.

use crate::core::{Attempt, LetterCounts, LetterState, WORD_LENGTH, Word};
use crate::dictionary::DictionaryIndex;

/// One attempt with its positive letter tally precomputed
struct Compiled<'a> {
    attempt: &'a Attempt,
    positives: LetterCounts,
}

impl<'a> Compiled<'a> {
    fn new(attempt: &'a Attempt) -> Self {
        let positives = LetterCounts::from_letters(
            attempt
                .slots()
                .iter()
                .filter(|slot| slot.state.is_positive())
                .filter_map(|slot| slot.letter()),
        );
        Self { attempt, positives }
    }

    fn admits(&self, candidate: &Word) -> bool {
        let bytes = candidate.bytes();

        self.attempt.slots().iter().enumerate().all(|(i, slot)| {
            // Empty slots and positions past the candidate are wildcards
            let (Some(letter), Some(&current)) = (slot.letter(), bytes.get(i)) else {
                return true;
            };
            let marked = self.positives.count(letter);

            match slot.state {
                LetterState::Correct => current == letter,
                LetterState::Present => {
                    current != letter && candidate.count_of(letter) >= marked.max(1)
                }
                // Gray next to a green/yellow of the same letter caps the
                // count instead of excluding the letter
                LetterState::Absent if marked > 0 => {
                    current != letter && candidate.count_of(letter) == marked
                }
                LetterState::Absent => !candidate.has_letter(letter),
            }
        })
    }
}

/// Check a single candidate against a single attempt
///
/// # Examples
/// ```
/// use wordvinder::core::{Attempt, Word};
/// use wordvinder::solver::is_consistent;
///
/// let attempt = Attempt::parse("allot", "Y-G--").unwrap();
/// assert!(!is_consistent(&Word::new("algae").unwrap(), &attempt));
/// assert!(is_consistent(&Word::new("salad").unwrap(), &attempt));
/// ```
#[must_use]
pub fn is_consistent(candidate: &Word, attempt: &Attempt) -> bool {
    Compiled::new(attempt).admits(candidate)
}

/// Five-letter words consistent with every attempt
///
/// With no attempts the whole five-letter bucket comes back unfiltered.
/// Results keep the dictionary's alphabetical order.
///
/// # Examples
/// ```
/// use wordvinder::core::Attempt;
/// use wordvinder::dictionary::DictionaryIndex;
/// use wordvinder::solver::suggest_words;
///
/// let index = DictionaryIndex::build(["crane", "slate", "irate", "grate"]);
/// let attempts = vec![Attempt::parse("crane", "-GG-G").unwrap()];
/// let words: Vec<&str> = suggest_words(&index, &attempts)
///     .iter()
///     .map(|w| w.text())
///     .collect();
/// assert_eq!(words, ["GRATE", "IRATE"]);
/// ```
#[must_use]
pub fn suggest_words<'a>(index: &'a DictionaryIndex, attempts: &[Attempt]) -> Vec<&'a Word> {
    suggest_words_of_length(index, WORD_LENGTH, attempts)
}

/// Words of `length` consistent with every attempt
#[must_use]
pub fn suggest_words_of_length<'a>(
    index: &'a DictionaryIndex,
    length: usize,
    attempts: &[Attempt],
) -> Vec<&'a Word> {
    let bucket = index.words_of_length(length);
    let compiled: Vec<Compiled<'_>> = attempts.iter().map(Compiled::new).collect();

    let suggestions: Vec<&Word> = bucket
        .iter()
        .filter(|&candidate| compiled.iter().all(|c| c.admits(candidate)))
        .collect();

    log::debug!(
        "{} attempts narrowed {} words of length {length} to {}",
        attempts.len(),
        bucket.len(),
        suggestions.len()
    );

    suggestions
}
