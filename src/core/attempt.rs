//! Wordle attempts: guessed letters paired with their feedback
//!
//! An attempt is one row of the board. Each slot holds an optional letter
//! (empty while the row is being typed) and the colour the game gave it:
//! - Correct (green): letter in this position
//! - Present (yellow): letter in the word, elsewhere
//! - Absent (gray): no (further) copies of the letter

use super::{LetterCounts, Word};
use std::fmt;
use std::str::FromStr;

/// Letters per Wordle row
pub const WORD_LENGTH: usize = 5;

/// Feedback colour for a single slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    Correct,
    Present,
    Absent,
}

impl LetterState {
    /// Parse a feedback character
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'x'/⬜/⬛ for absent
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | 'X' | 'x' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Correct or Present
    #[inline]
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Correct | Self::Present)
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// One guessed position: an optional letter and its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterSlot {
    letter: Option<u8>,
    pub state: LetterState,
}

impl LetterSlot {
    /// Create a slot, folding the letter to uppercase
    ///
    /// Anything that is not an ASCII letter leaves the slot empty, which the
    /// solver treats as a wildcard.
    #[must_use]
    pub const fn new(letter: char, state: LetterState) -> Self {
        let letter = if letter.is_ascii_alphabetic() {
            Some((letter as u8).to_ascii_uppercase())
        } else {
            None
        };
        Self { letter, state }
    }

    /// A slot with no letter typed yet
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            letter: None,
            state: LetterState::Absent,
        }
    }

    /// The uppercase letter, if any
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<u8> {
        self.letter
    }
}

/// Error type for unparseable `GUESS:FEEDBACK` strings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackError {
    #[error("Expected GUESS:FEEDBACK, got {0:?}")]
    MissingSeparator(String),
    #[error("Guess has {guess} letters but feedback has {feedback}")]
    LengthMismatch { guess: usize, feedback: usize },
    #[error("Invalid feedback character {0:?} (use G, Y or -)")]
    InvalidState(char),
}

/// A submitted row: exactly one slot per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attempt {
    slots: Vec<LetterSlot>,
}

impl Attempt {
    /// Create a standard five-letter attempt
    ///
    /// Extra slots are dropped and missing slots are filled with wildcards.
    #[must_use]
    pub fn new(slots: impl IntoIterator<Item = LetterSlot>) -> Self {
        Self::with_length(slots, WORD_LENGTH)
    }

    /// Create an attempt normalized to `length` slots
    #[must_use]
    pub fn with_length(slots: impl IntoIterator<Item = LetterSlot>, length: usize) -> Self {
        let mut slots: Vec<LetterSlot> = slots.into_iter().take(length).collect();
        slots.resize(length, LetterSlot::empty());
        Self { slots }
    }

    /// Parse a guess and a feedback string of equal length
    ///
    /// `.` or `?` in the guess leaves that slot empty.
    ///
    /// # Errors
    /// Returns `FeedbackError` if the lengths differ or a feedback character
    /// is not recognised.
    ///
    /// # Examples
    /// ```
    /// use wordvinder::core::{Attempt, LetterState};
    ///
    /// let attempt = Attempt::parse("allot", "Y-G--").unwrap();
    /// assert_eq!(attempt.slots()[2].letter(), Some(b'L'));
    /// assert_eq!(attempt.slots()[2].state, LetterState::Correct);
    /// ```
    pub fn parse(guess: &str, feedback: &str) -> Result<Self, FeedbackError> {
        let letters: Vec<char> = guess.trim().chars().collect();
        let states: Vec<char> = feedback.trim().chars().collect();

        if letters.len() != states.len() {
            return Err(FeedbackError::LengthMismatch {
                guess: letters.len(),
                feedback: states.len(),
            });
        }

        let slots = letters
            .into_iter()
            .zip(states)
            .map(|(letter, state)| {
                LetterState::from_char(state)
                    .map(|state| LetterSlot::new(letter, state))
                    .ok_or(FeedbackError::InvalidState(state))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(slots))
    }

    /// Score `guess` against a known `answer` with the game's rules
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (greens) and remove them from the pool
    /// 2. Second pass: mark present-but-misplaced (yellows) from what is left
    ///
    /// # Examples
    /// ```
    /// use wordvinder::core::{Attempt, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// assert_eq!(Attempt::score(&guess, &answer).to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let guess_bytes = guess.bytes();
        let answer_bytes = answer.bytes();
        let mut states = vec![LetterState::Absent; guess_bytes.len()];
        let mut available = LetterCounts::new();

        // First pass: greens, collecting unmatched answer letters
        for (i, &letter) in guess_bytes.iter().enumerate() {
            match answer_bytes.get(i) {
                Some(&expected) if expected == letter => states[i] = LetterState::Correct,
                Some(&expected) => available.add(expected),
                None => {}
            }
        }
        for &expected in answer_bytes.iter().skip(guess_bytes.len()) {
            available.add(expected);
        }

        // Second pass: yellows from the remaining pool
        let mut used = LetterCounts::new();
        for (i, &letter) in guess_bytes.iter().enumerate() {
            if states[i] == LetterState::Correct {
                continue;
            }
            if used.count(letter) < available.count(letter) {
                states[i] = LetterState::Present;
                used.add(letter);
            }
        }

        let slots = guess_bytes
            .iter()
            .zip(states)
            .map(|(&letter, state)| LetterSlot::new(char::from(letter), state));

        Self::with_length(slots, guess_bytes.len())
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[LetterSlot] {
        &self.slots
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True when every slot is filled and green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.slots.is_empty()
            && self
                .slots
                .iter()
                .all(|slot| slot.letter.is_some() && slot.state == LetterState::Correct)
    }

    /// The guessed letters, with `.` for empty slots
    #[must_use]
    pub fn guess_text(&self) -> String {
        self.slots
            .iter()
            .map(|slot| slot.letter.map_or('.', char::from))
            .collect()
    }

    /// Feedback as an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.slots.iter().map(|slot| slot.state.to_emoji()).collect()
    }
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess_text(), self.to_emoji())
    }
}

impl FromStr for Attempt {
    type Err = FeedbackError;

    /// Parse `GUESS:FEEDBACK`, e.g. `crane:--G-G`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (guess, feedback) = s
            .split_once(':')
            .ok_or_else(|| FeedbackError::MissingSeparator(s.to_string()))?;
        Self::parse(guess, feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(attempt: &Attempt) -> Vec<LetterState> {
        attempt.slots().iter().map(|slot| slot.state).collect()
    }

    #[test]
    fn slot_normalizes_letter() {
        assert_eq!(LetterSlot::new('a', LetterState::Correct).letter(), Some(b'A'));
        assert_eq!(LetterSlot::new('?', LetterState::Correct).letter(), None);
        assert_eq!(LetterSlot::new('é', LetterState::Present).letter(), None);
    }

    #[test]
    fn attempt_pads_and_truncates() {
        let short = Attempt::new([LetterSlot::new('A', LetterState::Correct)]);
        assert_eq!(short.len(), WORD_LENGTH);
        assert_eq!(short.guess_text(), "A....");

        let long = Attempt::new(
            "ABCDEFG"
                .chars()
                .map(|c| LetterSlot::new(c, LetterState::Absent)),
        );
        assert_eq!(long.len(), WORD_LENGTH);
        assert_eq!(long.guess_text(), "ABCDE");
    }

    #[test]
    fn parse_valid() {
        let attempt: Attempt = "allot:Y-G--".parse().unwrap();
        assert_eq!(attempt.guess_text(), "ALLOT");
        assert_eq!(
            states(&attempt),
            [
                LetterState::Present,
                LetterState::Absent,
                LetterState::Correct,
                LetterState::Absent,
                LetterState::Absent,
            ]
        );
    }

    #[test]
    fn parse_emoji_and_placeholders() {
        let attempt = Attempt::parse("cr.ne", "🟩🟨⬜🟩⬛").unwrap();
        assert_eq!(attempt.guess_text(), "CR.NE");
        assert_eq!(attempt.to_emoji(), "🟩🟨⬜🟩⬜");
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(
            "crane".parse::<Attempt>(),
            Err(FeedbackError::MissingSeparator("crane".to_string()))
        );
        assert_eq!(
            Attempt::parse("crane", "GYG"),
            Err(FeedbackError::LengthMismatch {
                guess: 5,
                feedback: 3
            })
        );
        assert_eq!(
            Attempt::parse("crane", "GYGZ-"),
            Err(FeedbackError::InvalidState('Z'))
        );
    }

    #[test]
    fn score_all_gray() {
        let guess = Word::new("abcde").unwrap();
        let answer = Word::new("fghij").unwrap();
        assert_eq!(Attempt::score(&guess, &answer).to_emoji(), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn score_perfect() {
        let word = Word::new("crane").unwrap();
        let attempt = Attempt::score(&word, &word);
        assert!(attempt.is_solved());
    }

    #[test]
    fn score_duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: first O yellow, second O green
        let guess = Word::new("robot").unwrap();
        let answer = Word::new("floor").unwrap();
        assert_eq!(Attempt::score(&guess, &answer).to_emoji(), "🟨🟨⬜🟩⬜");
    }

    #[test]
    fn score_duplicate_letters_surplus_is_gray() {
        // CLOAK has a single L, already matched in place
        let guess = Word::new("allot").unwrap();
        let answer = Word::new("cloak").unwrap();
        assert_eq!(Attempt::score(&guess, &answer).to_emoji(), "🟨🟩⬜🟨⬜");
    }

    #[test]
    fn unsolved_rows() {
        assert!(!Attempt::new(Vec::<LetterSlot>::new()).is_solved());
        assert!(!Attempt::parse("crane", "GGGGY").unwrap().is_solved());
    }
}
