//! Integration tests for the puzzle helpers.
//!
//! These run every matcher against the embedded reference dictionary, loaded
//! through the process-wide shared slot the CLI uses.

use std::collections::HashSet;

use wordvinder::core::{Attempt, LetterCounts, Submission, Word};
use wordvinder::dictionary::{self, DictionaryIndex, loader};
use wordvinder::session::{AttemptHistory, BoardState, TileBoard};
use wordvinder::solver::{
    generate_combinations, is_consistent, match_multiset, suggest_words, total_possibilities,
};

/// The shared reference index
fn reference() -> &'static DictionaryIndex {
    dictionary::global()
        .get_or_load(loader::load_reference_words)
        .expect("embedded list always loads")
}

fn texts<'a>(words: impl IntoIterator<Item = &'a Word>) -> Vec<&'a str> {
    words.into_iter().map(Word::text).collect()
}

mod dictionary_loading {
    use super::*;

    #[test]
    fn shared_index_is_built_once_across_threads() {
        let addresses: HashSet<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| std::ptr::from_ref(reference()) as usize))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(addresses.len(), 1);
        assert!(dictionary::global().is_ready());
    }

    #[test]
    fn buckets_hold_only_normalized_words_of_their_length() {
        let index = reference();
        for length in index.lengths() {
            for word in index.words_of_length(length) {
                assert_eq!(word.len(), length);
                assert!(word.text().bytes().all(|b| b.is_ascii_uppercase()));
            }
            let bucket = texts(index.words_of_length(length));
            let mut sorted = bucket.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(bucket, sorted, "bucket {length} not sorted and unique");
        }
    }

    #[test]
    fn anagram_view_agrees_with_buckets() {
        let index = reference();
        let letters = LetterCounts::from_letters(*b"CAT");
        let anagrams = texts(index.anagrams(&letters));
        assert!(anagrams.contains(&"CAT"));
        assert!(anagrams.contains(&"ACT"));
        for word in index.anagrams(&letters) {
            assert_eq!(word.letter_counts(), &letters);
        }
    }
}

mod wordle {
    use super::*;

    #[test]
    fn no_attempts_returns_whole_bucket() {
        let index = reference();
        let all = suggest_words(index, &[]);
        assert_eq!(all.len(), index.words_of_length(5).len());
        assert!(all.iter().zip(index.words_of_length(5)).all(|(a, b)| *a == b));
    }

    #[test]
    fn scored_answer_always_survives() {
        let index = reference();
        let bucket = index.words_of_length(5);
        let answers = bucket.iter().step_by(37).take(20);

        for answer in answers {
            for guess in bucket.iter().step_by(101).take(10) {
                let attempt = Attempt::score(guess, answer);
                let candidates = suggest_words(index, std::slice::from_ref(&attempt));
                assert!(
                    candidates.contains(&answer),
                    "{answer} lost after {attempt}"
                );
                assert!(candidates.iter().all(|c| is_consistent(c, &attempt)));
            }
        }
    }

    #[test]
    fn duplicate_letter_absent_limits_the_count() {
        let index = DictionaryIndex::build(["salad", "balls", "plaid", "local"]);
        let attempts = [Attempt::parse("allot", "Y-G--").unwrap()];
        let words = texts(suggest_words(&index, &attempts));

        // One L, in the green slot
        assert!(words.contains(&"SALAD"));
        // A second L is ruled out by the gray one
        assert!(!words.contains(&"BALLS"));
    }

    #[test]
    fn session_narrows_toward_the_answer() {
        let index = reference();
        let answer = Word::new("slate").unwrap();
        let mut history = AttemptHistory::new();
        let before = history.suggestions(index).len();

        for guess in ["crane", "allot"] {
            let guess = Word::new(guess).unwrap();
            history.push(Attempt::score(&guess, &answer)).unwrap();
        }
        let after = history.suggestions(index);
        assert!(after.len() < before);
        assert!(after.contains(&&answer));
    }
}

mod quartiles {
    use super::*;

    #[test]
    fn total_matches_closed_form() {
        for n in 0..=20u64 {
            let expected = (2..=4u64)
                .filter(|&g| g <= n)
                .map(|g| (n - g + 1..=n).product::<u64>())
                .sum::<u64>();
            assert_eq!(total_possibilities(n as usize), expected, "n = {n}");
        }
        assert_eq!(total_possibilities(0), 0);
        assert_eq!(total_possibilities(1), 0);
    }

    #[test]
    fn two_tile_words_are_ordered_pairs() {
        let tiles = ["QU", "AR", "TI", "LE", "S", "ST", "A", "R"];
        let words = generate_combinations(reference(), &tiles);

        for word in &words.two_tiles {
            let spelled = tiles.iter().enumerate().any(|(i, a)| {
                tiles
                    .iter()
                    .enumerate()
                    .any(|(j, b)| i != j && format!("{a}{b}") == word.text())
            });
            assert!(spelled, "{word} is not two tiles");
            assert!(reference().contains(word.text()));
        }
    }

    #[test]
    fn board_finds_quartile() {
        let mut board = TileBoard::from_tiles(&["le", "ti", "ar", "qu"]);
        for cell in [3, 2, 1, 0] {
            board.toggle(cell);
        }
        let words = board.analyze(reference());
        assert!(texts(&words.four_tiles).contains(&"QUARTILE"));
        assert!(texts(&words.two_tiles).contains(&"TILE"));
        assert_eq!(board.total_possibilities(), 60);
    }
}

mod wordscapes {
    use super::*;

    #[test]
    fn cat_letters() {
        let groups = match_multiset(reference(), &Submission::from_tokens(["C", "A", "T"]), &[] as &[&str]);
        let three = groups.iter().find(|g| g.length == 3).unwrap();
        let words = texts(&three.words);
        assert!(words.contains(&"CAT"));
        assert!(words.contains(&"ACT"));

        let bag = LetterCounts::from_letters(*b"CAT");
        for group in &groups {
            assert!(group.words.iter().all(|w| bag.can_build(w)));
        }
    }

    #[test]
    fn solved_words_are_excluded_case_insensitively() {
        let submission = Submission::from_tokens(["c", "a", "t"]);
        let groups = match_multiset(reference(), &submission, &["cAt"]);
        assert!(groups.iter().all(|g| g.words.iter().all(|w| w.text() != "CAT")));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let submission = Submission::from_tokens(["coast"]);
        let first = match_multiset(reference(), &submission, &["coat"]);
        let second = match_multiset(reference(), &submission, &["coat"]);
        assert_eq!(first, second);
        for group in &first {
            let words = texts(&group.words);
            let mut sorted = words.clone();
            sorted.sort_unstable();
            assert_eq!(words, sorted);
        }
    }

    #[test]
    fn board_json_pipeline() {
        let board = BoardState::from_json(
            r#"{
                "letters": ["C", "O", "A", "S", "T"],
                "missingByLength": [{"length": 5, "count": 1}],
                "solvedWordsByLength": [{"length": 4, "words": ["coat"]}]
            }"#,
        )
        .unwrap();

        let groups = match_multiset(reference(), &board.to_submission(), &board.solved_words());
        assert!(groups.iter().all(|g| g.length == 5));
        assert!(texts(&groups[0].words).contains(&"COAST"));
    }
}
