//! Word-matching engine
//!
//! Three independent, pure algorithms over a shared [`DictionaryIndex`]:
//! - [`suggest_words`]: Wordle constraint filtering
//! - [`generate_combinations`]: Quartiles tile permutations
//! - [`match_multiset`]: Wordscapes letter-bag matching
//!
//! [`DictionaryIndex`]: crate::dictionary::DictionaryIndex

mod combinations;
mod constraints;
mod multiset;

pub use combinations::{
    MAX_GROUP_SIZE, MIN_GROUP_SIZE, QuartileWords, generate_combinations, normalize_tile,
    total_possibilities,
};
pub use constraints::{is_consistent, suggest_words, suggest_words_of_length};
pub use multiset::match_multiset;
