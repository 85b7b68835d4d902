//! Quartiles combination generator
//!
//! Concatenates ordered arrangements of 2, 3 and 4 selected tiles and keeps
//! those that spell a dictionary word. The size of the arrangement space is
//! reported separately, in closed form.

use crate::core::Word;
use crate::dictionary::DictionaryIndex;
use std::collections::BTreeSet;

/// Fewest tiles in a candidate word
pub const MIN_GROUP_SIZE: usize = 2;

/// Most tiles in a candidate word
pub const MAX_GROUP_SIZE: usize = 4;

const GROUP_COUNT: usize = MAX_GROUP_SIZE - MIN_GROUP_SIZE + 1;

/// Dictionary words found, bucketed by how many tiles spell them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuartileWords {
    pub two_tiles: Vec<Word>,
    pub three_tiles: Vec<Word>,
    pub four_tiles: Vec<Word>,
}

impl QuartileWords {
    /// Words built from exactly `tile_count` tiles
    #[must_use]
    pub fn with_tile_count(&self, tile_count: usize) -> &[Word] {
        match tile_count {
            2 => &self.two_tiles,
            3 => &self.three_tiles,
            4 => &self.four_tiles,
            _ => &[],
        }
    }

    /// Total words across all buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.two_tiles.len() + self.three_tiles.len() + self.four_tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Uppercase letters of a tile, everything else stripped
#[must_use]
pub fn normalize_tile(tile: &str) -> String {
    tile.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Find every dictionary word spelled by 2-4 distinct selected tiles
///
/// Tile order matters: each permutation is tried, so `["NE", "ST"]` can yield
/// both `NEST` and `STNE` if both were words. Each bucket is deduplicated and
/// alphabetical. A word reachable with different tile counts is listed in
/// each matching bucket.
///
/// # Examples
/// ```
/// use wordvinder::dictionary::DictionaryIndex;
/// use wordvinder::solver::generate_combinations;
///
/// let index = DictionaryIndex::build(["quite", "quiet", "suite"]);
/// let words = generate_combinations(&index, &["qu", "it", "e", "su"]);
/// let found: Vec<&str> = words.three_tiles.iter().map(|w| w.text()).collect();
/// assert_eq!(found, ["QUITE", "SUITE"]);
/// ```
#[must_use]
pub fn generate_combinations<S: AsRef<str>>(index: &DictionaryIndex, tiles: &[S]) -> QuartileWords {
    let tiles: Vec<String> = tiles
        .iter()
        .map(|tile| normalize_tile(tile.as_ref()))
        .filter(|tile| !tile.is_empty())
        .collect();

    let mut found: [BTreeSet<Word>; GROUP_COUNT] = Default::default();

    if tiles.len() >= MIN_GROUP_SIZE {
        let mut search = Search {
            index,
            tiles: &tiles,
            used: vec![false; tiles.len()],
            buffer: String::with_capacity(MAX_GROUP_SIZE * 2),
            found: &mut found,
        };
        search.extend(0);
    }

    let [two, three, four] = found;
    let words = QuartileWords {
        two_tiles: two.into_iter().collect(),
        three_tiles: three.into_iter().collect(),
        four_tiles: four.into_iter().collect(),
    };

    log::debug!(
        "{} tiles produced {} words ({} possible arrangements)",
        tiles.len(),
        words.len(),
        total_possibilities(tiles.len())
    );

    words
}

/// Depth-first walk over tile permutations up to `MAX_GROUP_SIZE` long
struct Search<'a> {
    index: &'a DictionaryIndex,
    tiles: &'a [String],
    used: Vec<bool>,
    buffer: String,
    found: &'a mut [BTreeSet<Word>; GROUP_COUNT],
}

impl Search<'_> {
    fn extend(&mut self, depth: usize) {
        if depth >= MIN_GROUP_SIZE
            && let Some(word) = self.index.get(&self.buffer)
        {
            self.found[depth - MIN_GROUP_SIZE].insert(word.clone());
        }

        if depth == MAX_GROUP_SIZE {
            return;
        }

        for i in 0..self.tiles.len() {
            if self.used[i] {
                continue;
            }

            let mark = self.buffer.len();
            self.used[i] = true;
            self.buffer.push_str(&self.tiles[i]);

            self.extend(depth + 1);

            self.buffer.truncate(mark);
            self.used[i] = false;
        }
    }
}

/// Number of ordered arrangements of 2, 3 and 4 tiles out of `n`
///
/// Equals `Σ n!/(n-g)!` for `g` in 2..=4, with terms for `g > n` being zero.
/// Computed directly from falling factorials, never by enumeration, and
/// saturating at `u64::MAX`.
///
/// # Examples
/// ```
/// use wordvinder::solver::total_possibilities;
///
/// assert_eq!(total_possibilities(1), 0);
/// assert_eq!(total_possibilities(2), 2);
/// assert_eq!(total_possibilities(4), 12 + 24 + 24);
/// ```
#[must_use]
pub fn total_possibilities(n: usize) -> u64 {
    (MIN_GROUP_SIZE..=MAX_GROUP_SIZE)
        .map(|group| falling_factorial(n, group))
        .fold(0u64, u64::saturating_add)
}

/// `n * (n-1) * ... * (n-k+1)`, zero when `k > n`
fn falling_factorial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    ((n - k + 1)..=n)
        .map(|factor| factor as u64)
        .fold(1u64, u64::saturating_mul)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    fn index() -> DictionaryIndex {
        DictionaryIndex::build([
            "quit", "quite", "quiet", "quilt", "tile", "tiles", "lets", "its", "sit", "quartile",
            "quartiles", "art", "tart", "start", "star", "tar", "rats", "arts",
        ])
    }

    #[test]
    fn fewer_than_two_tiles_finds_nothing() {
        let index = index();
        assert!(generate_combinations::<&str>(&index, &[]).is_empty());
        assert!(generate_combinations(&index, &["quit"]).is_empty());
    }

    #[test]
    fn buckets_by_tile_count() {
        let index = index();
        let words = generate_combinations(&index, &["qu", "ar", "ti", "le", "s"]);

        assert_eq!(texts(&words.two_tiles), ["TILE"]);
        assert_eq!(texts(&words.three_tiles), ["TILES"]);
        assert_eq!(texts(&words.four_tiles), ["QUARTILE"]);
        assert!(words.with_tile_count(5).is_empty());
    }

    #[test]
    fn order_matters() {
        let index = index();
        let words = generate_combinations(&index, &["s", "ar", "t"]);
        assert_eq!(texts(&words.three_tiles), ["ARTS", "STAR"]);
        assert_eq!(texts(&words.two_tiles), ["ART", "TAR"]);
    }

    #[test]
    fn duplicate_tiles_deduplicate_results() {
        let index = index();
        let words = generate_combinations(&index, &["t", "ar", "t"]);
        assert_eq!(texts(&words.three_tiles), ["TART"]);
        assert_eq!(texts(&words.two_tiles), ["ART", "TAR"]);
    }

    #[test]
    fn word_listed_in_each_reachable_bucket() {
        let index = index();
        let words = generate_combinations(&index, &["s", "it", "i", "t"]);
        assert_eq!(texts(&words.two_tiles), ["ITS", "SIT"]);
        assert_eq!(texts(&words.three_tiles), ["ITS", "SIT"]);
    }

    #[test]
    fn tiles_are_normalized() {
        let index = index();
        let words = generate_combinations(&index, &[" qu", "I-t", "", "e!"]);
        assert_eq!(texts(&words.three_tiles), ["QUITE"]);
        assert_eq!(texts(&words.two_tiles), ["QUIT"]);
    }

    #[test]
    fn every_two_tile_word_is_an_ordered_pair() {
        let index = index();
        let tiles = ["qu", "it", "e", "ti", "le", "s", "ar", "t"];
        let words = generate_combinations(&index, &tiles);

        for word in &words.two_tiles {
            let is_pair = tiles.iter().enumerate().any(|(i, a)| {
                tiles.iter().enumerate().any(|(j, b)| {
                    i != j && format!("{a}{b}").to_ascii_uppercase() == word.text()
                })
            });
            assert!(is_pair, "{word} is not a pair of tiles");
            assert!(index.contains(word.text()));
        }
    }

    #[test]
    fn results_are_deterministic() {
        let index = index();
        let tiles = ["qu", "ar", "ti", "le", "s", "t"];
        assert_eq!(
            generate_combinations(&index, &tiles),
            generate_combinations(&index, &tiles)
        );
    }

    #[test]
    fn total_possibilities_small_values() {
        assert_eq!(total_possibilities(0), 0);
        assert_eq!(total_possibilities(1), 0);
        assert_eq!(total_possibilities(2), 2);
        assert_eq!(total_possibilities(3), 6 + 6);
        assert_eq!(total_possibilities(5), 20 + 60 + 120);
    }

    #[test]
    fn total_possibilities_full_board() {
        // 20 tiles: 380 + 6840 + 116280
        assert_eq!(total_possibilities(20), 123_500);
    }

    #[test]
    fn total_possibilities_matches_formula() {
        fn factorial(n: u64) -> u64 {
            (1..=n).product()
        }
        for n in 4..=20u64 {
            let expected: u64 = (2..=4).map(|g| factorial(n) / factorial(n - g)).sum();
            assert_eq!(total_possibilities(n as usize), expected, "n = {n}");
        }
    }

    #[test]
    fn total_possibilities_saturates() {
        assert_eq!(total_possibilities(usize::MAX), u64::MAX);
    }
}
