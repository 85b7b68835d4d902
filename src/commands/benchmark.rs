//! Benchmark command
//!
//! Fires random puzzle queries from a thread pool against one shared
//! dictionary. Every query is built from a known answer, so each run also
//! checks that the answer is found.

use crate::core::{Attempt, Submission, Word};
use crate::dictionary::DictionaryIndex;
use crate::solver::{MAX_GROUP_SIZE, generate_combinations, match_multiset, suggest_words};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::fmt;
use std::time::{Duration, Instant};

/// The three puzzle helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryKind {
    Wordle,
    Quartiles,
    Wordscapes,
}

impl QueryKind {
    pub const ALL: [Self; 3] = [Self::Wordle, Self::Quartiles, Self::Wordscapes];
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Wordle => "wordle",
            Self::Quartiles => "quartiles",
            Self::Wordscapes => "wordscapes",
        };
        f.pad(name)
    }
}

/// A query plus the word it must turn up
#[derive(Debug, Clone)]
enum Query {
    Wordle { answer: Word, guess: Word },
    Quartiles { answer: Word, tiles: Vec<String> },
    Wordscapes { answer: Word },
}

impl Query {
    const fn kind(&self) -> QueryKind {
        match self {
            Self::Wordle { .. } => QueryKind::Wordle,
            Self::Quartiles { .. } => QueryKind::Quartiles,
            Self::Wordscapes { .. } => QueryKind::Wordscapes,
        }
    }

    /// Run the query; returns (matches, answer found)
    fn run(&self, index: &DictionaryIndex) -> (usize, bool) {
        match self {
            Self::Wordle { answer, guess } => {
                let attempts = [Attempt::score(guess, answer)];
                let words = suggest_words(index, &attempts);
                (words.len(), words.contains(&answer))
            }
            Self::Quartiles { answer, tiles } => {
                let words = generate_combinations(index, tiles);
                (words.len(), words.with_tile_count(tiles.len()).contains(answer))
            }
            Self::Wordscapes { answer } => {
                let submission = Submission::from_tokens([answer.text()]);
                let groups = match_multiset(index, &submission, &[] as &[&str]);
                let found = groups
                    .iter()
                    .any(|group| group.words.contains(answer));
                (groups.iter().map(|g| g.words.len()).sum(), found)
            }
        }
    }
}

/// Per-kind totals
#[derive(Debug, Clone, Default)]
pub struct KindStats {
    pub queries: usize,
    pub matches: usize,
    pub misses: usize,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_queries: usize,
    pub per_kind: Vec<(QueryKind, KindStats)>,
    pub duration: Duration,
    pub queries_per_second: f64,
}

impl BenchmarkResult {
    /// Queries whose answer was not found
    #[must_use]
    pub fn misses(&self) -> usize {
        self.per_kind.iter().map(|(_, stats)| stats.misses).sum()
    }
}

/// Run `count` random queries in parallel
///
/// A `seed` makes the query mix reproducible.
#[must_use]
pub fn run_benchmark(index: &DictionaryIndex, count: usize, seed: Option<u64>) -> BenchmarkResult {
    let mut rng = seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
    let queries: Vec<Query> = (0..count).filter_map(|_| random_query(index, &mut rng)).collect();

    log::info!("Running {} queries on {} threads", queries.len(), rayon::current_num_threads());

    let pb = ProgressBar::new(queries.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let outcomes: Vec<(QueryKind, usize, bool)> = queries
        .par_iter()
        .map(|query| {
            let (matches, found) = query.run(index);
            if !found {
                log::warn!("Answer missing from {} query {query:?}", query.kind());
            }
            pb.inc(1);
            (query.kind(), matches, found)
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_with_message("done");

    let per_kind = QueryKind::ALL
        .into_iter()
        .map(|kind| {
            let mut stats = KindStats::default();
            for &(_, matches, found) in outcomes.iter().filter(|(k, _, _)| *k == kind) {
                stats.queries += 1;
                stats.matches += matches;
                stats.misses += usize::from(!found);
            }
            (kind, stats)
        })
        .collect();

    let total_queries = outcomes.len();
    BenchmarkResult {
        total_queries,
        per_kind,
        duration,
        queries_per_second: total_queries as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

fn random_query(index: &DictionaryIndex, rng: &mut StdRng) -> Option<Query> {
    let kind = *QueryKind::ALL.choose(rng)?;
    match kind {
        QueryKind::Wordle => {
            let bucket = index.words_of_length(5);
            Some(Query::Wordle {
                answer: bucket.choose(rng)?.clone(),
                guess: bucket.choose(rng)?.clone(),
            })
        }
        QueryKind::Quartiles => {
            let length = rng.random_range(4..=8);
            let answer = index.words_of_length(length).choose(rng)?.clone();
            let mut tiles = split_into_tiles(answer.text(), rng);
            tiles.shuffle(rng);
            Some(Query::Quartiles { answer, tiles })
        }
        QueryKind::Wordscapes => {
            let length = rng.random_range(3..=8);
            let answer = index.words_of_length(length).choose(rng)?.clone();
            Some(Query::Wordscapes { answer })
        }
    }
}

/// Cut a word into 2-4 tiles of 1-2 letters
fn split_into_tiles(text: &str, rng: &mut StdRng) -> Vec<String> {
    let mut tiles = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let tiles_left = MAX_GROUP_SIZE.saturating_sub(tiles.len()).max(1);
        // Two letters when single ones would not fit in the tiles left
        let must_pair = rest.len() > 2 * (tiles_left - 1);
        let take = if must_pair || (rest.len() >= 2 && rng.random_bool(0.5)) {
            2.min(rest.len())
        } else {
            1
        };
        let (tile, tail) = rest.split_at(take);
        tiles.push(tile.to_string());
        rest = tail;
    }
    tiles
}
