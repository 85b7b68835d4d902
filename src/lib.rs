//! WordVinder
//!
//! Helpers for three word puzzles, all resolved against one shared reference
//! dictionary: a Wordle constraint solver, a Quartiles tile combiner and a
//! Wordscapes letter matcher.
//!
//! # Quick Start
//!
//! ```rust
//! use wordvinder::core::{Attempt, Submission};
//! use wordvinder::dictionary::{self, loader};
//! use wordvinder::solver::{generate_combinations, match_multiset, suggest_words};
//!
//! let index = dictionary::global()
//!     .get_or_load(loader::load_reference_words)
//!     .unwrap();
//!
//! // Wordle: rows so far
//! let rows = vec![Attempt::parse("crane", "--G-G").unwrap()];
//! let candidates = suggest_words(index, &rows);
//! assert!(candidates.iter().any(|w| w.text() == "SLATE"));
//!
//! // Quartiles: selected tiles
//! let words = generate_combinations(index, &["ti", "le"]);
//! println!("{} words", words.len());
//!
//! // Wordscapes: letter wheel
//! let groups = match_multiset(index, &Submission::from_tokens(["c", "a", "t"]), &[] as &[&str]);
//! assert!(!groups.is_empty());
//! ```

// Core domain types
pub mod core;

// Reference word list and its index
pub mod dictionary;

// Matching algorithms
pub mod solver;

// Caller-owned puzzle state
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
