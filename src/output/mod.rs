//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_dictionary_error, print_quartiles_result, print_wordle_result,
    print_wordscapes_result,
};
