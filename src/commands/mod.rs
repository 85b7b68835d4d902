//! Command implementations

pub mod benchmark;
pub mod quartiles;
pub mod simple;
pub mod wordle;
pub mod wordscapes;

pub use benchmark::{BenchmarkResult, KindStats, QueryKind, run_benchmark};
pub use quartiles::{QuartilesResult, run_quartiles};
pub use simple::run_simple;
pub use wordle::{WordleResult, run_wordle};
pub use wordscapes::{WordscapesConfig, WordscapesResult, run_wordscapes};
