//! Caller-owned puzzle state
//!
//! The solvers are pure functions; these types hold what changes between
//! calls (Wordle rows, the Quartiles board, an analyzed Wordscapes board) and
//! feed it back in.

mod attempts;
mod board_state;
mod tiles;

pub use attempts::{AttemptHistory, MAX_ATTEMPTS, SessionError};
pub use board_state::{BoardState, MissingSlot, SolvedWords, target_word_lengths};
pub use tiles::{BOARD_SIZE, MAX_TILE_LETTERS, TileBoard};
