//! Quartiles command
//!
//! Places the given tiles on a board, selects them in order and reports the
//! words they spell.

use crate::dictionary::DictionaryIndex;
use crate::session::TileBoard;
use crate::solver::QuartileWords;

/// Result of analyzing a tile selection
pub struct QuartilesResult {
    /// Tiles that made it onto the board, in selection order
    pub tiles: Vec<String>,
    /// Inputs that were not valid 1-2 letter tiles or did not fit
    pub rejected: Vec<String>,
    pub words: QuartileWords,
    pub total_possibilities: u64,
}

/// Place and select every tile, then search the selection
#[must_use]
pub fn run_quartiles<S: AsRef<str>>(index: &DictionaryIndex, tiles: &[S]) -> QuartilesResult {
    let mut board = TileBoard::new();
    let mut rejected = Vec::new();

    for tile in tiles {
        let tile = tile.as_ref();
        match board.add_tile(tile) {
            Some(cell) => {
                board.toggle(cell);
            }
            None => {
                log::warn!("Skipping tile {tile:?}");
                rejected.push(tile.to_string());
            }
        }
    }

    QuartilesResult {
        tiles: board.selected_tiles().into_iter().map(str::to_string).collect(),
        rejected,
        words: board.analyze(index),
        total_possibilities: board.total_possibilities(),
    }
}
