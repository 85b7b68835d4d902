//! Quartiles tile board
//!
//! A fixed grid of cells, each empty or holding a short tile, plus the
//! ordered selection the combination generator reads from.

use crate::dictionary::DictionaryIndex;
use crate::solver::{QuartileWords, generate_combinations, normalize_tile, total_possibilities};

/// Cells on a Quartiles board
pub const BOARD_SIZE: usize = 20;

/// Longest tile text accepted by the board
pub const MAX_TILE_LETTERS: usize = 2;

/// Tiles on the board and the cells picked so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileBoard {
    cells: Vec<Option<String>>,
    selected: Vec<usize>,
}

impl Default for TileBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl TileBoard {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: vec![None; BOARD_SIZE],
            selected: Vec::new(),
        }
    }

    /// Board pre-filled from a saved layout
    ///
    /// Extra tiles are dropped and missing cells stay empty. Invalid tiles
    /// leave their cell empty.
    #[must_use]
    pub fn from_tiles<S: AsRef<str>>(tiles: &[S]) -> Self {
        let mut board = Self::new();
        for (cell, tile) in board.cells.iter_mut().zip(tiles) {
            *cell = valid_tile(tile.as_ref());
        }
        board
    }

    /// Put a tile in the first empty cell
    ///
    /// Returns the cell used, or `None` when the board is full or the tile is
    /// not 1-2 letters.
    pub fn add_tile(&mut self, text: &str) -> Option<usize> {
        let tile = valid_tile(text)?;
        let slot = self.cells.iter().position(Option::is_none)?;
        self.cells[slot] = Some(tile);
        Some(slot)
    }

    /// Select a cell, or deselect it if already selected
    ///
    /// Indices that are out of range or point at an empty cell are ignored.
    /// Returns whether the cell is selected afterwards.
    pub fn toggle(&mut self, index: usize) -> bool {
        if let Some(pos) = self.selected.iter().position(|&i| i == index) {
            self.selected.remove(pos);
            return false;
        }
        if self.tile(index).is_none() {
            return false;
        }
        self.selected.push(index);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Empty every cell and drop the selection
    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.selected.clear();
    }

    /// Tile text in a cell
    #[must_use]
    pub fn tile(&self, index: usize) -> Option<&str> {
        self.cells.get(index)?.as_deref()
    }

    /// Selected cell indices in selection order
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        &self.selected
    }

    /// Selected tile texts in selection order
    #[must_use]
    pub fn selected_tiles(&self) -> Vec<&str> {
        self.selected.iter().filter_map(|&i| self.tile(i)).collect()
    }

    /// Every cell, `None` where empty
    #[must_use]
    pub fn cells(&self) -> &[Option<String>] {
        &self.cells
    }

    /// Words formed by the current selection
    #[must_use]
    pub fn analyze(&self, index: &DictionaryIndex) -> QuartileWords {
        generate_combinations(index, &self.selected_tiles())
    }

    /// Size of the arrangement space for the current selection
    #[must_use]
    pub fn total_possibilities(&self) -> u64 {
        total_possibilities(self.selected_tiles().len())
    }
}

fn valid_tile(text: &str) -> Option<String> {
    let tile = normalize_tile(text);
    (1..=MAX_TILE_LETTERS).contains(&tile.len()).then_some(tile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_fills_first_empty_cell() {
        let mut board = TileBoard::new();
        assert_eq!(board.add_tile("qu"), Some(0));
        assert_eq!(board.add_tile("it"), Some(1));
        assert_eq!(board.tile(0), Some("QU"));
        assert_eq!(board.tile(1), Some("IT"));
        assert_eq!(board.tile(2), None);
    }

    #[test]
    fn add_rejects_invalid_tiles() {
        let mut board = TileBoard::new();
        assert_eq!(board.add_tile(""), None);
        assert_eq!(board.add_tile("abc"), None);
        assert_eq!(board.add_tile("1"), None);
        assert!(board.cells().iter().all(Option::is_none));
    }

    #[test]
    fn add_to_full_board_is_noop() {
        let mut board = TileBoard::new();
        for _ in 0..BOARD_SIZE {
            assert!(board.add_tile("a").is_some());
        }
        assert_eq!(board.add_tile("b"), None);
    }

    #[test]
    fn toggle_keeps_insertion_order() {
        let mut board = TileBoard::from_tiles(&["ar", "qu", "ti", "le"]);
        assert!(board.toggle(1));
        assert!(board.toggle(0));
        assert!(board.toggle(2));
        assert!(board.toggle(3));
        assert_eq!(board.selected_tiles(), ["QU", "AR", "TI", "LE"]);

        assert!(!board.toggle(0));
        assert_eq!(board.selection(), [1, 2, 3]);
    }

    #[test]
    fn toggle_ignores_invalid_indices() {
        let mut board = TileBoard::from_tiles(&["qu"]);
        assert!(!board.toggle(5)); // Empty cell
        assert!(!board.toggle(BOARD_SIZE + 3)); // Out of range
        assert!(board.selection().is_empty());
    }

    #[test]
    fn from_tiles_truncates_and_pads() {
        let many: Vec<String> = (0..30).map(|_| "ab".to_string()).collect();
        let board = TileBoard::from_tiles(&many);
        assert_eq!(board.cells().len(), BOARD_SIZE);
        assert!(board.cells().iter().all(Option::is_some));

        let few = TileBoard::from_tiles(&["a", "toolong", "b"]);
        assert_eq!(few.cells().len(), BOARD_SIZE);
        assert_eq!(few.tile(0), Some("A"));
        assert_eq!(few.tile(1), None);
        assert_eq!(few.tile(2), Some("B"));
    }

    #[test]
    fn clear_board() {
        let mut board = TileBoard::from_tiles(&["qu", "it"]);
        board.toggle(0);
        board.clear_selection();
        assert!(board.selection().is_empty());

        board.toggle(1);
        board.clear();
        assert!(board.cells().iter().all(Option::is_none));
        assert!(board.selection().is_empty());
    }

    #[test]
    fn analyze_uses_selection_only() {
        let index = DictionaryIndex::build(["quit", "quite", "tile"]);
        let mut board = TileBoard::from_tiles(&["qu", "it", "e", "ti", "le"]);
        board.toggle(0);
        board.toggle(1);

        let words = board.analyze(&index);
        assert_eq!(words.two_tiles.len(), 1);
        assert_eq!(words.two_tiles[0].text(), "QUIT");
        assert!(words.three_tiles.is_empty());
        assert_eq!(board.total_possibilities(), 2);
    }
}
