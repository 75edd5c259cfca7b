mod layout;

use std::collections::BTreeSet;

pub use layout::*;

use crate::{
    check_connectivity, newly_placed, score_move, validate_placement, Dictionary, FormedWords,
    IllegalMove, Letter, Move, ScoreDelta,
};

pub const BOARD_SIZE: usize = 15;

/// The cell that the first word of the game must cover.
pub const OPENING: (usize, usize) = (7, 7);

/// The kind of a special square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpecialKind {
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
    /// The center square. It doubles the word like [`SpecialKind::DoubleWord`].
    Opening,
}

impl SpecialKind {
    pub fn letter_multiplier(self) -> u32 {
        match self {
            SpecialKind::DoubleLetter => 2,
            SpecialKind::TripleLetter => 3,
            _ => 1,
        }
    }

    pub fn word_multiplier(self) -> u32 {
        match self {
            SpecialKind::DoubleWord | SpecialKind::Opening => 2,
            SpecialKind::TripleWord => 3,
            _ => 1,
        }
    }
}

/// A tile that has been committed to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlacedTile {
    pub letter: Letter,
    /// Blanks keep scoring zero, also in words formed by later moves.
    pub is_blank: bool,
}

impl PlacedTile {
    pub fn value(self) -> u32 {
        if self.is_blank {
            0
        } else {
            self.letter.value()
        }
    }
}

/// A single square of the board.
///
/// An `Empty` or `Special` cell becomes `Occupied` exactly once, when a move
/// is committed, and never goes back.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Special(SpecialKind),
    Occupied(PlacedTile),
}

impl Cell {
    pub fn tile(self) -> Option<PlacedTile> {
        match self {
            Cell::Occupied(tile) => Some(tile),
            _ => None,
        }
    }

    pub fn is_occupied(self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    /// The special square under this cell, as long as it's not been used up.
    pub fn special(self) -> Option<SpecialKind> {
        match self {
            Cell::Special(kind) => Some(kind),
            _ => None,
        }
    }
}

/// The 15 x 15 playing grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    /// Row-major.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    /// Derived from `cells`.
    num_occupied: usize,
}

/// The result of checking a move against a board, ready to be committed.
///
/// This struct ties together the board and the move, so the move can only
/// be committed onto the board it was checked against.
pub struct PlayCalculation<'a> {
    board: &'a Board,
    mv: Move,
    /// Indices into the word of the letters that are not on the board yet.
    placed: Vec<usize>,
    /// The main word and all cross-words formed by the move.
    pub words: FormedWords,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board with the standard special squares.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, cells_in_row) in cells.iter_mut().enumerate() {
            for (col, cell) in cells_in_row.iter_mut().enumerate() {
                if let Some(kind) = standard_special_at(row, col) {
                    *cell = Cell::Special(kind);
                }
            }
        }
        Self {
            cells,
            num_occupied: 0,
        }
    }

    pub fn is_in_bounds(row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    /// The cell at the given coordinates.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, IllegalMove> {
        self.get(row, col)
            .ok_or(IllegalMove::OutOfBounds { row, col })
    }

    /// Like [`Self::cell_at()`], for when out of bounds is not an error.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    pub fn tile_at(&self, row: usize, col: usize) -> Option<PlacedTile> {
        self.get(row, col).and_then(Cell::tile)
    }

    pub fn letter_at(&self, row: usize, col: usize) -> Option<Letter> {
        self.tile_at(row, col).map(|tile| tile.letter)
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.tile_at(row, col).is_some()
    }

    pub fn opening(&self) -> (usize, usize) {
        OPENING
    }

    /// True as long as no tile has been placed, i.e. before the first move.
    pub fn is_empty(&self) -> bool {
        self.num_occupied == 0
    }

    pub fn num_occupied(&self) -> usize {
        self.num_occupied
    }

    /// All occupied cells, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, PlacedTile)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells_in_row)| {
            cells_in_row
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.tile().map(|tile| (row, col, tile)))
        })
    }

    /// The in-bounds cells above, below, left and right of the given one.
    pub fn neighbors(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        [
            row.checked_sub(1).map(|r| (r, col)),
            Some((row + 1, col)),
            col.checked_sub(1).map(|c| (row, c)),
            Some((row, col + 1)),
        ]
        .into_iter()
        .flatten()
        .filter(|&(r, c)| Self::is_in_bounds(r, c))
    }

    pub fn has_occupied_neighbor(&self, row: usize, col: usize) -> bool {
        Self::neighbors(row, col).any(|(r, c)| self.is_occupied(r, c))
    }

    /// Writes the move's letters onto the board.
    ///
    /// This performs no legality checks at all, call it only for moves that
    /// passed [`Self::calculate()`] (or use [`PlayCalculation::execute()`]).
    /// Cells that are already occupied keep their tile, so committing the
    /// same move twice changes nothing.
    pub fn commit(&mut self, mv: &Move) {
        for (idx, ((row, col), letter)) in mv.cells().enumerate() {
            let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) else {
                debug_assert!(false, "Committed a move that leaves the board: {}", mv);
                continue;
            };
            if !cell.is_occupied() {
                *cell = Cell::Occupied(PlacedTile {
                    letter,
                    is_blank: mv.is_blank(idx),
                });
                self.num_occupied += 1;
            }
        }
    }

    /// Check a move and calculate its effects, without changing the board.
    ///
    /// This runs the placement checks, then the connectivity and dictionary
    /// checks, and returns the first error found. Whether the player has the
    /// tiles for the move is not checked here, see
    /// [`validate_and_commit()`](crate::validate_and_commit).
    pub fn calculate<D: Dictionary>(
        &self,
        mv: &Move,
        dict: &D,
    ) -> Result<PlayCalculation<'_>, IllegalMove> {
        validate_placement(self, mv)?;
        let words = check_connectivity(self, mv, dict)?;
        let placed = newly_placed(self, mv);
        let mut mv = mv.clone();
        mv.blanks.retain(|idx| placed.contains(idx));
        Ok(PlayCalculation {
            board: self,
            mv,
            placed,
            words,
        })
    }
}

impl<'a> PlayCalculation<'a> {
    pub fn mv(&self) -> &Move {
        &self.mv
    }

    pub fn placed(&self) -> &[usize] {
        &self.placed
    }

    /// Replaces which of the newly placed letters are played with blanks.
    pub fn assign_blanks(&mut self, blanks: BTreeSet<usize>) {
        self.mv.blanks = blanks;
    }

    /// The points this move is worth.
    pub fn score(&self) -> u32 {
        score_move(self.board, &self.mv, &self.words).points
    }

    pub fn score_delta(&self) -> ScoreDelta {
        score_move(self.board, &self.mv, &self.words)
    }

    pub fn into_move(self) -> Move {
        self.mv
    }

    /// Commit the move, and get the new board.
    pub fn execute(self) -> Board {
        let mut board = self.board.clone();
        board.commit(&self.mv);
        board
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::visualize_board(self))
    }
}
