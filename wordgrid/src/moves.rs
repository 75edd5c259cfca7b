use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{Letter, Word};

/// The direction in which a word is laid out.
///
/// `Horizontal` sorts before `Vertical`, which is relied upon for tie-breaking
/// in move search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right, along a row.
    Horizontal,
    /// Top to bottom, along a column.
    Vertical,
}

impl Direction {
    pub const BOTH: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

    /// The other direction.
    pub fn perpendicular(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// Moves `steps` cells forward from `(row, col)`.
    ///
    /// Returns `None` if the result would overflow, which is never a valid
    /// board position anyway.
    pub fn advance(self, (row, col): (usize, usize), steps: usize) -> Option<(usize, usize)> {
        match self {
            Direction::Horizontal => Some((row, col.checked_add(steps)?)),
            Direction::Vertical => Some((row.checked_add(steps)?, col)),
        }
    }

    /// Moves `steps` cells backward from `(row, col)`.
    pub fn retreat(self, (row, col): (usize, usize), steps: usize) -> Option<(usize, usize)> {
        match self {
            Direction::Horizontal => Some((row, col.checked_sub(steps)?)),
            Direction::Vertical => Some((row.checked_sub(steps)?, col)),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "horizontal"),
            Direction::Vertical => write!(f, "vertical"),
        }
    }
}

/// Specifies which word to play, and where.
///
/// This is a plain value: it does not touch the board until it's committed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub word: Word,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    /// Positions in `word` whose letter is played with a blank tile.
    ///
    /// The letter the blank stands for is the word's letter at that position.
    /// Positions that reuse a tile already on the board are ignored.
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    #[serde(default)]
    pub blanks: BTreeSet<usize>,
}

impl Move {
    pub fn new(word: Word, row: usize, col: usize, direction: Direction) -> Self {
        Self {
            word,
            row,
            col,
            direction,
            blanks: BTreeSet::new(),
        }
    }

    /// Marks the given word positions as played with blank tiles.
    #[must_use]
    pub fn with_blanks(mut self, blanks: impl IntoIterator<Item = usize>) -> Self {
        self.blanks.extend(blanks);
        self
    }

    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn letter_at(&self, idx: usize) -> Option<Letter> {
        self.word.get(idx)
    }

    pub fn is_blank(&self, idx: usize) -> bool {
        self.blanks.contains(&idx)
    }

    /// The board coordinates of the `idx`-th letter, if representable.
    pub fn position(&self, idx: usize) -> Option<(usize, usize)> {
        self.direction.advance(self.origin(), idx)
    }

    /// The coordinates covered by this move, paired with their letters.
    ///
    /// Stops early at a coordinate that can't be represented, so check the
    /// bounds first (see [`validate_placement()`](crate::validate_placement)).
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), Letter)> + '_ {
        self.word
            .letters()
            .iter()
            .enumerate()
            .map_while(|(idx, &letter)| Some((self.position(idx)?, letter)))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at ({}, {}) {}",
            self.word, self.row, self.col, self.direction
        )
    }
}
