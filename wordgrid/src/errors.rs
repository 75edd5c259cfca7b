use crate::{Letter, Tile, Word};

/// The error type for playing a single move.
///
/// Every check reports the specific reason, so a driver can tell a human
/// player what was wrong and let them retry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    /// A coordinate lies outside of the 15 x 15 grid.
    OutOfBounds { row: usize, col: usize },
    /// A letter was placed on a cell holding a different letter.
    CellConflict {
        row: usize,
        col: usize,
        existing: Letter,
        placed: Letter,
    },
    EmptyOrTooShortWord { len: usize },
    /// The first move of the game does not cover the opening cell.
    InvalidFirstMove,
    NotConnected,
    InvalidWord { word: Word },
    InvalidCrossWord { word: Word },
    /// The rack holds neither the tile nor a blank to stand in for it.
    InsufficientTiles { missing: Tile },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfBounds { row, col } => {
                write!(f, "The word would reach ({}, {}), which is off the board", row, col)
            }
            IllegalMove::CellConflict {
                row,
                col,
                existing,
                placed,
            } => write!(
                f,
                "Tried to place {} on ({}, {}), which already holds {}",
                placed, row, col, existing
            ),
            IllegalMove::EmptyOrTooShortWord { len } => write!(
                f,
                "Words must have at least two letters, but this one has {}",
                len
            ),
            IllegalMove::InvalidFirstMove => {
                write!(f, "The first word of the game must cover the center square")
            }
            IllegalMove::NotConnected => write!(
                f,
                "The word places no new tile next to a tile already on the board"
            ),
            IllegalMove::InvalidWord { word } => write!(f, "'{}' is not in the dictionary", word),
            IllegalMove::InvalidCrossWord { word } => write!(
                f,
                "The move also forms '{}', which is not in the dictionary",
                word
            ),
            IllegalMove::InsufficientTiles { missing } => {
                write!(f, "The rack holds no '{}' and no blank to replace it", missing)
            }
        }
    }
}
