use crate::{Board, Cell, IllegalMove, Move, OPENING};

/// Checks that a move fits onto the board.
///
/// In order: the word has at least two letters, every letter lands on the
/// board, no letter lands on a different letter, and the first move of the
/// game covers the opening cell. Returns the first failure.
///
/// Whether the move connects to other tiles and forms real words is checked
/// by [`check_connectivity()`](crate::check_connectivity).
pub fn validate_placement(board: &Board, mv: &Move) -> Result<(), IllegalMove> {
    let len = mv.word.len();
    if len < 2 {
        return Err(IllegalMove::EmptyOrTooShortWord { len });
    }

    for idx in 0..len {
        match mv.position(idx) {
            Some((row, col)) if Board::is_in_bounds(row, col) => {}
            Some((row, col)) => return Err(IllegalMove::OutOfBounds { row, col }),
            None => {
                return Err(IllegalMove::OutOfBounds {
                    row: mv.row,
                    col: mv.col,
                })
            }
        }
    }

    for ((row, col), placed) in mv.cells() {
        if let Cell::Occupied(tile) = board.cell_at(row, col)? {
            if tile.letter != placed {
                return Err(IllegalMove::CellConflict {
                    row,
                    col,
                    existing: tile.letter,
                    placed,
                });
            }
        }
    }

    if board.is_empty() && !covers(mv, OPENING) {
        return Err(IllegalMove::InvalidFirstMove);
    }

    Ok(())
}

/// Does the move put a letter on the given cell?
pub fn covers(mv: &Move, pos: (usize, usize)) -> bool {
    mv.cells().any(|(cell, _)| cell == pos)
}
