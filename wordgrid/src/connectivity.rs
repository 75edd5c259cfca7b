use crate::{covers, Board, Dictionary, Direction, IllegalMove, Letter, Move, Word, OPENING};

/// A word on the board, as it would read after the move is committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormedWord {
    pub word: Word,
    pub start: (usize, usize),
    pub direction: Direction,
}

/// All words that a move forms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormedWords {
    /// The run along the move's direction, including tiles already on the
    /// board directly before or after the move.
    pub main: FormedWord,
    /// One per newly placed letter that touches tiles in the other direction.
    pub cross: Vec<FormedWord>,
}

impl FormedWord {
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.word.len()).filter_map(|idx| self.direction.advance(self.start, idx))
    }
}

impl FormedWords {
    pub fn iter(&self) -> impl Iterator<Item = &FormedWord> {
        std::iter::once(&self.main).chain(self.cross.iter())
    }
}

/// Indices into the word of those letters that are not on the board yet.
///
/// Expects a move that passed [`validate_placement()`](crate::validate_placement).
pub fn newly_placed(board: &Board, mv: &Move) -> Vec<usize> {
    mv.cells()
        .enumerate()
        .filter(|(_, ((row, col), _))| !board.is_occupied(*row, *col))
        .map(|(idx, _)| idx)
        .collect()
}

/// Checks that a move is attached to the tiles on the board and only forms
/// words from the dictionary.
///
/// Expects a move that passed [`validate_placement()`](crate::validate_placement).
/// A move must place at least one new letter, and one of its new letters must
/// sit next to an existing tile, unless this is the first move of the game
/// and it covers the opening cell. The main word must be in the dictionary,
/// and so must every cross-word running through a new letter.
pub fn check_connectivity<D: Dictionary>(
    board: &Board,
    mv: &Move,
    dict: &D,
) -> Result<FormedWords, IllegalMove> {
    let placed = newly_placed(board, mv);
    if placed.is_empty() {
        return Err(IllegalMove::NotConnected);
    }

    let opens_game = board.is_empty() && covers(mv, OPENING);
    let touches_tiles = placed.iter().any(|&idx| {
        mv.position(idx)
            .is_some_and(|(row, col)| board.has_occupied_neighbor(row, col))
    });
    if !opens_game && !touches_tiles {
        return Err(IllegalMove::NotConnected);
    }

    let main = run_through(board, mv, mv.origin(), mv.direction);
    if !dict.contains(&main.word) {
        return Err(IllegalMove::InvalidWord { word: main.word });
    }

    let mut cross = Vec::new();
    for &idx in &placed {
        let Some(pos) = mv.position(idx) else {
            continue;
        };
        let formed = run_through(board, mv, pos, mv.direction.perpendicular());
        if formed.word.len() < 2 {
            continue;
        }
        if !dict.contains(&formed.word) {
            return Err(IllegalMove::InvalidCrossWord { word: formed.word });
        }
        cross.push(formed);
    }

    Ok(FormedWords { main, cross })
}

// The letter on a cell with the move laid over the board.
fn overlay_letter(board: &Board, mv: &Move, (row, col): (usize, usize)) -> Option<Letter> {
    board.letter_at(row, col).or_else(|| {
        let idx = index_in_move(mv, (row, col))?;
        mv.letter_at(idx)
    })
}

/// The index into the move's word of the letter placed on the given cell.
pub fn index_in_move(mv: &Move, (row, col): (usize, usize)) -> Option<usize> {
    let idx = match mv.direction {
        Direction::Horizontal if row == mv.row => col.checked_sub(mv.col)?,
        Direction::Vertical if col == mv.col => row.checked_sub(mv.row)?,
        _ => return None,
    };
    (idx < mv.word.len()).then_some(idx)
}

// The contiguous run of letters through `pos` in the given direction.
fn run_through(board: &Board, mv: &Move, pos: (usize, usize), direction: Direction) -> FormedWord {
    let mut start = pos;
    while let Some(prev) = direction.retreat(start, 1) {
        if overlay_letter(board, mv, prev).is_none() {
            break;
        }
        start = prev;
    }

    let mut letters = Vec::new();
    let mut cursor = Some(start);
    while let Some(letter) = cursor.and_then(|cell| overlay_letter(board, mv, cell)) {
        letters.push(letter);
        cursor = cursor.and_then(|cell| direction.advance(cell, 1));
    }

    FormedWord {
        word: Word::new(letters),
        start,
        direction,
    }
}
