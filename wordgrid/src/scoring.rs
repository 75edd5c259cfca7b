use serde::{Deserialize, Serialize};

use crate::{index_in_move, Board, Cell, FormedWord, FormedWords, Move, Word};

/// The points a committed move earns, and how they came about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDelta {
    pub points: u32,
    /// Each formed word with its points, the main word first.
    pub words: Vec<(Word, u32)>,
}

/// Scores one formed word, with the move laid over the board.
///
/// Tiles already on the board count their plain value. A newly placed tile
/// gets the letter multiplier of its cell, and the word multipliers of all
/// newly covered cells are multiplied together. Blanks are worth nothing.
pub fn score_word(board: &Board, mv: &Move, formed: &FormedWord) -> u32 {
    let mut sum = 0;
    let mut word_multiplier = 1;
    for (row, col) in formed.cells() {
        match board.get(row, col) {
            Some(Cell::Occupied(tile)) => sum += tile.value(),
            Some(cell) => {
                let Some(idx) = index_in_move(mv, (row, col)) else {
                    debug_assert!(false, "Formed word runs over an empty cell");
                    continue;
                };
                let base = match mv.letter_at(idx) {
                    Some(letter) if !mv.is_blank(idx) => letter.value(),
                    _ => 0,
                };
                match cell.special() {
                    Some(kind) => {
                        sum += base * kind.letter_multiplier();
                        word_multiplier *= kind.word_multiplier();
                    }
                    None => sum += base,
                }
            }
            None => {}
        }
    }
    sum * word_multiplier
}

/// Scores the main word and every cross-word of a move, on the board
/// before the move is committed.
pub fn score_move(board: &Board, mv: &Move, words: &FormedWords) -> ScoreDelta {
    let words: Vec<(Word, u32)> = words
        .iter()
        .map(|formed| (formed.word.clone(), score_word(board, mv, formed)))
        .collect();
    ScoreDelta {
        points: words.iter().map(|(_, points)| points).sum(),
        words,
    }
}
