use crate::{Board, Cell, SpecialKind, BOARD_SIZE};

fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => '·',
        Cell::Special(SpecialKind::DoubleLetter) => '\'',
        Cell::Special(SpecialKind::TripleLetter) => '"',
        Cell::Special(SpecialKind::DoubleWord) => '-',
        Cell::Special(SpecialKind::TripleWord) => '=',
        Cell::Special(SpecialKind::Opening) => '*',
        // Blanks are shown in lowercase
        Cell::Occupied(tile) if tile.is_blank => tile.letter.to_char().to_ascii_lowercase(),
        Cell::Occupied(tile) => tile.letter.to_char(),
    }
}

/// Draws the board in a box, with row and column numbers.
pub fn visualize_board(board: &Board) -> String {
    // Draw the top of the box
    let mut result = String::from("     ");
    for col in 0..BOARD_SIZE {
        result += &format!("{:<2}", col % 10);
    }
    result += "\n    ╭";
    for _ in 0..BOARD_SIZE {
        result += "──";
    }
    result += "─╮\n";

    for row in 0..BOARD_SIZE {
        result += &format!("{:>3} │", row);
        for col in 0..BOARD_SIZE {
            let cell = board.get(row, col).unwrap_or(Cell::Empty);
            result.push(' ');
            result.push(cell_symbol(cell));
        }
        result += " │\n";
    }

    // Draw the bottom of the box
    result += "    ╰";
    for _ in 0..BOARD_SIZE {
        result += "──";
    }
    result += "─╯";
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{word, Direction, Move};

    #[test]
    fn shows_letters_and_specials() {
        let mut board = Board::new();
        board.commit(&Move::new(word!("HELLO"), 7, 3, Direction::Horizontal).with_blanks([1]));
        let drawing = visualize_board(&board);
        let lines: Vec<&str> = drawing.lines().collect();
        assert_eq!(lines.len(), BOARD_SIZE + 3);
        assert_eq!(lines[2], "  0 │ = · · ' · · · = · · · ' · · = │");
        assert_eq!(lines[9], "  7 │ = · · H e L L O · · · ' · · = │");
        assert_eq!(board.to_string(), drawing);
    }
}
