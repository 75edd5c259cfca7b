use super::{SpecialKind, BOARD_SIZE};

/// The official 15 x 15 premium square layout.
///
/// `T` triple word, `D` double word, `t` triple letter, `d` double letter,
/// `*` the opening cell (which doubles the word), `.` a plain cell.
static STANDARD_LAYOUT: [&str; BOARD_SIZE] = [
    "T..d...T...d..T",
    ".D...t...t...D.",
    "..D...d.d...D..",
    "d..D...d...D..d",
    "....D.....D....",
    ".t...t...t...t.",
    "..d...d.d...d..",
    "T..d...*...d..T",
    "..d...d.d...d..",
    ".t...t...t...t.",
    "....D.....D....",
    "d..D...d...D..d",
    "..D...d.d...D..",
    ".D...t...t...D.",
    "T..d...T...d..T",
];

/// The special square at the given position of the standard layout, if any.
pub fn standard_special_at(row: usize, col: usize) -> Option<SpecialKind> {
    let symbol = STANDARD_LAYOUT.get(row)?.as_bytes().get(col)?;
    match symbol {
        b'T' => Some(SpecialKind::TripleWord),
        b'D' => Some(SpecialKind::DoubleWord),
        b't' => Some(SpecialKind::TripleLetter),
        b'd' => Some(SpecialKind::DoubleLetter),
        b'*' => Some(SpecialKind::Opening),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OPENING;

    #[test]
    fn layout_is_symmetric() {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let special = standard_special_at(row, col);
                assert_eq!(special, standard_special_at(col, row));
                assert_eq!(special, standard_special_at(BOARD_SIZE - 1 - row, col));
                assert_eq!(special, standard_special_at(row, BOARD_SIZE - 1 - col));
            }
        }
    }

    #[test]
    fn single_opening_cell_at_center() {
        let openings: Vec<_> = (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| standard_special_at(row, col) == Some(SpecialKind::Opening))
            .collect();
        assert_eq!(openings, vec![OPENING]);
    }

    #[test]
    fn premium_counts() {
        let mut counts = std::collections::BTreeMap::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if let Some(kind) = standard_special_at(row, col) {
                    *counts.entry(format!("{:?}", kind)).or_insert(0) += 1;
                }
            }
        }
        assert_eq!(counts["TripleWord"], 8);
        assert_eq!(counts["DoubleWord"], 16);
        assert_eq!(counts["TripleLetter"], 12);
        assert_eq!(counts["DoubleLetter"], 24);
    }
}
