use quickcheck::{Arbitrary, Gen};

use crate::{search_move, Board, Dictionary, Direction, Letter, Move, Rack, Tile, Word, WordList};
use crate::{OPENING, RACK_SIZE};

// Tiles that spell most of the words in `SearchInput::dictionary()`
const USEFUL_TILES: &str = "AACEEHILLOOQTUXZ?";

const WORDS: &[&str] = &[
    "ah", "at", "ate", "cat", "act", "eat", "eh", "ex", "ha", "he", "hello", "hex", "lo", "oh",
    "ox", "oz", "quiz", "ta", "tea", "zoo",
];

/// A board with a few words on it, and a rack to play from.
#[derive(Clone, Debug)]
pub struct SearchInput {
    pub rack: Rack,
    /// Index into the dictionary, direction, and which letter covers the opening.
    first_word: Option<(usize, Direction, usize)>,
    /// A rack to search a second word with.
    second_rack: Option<Rack>,
}

/// A move that may or may not be legal on the board of `search`.
#[derive(Clone, Debug)]
pub struct MoveInput {
    pub search: SearchInput,
    pub mv: Move,
}

impl SearchInput {
    pub fn dictionary() -> WordList {
        WordList::from_words(WORDS).unwrap()
    }

    pub fn board(&self, dict: &WordList) -> Board {
        let mut board = Board::new();
        let Some((idx, direction, offset)) = self.first_word else {
            return board;
        };
        let word = dict.candidates().nth(idx % dict.len()).unwrap().clone();
        let offset = offset % word.len();
        let (row, col) = direction.retreat(OPENING, offset).unwrap();
        board.commit(&Move::new(word, row, col, direction));

        if let Some(rack) = &self.second_rack {
            if let Some(mv) = search_move(&board, rack, dict) {
                board.commit(&mv);
            }
        }
        board
    }
}

fn useful_tile(g: &mut Gen) -> Tile {
    let symbols: Vec<char> = USEFUL_TILES.chars().collect();
    Tile::try_from(*g.choose(&symbols).unwrap()).unwrap()
}

impl Arbitrary for Letter {
    fn arbitrary(g: &mut Gen) -> Self {
        let letters: Vec<Letter> = Letter::all().collect();
        *g.choose(&letters).unwrap()
    }
}

impl Arbitrary for Tile {
    fn arbitrary(g: &mut Gen) -> Self {
        if u8::arbitrary(g) % 10 == 0 {
            Tile::Blank
        } else {
            Tile::Letter(Letter::arbitrary(g))
        }
    }
}

impl Arbitrary for Direction {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Direction::BOTH).unwrap()
    }
}

impl Arbitrary for Rack {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % (RACK_SIZE + 1);
        (0..len).map(|_| useful_tile(g)).collect()
    }
}

impl Arbitrary for SearchInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let first_word = bool::arbitrary(g).then(|| {
            (
                usize::arbitrary(g),
                Direction::arbitrary(g),
                usize::arbitrary(g),
            )
        });
        let second_rack = first_word
            .is_some()
            .then(|| Rack::arbitrary(g))
            .filter(|_| bool::arbitrary(g));
        SearchInput {
            rack: Rack::arbitrary(g),
            first_word,
            second_rack,
        }
    }
}

impl Arbitrary for MoveInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let search = SearchInput::arbitrary(g);
        let word = if bool::arbitrary(g) {
            (*g.choose(WORDS).unwrap()).parse().unwrap()
        } else {
            let len = usize::arbitrary(g) % 5;
            (0..len)
                .filter_map(|_| match useful_tile(g) {
                    Tile::Letter(letter) => Some(letter),
                    Tile::Blank => None,
                })
                .collect::<Word>()
        };
        // Mostly near the middle, where the words are
        let row = 3 + usize::arbitrary(g) % 9;
        let col = 3 + usize::arbitrary(g) % 9;
        let blanks: Vec<usize> = (0..word.len()).filter(|_| u8::arbitrary(g) % 8 == 0).collect();
        let mv = Move::new(word, row, col, Direction::arbitrary(g)).with_blanks(blanks);
        MoveInput { search, mv }
    }
}
