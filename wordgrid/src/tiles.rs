use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the 26 letters `A` to `Z`.
///
/// Internally this is the index of the letter in the alphabet, so the
/// derived ordering is alphabetical.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

/// A tile as it sits in a rack or in the bag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Tile {
    Letter(Letter),
    /// A tile without an intrinsic letter. It is assigned a letter when
    /// placed and is always worth zero points.
    Blank,
}

/// An ordered sequence of letters.
///
/// The ordering is lexicographic, i.e. alphabetical.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(Vec<Letter>);

/// The error type for the [`FromStr`] instances of [`Letter`], [`Tile`] and [`Word`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterFromStrErr {
    NotALetter(char),
    LessThanOneChar,
    MoreThanOneChar,
}

impl std::error::Error for LetterFromStrErr {}

impl std::fmt::Display for LetterFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LetterFromStrErr::NotALetter(c) => write!(f, "'{}' is not a letter from A to Z", c),
            LetterFromStrErr::LessThanOneChar => write!(f, "Expected a letter, got nothing"),
            LetterFromStrErr::MoreThanOneChar => write!(f, "Expected a single letter"),
        }
    }
}

/// Points for each letter, A to Z.
static LETTER_VALUES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// How many tiles of each letter, A to Z, a full bag contains.
static LETTER_DISTRIBUTION: [usize; 26] = [
    9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, 6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1,
];

/// How many blank tiles a full bag contains.
pub const BLANKS_IN_BAG: usize = 2;

impl Letter {
    pub const ALPHABET_LEN: usize = 26;

    /// Iterate over all letters, alphabetically.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..Self::ALPHABET_LEN as u8).map(Letter)
    }

    /// The position in the alphabet, `A` being 0.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn from_index(idx: usize) -> Option<Letter> {
        (idx < Self::ALPHABET_LEN).then_some(Letter(idx as u8))
    }

    /// The base value of this letter, before any multipliers.
    pub fn value(self) -> u32 {
        LETTER_VALUES[self.index()]
    }

    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterFromStrErr;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Ok(Letter(upper as u8 - b'A'))
        } else {
            Err(LetterFromStrErr::NotALetter(c))
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.to_char()
    }
}

impl FromStr for Letter {
    type Err = LetterFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let c = chars.next().ok_or(LetterFromStrErr::LessThanOneChar)?;
        if chars.next().is_some() {
            return Err(LetterFromStrErr::MoreThanOneChar);
        }
        Letter::try_from(c)
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Tile {
    /// The character used for a blank in text and serialized form.
    pub const BLANK_CHAR: char = '?';

    pub fn value(self) -> u32 {
        match self {
            Tile::Letter(letter) => letter.value(),
            Tile::Blank => 0,
        }
    }

    /// Index into per-tile count arrays: the letters first, then the blank.
    pub(crate) fn index(self) -> usize {
        match self {
            Tile::Letter(letter) => letter.index(),
            Tile::Blank => Letter::ALPHABET_LEN,
        }
    }

    pub(crate) fn from_index(idx: usize) -> Tile {
        Letter::from_index(idx).map_or(Tile::Blank, Tile::Letter)
    }
}

impl From<Letter> for Tile {
    fn from(letter: Letter) -> Tile {
        Tile::Letter(letter)
    }
}

impl TryFrom<char> for Tile {
    type Error = LetterFromStrErr;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c == Tile::BLANK_CHAR {
            Ok(Tile::Blank)
        } else {
            Letter::try_from(c).map(Tile::Letter)
        }
    }
}

impl From<Tile> for char {
    fn from(tile: Tile) -> char {
        match tile {
            Tile::Letter(letter) => letter.to_char(),
            Tile::Blank => Tile::BLANK_CHAR,
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

impl Word {
    pub fn new(letters: Vec<Letter>) -> Self {
        Self(letters)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    pub fn get(&self, idx: usize) -> Option<Letter> {
        self.0.get(idx).copied()
    }

    /// How many times each letter occurs, indexed by [`Letter::index()`].
    pub fn letter_counts(&self) -> [usize; Letter::ALPHABET_LEN] {
        let mut counts = [0; Letter::ALPHABET_LEN];
        for letter in &self.0 {
            counts[letter.index()] += 1;
        }
        counts
    }
}

impl FromStr for Word {
    type Err = LetterFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(Letter::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Word)
    }
}

impl TryFrom<String> for Word {
    type Error = LetterFromStrErr;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Word> for String {
    fn from(word: Word) -> String {
        word.to_string()
    }
}

impl FromIterator<Letter> for Word {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        Word(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in &self.0 {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

/// All tiles of a full bag, unshuffled: the letters alphabetically, then the blanks.
pub fn standard_tile_set() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(100);
    for letter in Letter::all() {
        for _ in 0..LETTER_DISTRIBUTION[letter.index()] {
            tiles.push(Tile::Letter(letter));
        }
    }
    tiles.extend(std::iter::repeat(Tile::Blank).take(BLANKS_IN_BAG));
    tiles
}

/// Shorthand for creating a [`Letter`] from a one-character string.
///
/// ```
/// # use wordgrid::{letter, Letter};
/// assert_eq!(letter!("q").value(), 10);
/// ```
#[macro_export]
macro_rules! letter {
    ($l:literal) => {
        <$crate::Letter as std::str::FromStr>::from_str($l)
            .expect("Invalid letter given to letter! macro")
    };
}

/// Shorthand for creating a [`Word`] from a string literal.
///
/// ```
/// # use wordgrid::{word, Word};
/// assert_eq!(word!("quiz").to_string(), "QUIZ");
/// ```
#[macro_export]
macro_rules! word {
    ($w:literal) => {
        <$crate::Word as std::str::FromStr>::from_str($w)
            .expect("Invalid word given to word! macro")
    };
}
// The import is for using the macros in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use {letter, word};
