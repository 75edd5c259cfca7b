use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{IllegalMove, Letter, LetterFromStrErr, Tile, TileSupply, Word};

/// How many tiles a rack is filled up to.
pub const RACK_SIZE: usize = 7;

const NUM_TILE_KINDS: usize = Letter::ALPHABET_LEN + 1;

/// The tiles held by one player, as a multiset.
///
/// Usually holds at most [`RACK_SIZE`] tiles, but that's not enforced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rack {
    /// Indexed by `Tile::index()`.
    counts: [usize; NUM_TILE_KINDS],
}

impl Rack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.counts[tile.index()]
    }

    pub fn blanks(&self) -> usize {
        self.count(Tile::Blank)
    }

    pub fn insert(&mut self, tile: Tile) {
        self.counts[tile.index()] += 1;
    }

    /// All tiles, letters alphabetically, then blanks.
    pub fn tiles(&self) -> Vec<Tile> {
        self.counts
            .iter()
            .enumerate()
            .flat_map(|(idx, &count)| std::iter::repeat(Tile::from_index(idx)).take(count))
            .collect()
    }

    /// Removes one tile per letter, using a blank where the letter is missing.
    ///
    /// Returns the tiles taken, in the order of `letters`, so the caller can
    /// tell which letters are played with blanks. If some letter can't be
    /// covered, nothing is removed.
    pub fn consume(&mut self, letters: &[Letter]) -> Result<Vec<Tile>, IllegalMove> {
        let mut counts = self.counts;
        let mut taken = Vec::with_capacity(letters.len());
        for &letter in letters {
            let tile = Tile::Letter(letter);
            if counts[tile.index()] > 0 {
                counts[tile.index()] -= 1;
                taken.push(tile);
            } else if counts[Tile::Blank.index()] > 0 {
                counts[Tile::Blank.index()] -= 1;
                taken.push(Tile::Blank);
            } else {
                return Err(IllegalMove::InsufficientTiles { missing: tile });
            }
        }
        self.counts = counts;
        Ok(taken)
    }

    /// Removes exactly the given tiles. If one is missing, nothing is removed.
    pub fn consume_tiles(&mut self, tiles: &[Tile]) -> Result<(), IllegalMove> {
        let mut counts = self.counts;
        for &tile in tiles {
            let count = &mut counts[tile.index()];
            *count = count
                .checked_sub(1)
                .ok_or(IllegalMove::InsufficientTiles { missing: tile })?;
        }
        self.counts = counts;
        Ok(())
    }

    /// Refills the rack up to [`RACK_SIZE`] tiles, as far as the supply allows.
    ///
    /// Returns the number of tiles drawn.
    pub fn replenish<S: TileSupply + ?Sized>(&mut self, supply: &mut S) -> usize {
        let wanted = RACK_SIZE.saturating_sub(self.len()).min(supply.remaining());
        let drawn = supply.draw(wanted);
        for &tile in &drawn {
            self.insert(tile);
        }
        drawn.len()
    }

    /// Trades the given tiles for new ones from the supply.
    ///
    /// The replacements are drawn before the old tiles go back, so a tile is
    /// never swapped for itself. If the supply holds fewer tiles than are
    /// swapped, the rack ends up smaller. Returns the number of tiles drawn.
    pub fn swap<S: TileSupply + ?Sized>(
        &mut self,
        tiles: &[Tile],
        supply: &mut S,
    ) -> Result<usize, IllegalMove> {
        self.consume_tiles(tiles)?;
        let drawn = supply.draw(tiles.len());
        for &tile in &drawn {
            self.insert(tile);
        }
        supply.return_tiles(tiles);
        Ok(drawn.len())
    }

    /// Could this rack spell the word, with blanks standing in for any letter?
    ///
    /// Up to `spare` letters of the word may be missing from the rack
    /// altogether, e.g. because they're already on the board.
    pub fn can_form(&self, word: &Word, spare: usize) -> bool {
        let needed = word.letter_counts();
        let missing: usize = needed
            .iter()
            .enumerate()
            .map(|(idx, &n)| n.saturating_sub(self.counts[idx]))
            .sum();
        missing <= self.blanks() + spare
    }
}

impl FromIterator<Tile> for Rack {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut rack = Rack::new();
        for tile in iter {
            rack.insert(tile);
        }
        rack
    }
}

/// Letters as they are, `?` for a blank.
impl FromStr for Rack {
    type Err = LetterFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().map(Tile::try_from).collect()
    }
}

impl std::fmt::Display for Rack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tile in self.tiles() {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}
