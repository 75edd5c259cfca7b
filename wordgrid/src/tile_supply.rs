use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::{standard_tile_set, Tile};

/// The pool that racks are refilled from.
pub trait TileSupply {
    /// Draws up to `n` tiles. Fewer are returned once the supply runs out.
    fn draw(&mut self, n: usize) -> Vec<Tile>;

    fn remaining(&self) -> usize;

    /// Puts tiles back, e.g. after a player swapped them.
    fn return_tiles(&mut self, tiles: &[Tile]);
}

/// A shuffled bag of tiles, owned by a single game.
#[derive(Clone, Debug)]
pub struct TileBag {
    tiles: Vec<Tile>,
    rng: StdRng,
}

impl TileBag {
    /// A full standard bag of 100 tiles.
    pub fn new(rng: StdRng) -> Self {
        Self::with_tiles(standard_tile_set(), rng)
    }

    pub fn with_tiles(mut tiles: Vec<Tile>, mut rng: StdRng) -> Self {
        tiles.shuffle(&mut rng);
        Self { tiles, rng }
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl TileSupply for TileBag {
    fn draw(&mut self, n: usize) -> Vec<Tile> {
        let split_at = self.tiles.len().saturating_sub(n);
        self.tiles.split_off(split_at)
    }

    fn remaining(&self) -> usize {
        self.tiles.len()
    }

    fn return_tiles(&mut self, tiles: &[Tile]) {
        self.tiles.extend_from_slice(tiles);
        self.tiles.shuffle(&mut self.rng);
    }
}

/// An unshuffled supply that hands out tiles from the back.
impl TileSupply for Vec<Tile> {
    fn draw(&mut self, n: usize) -> Vec<Tile> {
        let split_at = self.len().saturating_sub(n);
        let mut drawn = self.split_off(split_at);
        drawn.reverse();
        drawn
    }

    fn remaining(&self) -> usize {
        self.len()
    }

    fn return_tiles(&mut self, tiles: &[Tile]) {
        // Returned tiles go to the bottom, so they're drawn last
        self.splice(0..0, tiles.iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::letter;

    #[test]
    fn bag_shrinks_on_draw() {
        let mut bag = TileBag::new(StdRng::seed_from_u64(7));
        assert_eq!(bag.remaining(), 100);
        assert_eq!(bag.draw(7).len(), 7);
        assert_eq!(bag.remaining(), 93);
        assert_eq!(bag.draw(200).len(), 93);
        assert!(bag.is_empty());
        assert!(bag.draw(1).is_empty());
    }

    #[test]
    fn same_seed_same_order() {
        let mut bag_1 = TileBag::new(StdRng::seed_from_u64(42));
        let mut bag_2 = TileBag::new(StdRng::seed_from_u64(42));
        assert_eq!(bag_1.draw(20), bag_2.draw(20));
    }

    #[test]
    fn returned_tiles_can_be_drawn_again() {
        let mut bag = TileBag::with_tiles(vec![Tile::Blank], StdRng::seed_from_u64(1));
        let drawn = bag.draw(1);
        assert_eq!(bag.remaining(), 0);
        bag.return_tiles(&drawn);
        assert_eq!(bag.draw(5), vec![Tile::Blank]);
    }

    #[test]
    fn vec_supply_draws_from_the_back() {
        let a = Tile::Letter(letter!("A"));
        let b = Tile::Letter(letter!("B"));
        let c = Tile::Letter(letter!("C"));
        let mut supply = vec![a, b, c];
        assert_eq!(supply.draw(2), vec![c, b]);
        supply.return_tiles(&[c]);
        assert_eq!(supply, vec![c, a]);
    }
}
