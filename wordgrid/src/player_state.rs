use crate::{Rack, TileSupply};

/// The state for a single player during one game.
#[derive(Clone, Debug)]
pub struct PlayerState {
    pub name: String,
    pub rack: Rack,
    /// Only ever increases.
    pub score: u32,
}

impl PlayerState {
    /// A player with a freshly filled rack.
    pub fn new<S: TileSupply + ?Sized>(name: &str, supply: &mut S) -> Self {
        let mut rack = Rack::new();
        rack.replenish(supply);
        Self {
            name: String::from(name),
            rack,
            score: 0,
        }
    }
}
