pub use board::*;
pub use connectivity::*;
pub use dictionary::*;
pub use errors::*;
pub use moves::*;
pub use placement::*;
pub use player_state::*;
pub use rack::*;
pub use scoring::*;
pub use search::*;
pub use tile_supply::*;
pub use tiles::*;
pub use turn::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod connectivity;
mod dictionary;
mod errors;
mod moves;
mod placement;
mod player_state;
mod rack;
mod scoring;
mod search;
mod tile_supply;
mod tiles;
mod turn;
mod visualization;
