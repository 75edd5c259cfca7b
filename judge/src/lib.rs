mod game;
mod player;
mod recording;
mod word_list;
pub use game::*;
pub use player::*;
pub use recording::*;
pub use word_list::*;

use wordgrid::SearchConfig;

/// Settings shared by all games of one run.
pub struct GameConfig {
    /// Seeds the tile bag of each game.
    pub rng: rand::rngs::StdRng,
    pub search: SearchConfig,
    /// The game ends after this many passes and swaps in a row.
    pub max_scoreless_turns: usize,
    /// How often a player whose move was rejected may try again,
    /// if their bot asks for it.
    pub max_retries: usize,
    pub recorder: Option<recording::Recorder>,
}
