use std::collections::VecDeque;

use wordgrid::{Board, MoveSearch, Rack, SearchConfig, TurnAction, WordList, RACK_SIZE};

/// Decides what a player does in their turn.
pub trait Bot {
    fn choose_action(
        &mut self,
        board: &Board,
        rack: &Rack,
        tiles_in_bag: usize,
        dict: &WordList,
    ) -> TurnAction;

    /// Whether to ask this bot again after its action was rejected. If not,
    /// the rejected action counts as a pass.
    fn retries_on_rejection(&self) -> bool {
        false
    }
}

pub struct Player {
    pub name: String,
    pub bot: Box<dyn Bot>,
}

impl Player {
    pub fn new(name: &str, bot: impl Bot + 'static) -> Self {
        Self {
            name: String::from(name),
            bot: Box::new(bot),
        }
    }
}

/// Plays the best scoring move it can find. Otherwise, it swaps its whole
/// rack while the bag still holds enough tiles, and passes once it doesn't.
pub struct ComputerBot {
    search: MoveSearch,
}

impl ComputerBot {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            search: MoveSearch::new(config),
        }
    }
}

impl Bot for ComputerBot {
    fn choose_action(
        &mut self,
        board: &Board,
        rack: &Rack,
        tiles_in_bag: usize,
        dict: &WordList,
    ) -> TurnAction {
        if let Some(found) = self.search.run(board, rack, dict) {
            return TurnAction::Play {
                mv: found.mv.clone(),
            };
        }
        if tiles_in_bag >= RACK_SIZE && !rack.is_empty() {
            TurnAction::Swap {
                tiles: rack.tiles(),
            }
        } else {
            TurnAction::Pass
        }
    }
}

/// Replays a fixed list of actions, then passes.
///
/// Rejected actions are retried with the next action in the list.
#[derive(Default)]
pub struct ScriptedBot {
    actions: VecDeque<TurnAction>,
}

impl ScriptedBot {
    pub fn new(actions: impl IntoIterator<Item = TurnAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }
}

impl Bot for ScriptedBot {
    fn choose_action(&mut self, _: &Board, _: &Rack, _: usize, _: &WordList) -> TurnAction {
        self.actions.pop_front().unwrap_or(TurnAction::Pass)
    }

    fn retries_on_rejection(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use wordgrid::{word, Direction, Move};

    use super::*;

    #[test]
    fn computer_bot_plays_swaps_or_passes() {
        let dict = WordList::from_words(["hello"]).unwrap();
        let board = Board::new();
        let mut bot = ComputerBot::new(SearchConfig::default());

        let rack: Rack = "HELLOXX".parse().unwrap();
        assert_eq!(
            bot.choose_action(&board, &rack, 50, &dict),
            TurnAction::Play {
                mv: Move::new(word!("HELLO"), 3, 7, Direction::Vertical)
            }
        );

        let rack: Rack = "QQXX".parse().unwrap();
        assert_eq!(
            bot.choose_action(&board, &rack, 50, &dict),
            TurnAction::Swap {
                tiles: rack.tiles()
            }
        );
        assert_eq!(
            bot.choose_action(&board, &rack, RACK_SIZE - 1, &dict),
            TurnAction::Pass
        );
    }

    #[test]
    fn only_scripted_bots_retry() {
        assert!(!ComputerBot::new(SearchConfig::default()).retries_on_rejection());
        assert!(ScriptedBot::default().retries_on_rejection());
    }

    #[test]
    fn scripted_bot_passes_when_done() {
        let dict = WordList::new();
        let mut bot = ScriptedBot::new([TurnAction::Swap { tiles: Vec::new() }]);
        let (board, rack) = (Board::new(), Rack::new());
        assert_eq!(
            bot.choose_action(&board, &rack, 0, &dict),
            TurnAction::Swap { tiles: Vec::new() }
        );
        assert_eq!(bot.choose_action(&board, &rack, 0, &dict), TurnAction::Pass);
    }
}
