use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    Board, Dictionary, IllegalMove, Move, PlayerState, Rack, ScoreDelta, Tile, TileSupply,
};

/// What a player does in their turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnAction {
    Play { mv: Move },
    /// Trade these tiles for new ones from the supply.
    Swap { tiles: Vec<Tile> },
    Pass,
}

/// Summarizes the outcome of a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Played(ScoreDelta),
    Swapped { count: usize },
    Passed,
}

impl TurnOutcome {
    /// Passes and swaps earn nothing. Enough of them in a row end the game.
    pub fn is_scoreless(&self) -> bool {
        !matches!(self, TurnOutcome::Played(_))
    }
}

/// The phases of a single turn.
///
/// A turn starts out `AwaitingMove`. A submitted move is either `Validated`
/// and then `Committed`, or `Rejected`, after which the same player is asked
/// again (or passes). Either way, it ends up back at `AwaitingMove`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingMove,
    Validated,
    Rejected,
    Committed,
}

impl TurnPhase {
    pub fn can_advance_to(self, next: TurnPhase) -> bool {
        use TurnPhase::*;
        matches!(
            (self, next),
            (AwaitingMove, Validated)
                | (AwaitingMove, Rejected)
                | (Validated, Committed)
                | (Committed, AwaitingMove)
                | (Rejected, AwaitingMove)
        )
    }

    /// Returns `None` if the transition is not allowed.
    pub fn advance(self, next: TurnPhase) -> Option<TurnPhase> {
        self.can_advance_to(next).then_some(next)
    }
}

/// Checks a move completely and, if it's legal, commits it.
///
/// On success, the move's letters are on the board, the tiles are gone from
/// the rack, and the points are returned. On failure, neither the board nor
/// the rack has changed.
///
/// Letters the rack doesn't hold are played with blanks, in addition to the
/// positions the move marks as blanks itself.
pub fn validate_and_commit<D: Dictionary>(
    board: &mut Board,
    mv: &Move,
    rack: &mut Rack,
    dict: &D,
) -> Result<ScoreDelta, IllegalMove> {
    let mut calculation = board.calculate(mv, dict)?;
    let (rack_after, blanks) = rack_after_move(rack, calculation.mv(), calculation.placed())?;
    calculation.assign_blanks(blanks);
    let delta = calculation.score_delta();
    let new_board = calculation.execute();

    *board = new_board;
    *rack = rack_after;
    Ok(delta)
}

/// The rack after playing the letters at the `placed` word indices, and the
/// indices that end up played with blanks.
///
/// Indices the move marks as blanks take a blank first. The other letters
/// take a matching tile if there is one, or else a blank.
pub fn rack_after_move(
    rack: &Rack,
    mv: &Move,
    placed: &[usize],
) -> Result<(Rack, BTreeSet<usize>), IllegalMove> {
    let mut rack = rack.clone();
    let (marked, unmarked): (Vec<usize>, Vec<usize>) =
        placed.iter().partition(|&&idx| mv.is_blank(idx));
    rack.consume_tiles(&vec![Tile::Blank; marked.len()])?;

    let letters: Vec<_> = unmarked
        .iter()
        .filter_map(|&idx| mv.letter_at(idx))
        .collect();
    let taken = rack.consume(&letters)?;

    let mut blanks: BTreeSet<usize> = marked.into_iter().collect();
    blanks.extend(
        unmarked
            .into_iter()
            .zip(taken)
            .filter(|&(_, tile)| tile == Tile::Blank)
            .map(|(idx, _)| idx),
    );
    Ok((rack, blanks))
}

/// Plays one turn for the given player.
///
/// A successful move adds its points to the player's score and refills the
/// rack. An illegal action changes nothing.
pub fn execute_turn<D: Dictionary, S: TileSupply + ?Sized>(
    state: &mut PlayerState,
    board: &mut Board,
    supply: &mut S,
    dict: &D,
    action: &TurnAction,
) -> Result<TurnOutcome, IllegalMove> {
    match action {
        TurnAction::Play { mv } => {
            let delta = validate_and_commit(board, mv, &mut state.rack, dict)?;
            state.score += delta.points;
            state.rack.replenish(supply);
            Ok(TurnOutcome::Played(delta))
        }
        TurnAction::Swap { tiles } => {
            state.rack.swap(tiles, supply)?;
            Ok(TurnOutcome::Swapped { count: tiles.len() })
        }
        TurnAction::Pass => Ok(TurnOutcome::Passed),
    }
}
