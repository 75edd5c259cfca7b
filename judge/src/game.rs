use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};
use wordgrid::{
    execute_turn, Board, PlayerState, TileBag, TileSupply, TurnAction, TurnOutcome, TurnPhase,
    WordList,
};

use crate::player::Player;
use crate::recording::TurnRecord;
use crate::GameConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    WonByPlayer { player_idx: usize, scores: Vec<u32> },
    Tie { scores: Vec<u32> },
}

impl GameResult {
    fn from_scores(scores: Vec<u32>) -> Self {
        let Some(&best) = scores.iter().max() else {
            return GameResult::Tie { scores };
        };
        let mut leaders = scores.iter().enumerate().filter(|&(_, &s)| s == best);
        match (leaders.next(), leaders.next()) {
            (Some((player_idx, _)), None) => GameResult::WonByPlayer { player_idx, scores },
            _ => GameResult::Tie { scores },
        }
    }

    pub fn scores(&self) -> &[u32] {
        match self {
            GameResult::WonByPlayer { scores, .. } | GameResult::Tie { scores } => scores,
        }
    }
}

/// Plays one game with a fresh, shuffled tile bag.
///
/// Returns an error only if the recording can't be written, or if the
/// players are unusable.
pub fn play_game(
    config: &mut GameConfig,
    players: &mut [Player],
    dict: &WordList,
) -> anyhow::Result<GameResult> {
    let mut bag = TileBag::new(StdRng::from_rng(&mut config.rng)?);
    play_game_with_supply(config, players, dict, &mut bag)
}

/// Plays one game, drawing tiles from the given supply.
///
/// Players take turns in the order given. The game ends once the supply and
/// all racks are empty, or after `config.max_scoreless_turns` passes and
/// swaps in a row.
pub fn play_game_with_supply<S: TileSupply + ?Sized>(
    config: &mut GameConfig,
    players: &mut [Player],
    dict: &WordList,
    supply: &mut S,
) -> anyhow::Result<GameResult> {
    if players.is_empty() {
        anyhow::bail!("A game needs at least one player");
    }
    if config.max_scoreless_turns == 0 {
        anyhow::bail!("The limit of scoreless turns must be at least one");
    }

    let mut states: Vec<PlayerState> = players
        .iter()
        .map(|player| PlayerState::new(&player.name, supply))
        .collect();
    let mut board = Board::new();

    let mut scoreless_turns = 0;
    for turn_idx in 0.. {
        let player_idx = turn_idx % players.len();
        let record = play_turn(
            &mut players[player_idx],
            &mut states[player_idx],
            &mut board,
            supply,
            dict,
            config.max_retries,
        )?;
        debug!(
            turn_idx,
            player = record.player,
            action = ?record.action,
            points = record.points,
            score = states[player_idx].score,
            "Turn played"
        );
        if matches!(record.action, TurnAction::Pass | TurnAction::Swap { .. }) {
            scoreless_turns += 1;
        } else {
            scoreless_turns = 0;
        }
        if let Some(recorder) = &mut config.recorder {
            recorder.store_turn(record);
        }

        if supply.remaining() == 0 && states.iter().all(|state| state.rack.is_empty()) {
            debug!(turn_idx, "All tiles played");
            break;
        }
        if scoreless_turns >= config.max_scoreless_turns {
            debug!(turn_idx, scoreless_turns, "Too many scoreless turns in a row");
            break;
        }
    }
    tracing::trace!("Final board:\n{}", board);

    if let Some(recorder) = &mut config.recorder {
        let final_scores = states
            .iter()
            .map(|state| (state.name.clone(), state.score))
            .collect();
        recorder.write_game_recording(final_scores)?;
    }

    let scores = states.iter().map(|state| state.score).collect();
    Ok(GameResult::from_scores(scores))
}

/// Asks the player for actions until one is accepted, or gives up and
/// counts the turn as a pass.
fn play_turn<S: TileSupply + ?Sized>(
    player: &mut Player,
    state: &mut PlayerState,
    board: &mut Board,
    supply: &mut S,
    dict: &WordList,
    max_retries: usize,
) -> anyhow::Result<TurnRecord> {
    let mut record = TurnRecord {
        player: player.name.clone(),
        rack: state.rack.to_string(),
        action: TurnAction::Pass,
        points: 0,
        rejected: Vec::new(),
    };
    let mut phase = TurnPhase::AwaitingMove;

    for attempt in 0..=max_retries {
        let action = player
            .bot
            .choose_action(board, &state.rack, supply.remaining(), dict);
        match execute_turn(state, board, supply, dict, &action) {
            Ok(outcome) => {
                phase = advance(phase, TurnPhase::Validated)?;
                phase = advance(phase, TurnPhase::Committed)?;
                if let TurnOutcome::Played(delta) = &outcome {
                    record.points = delta.points;
                }
                record.action = action;
                break;
            }
            Err(err) => {
                phase = advance(phase, TurnPhase::Rejected)?;
                warn!(player = player.name, attempt, %err, ?action, "Rejected action");
                record.rejected.push((action, err.to_string()));
                phase = advance(phase, TurnPhase::AwaitingMove)?;
                if !player.bot.retries_on_rejection() {
                    break;
                }
            }
        }
    }
    if phase == TurnPhase::Committed {
        advance(phase, TurnPhase::AwaitingMove)?;
    }
    Ok(record)
}

fn advance(phase: TurnPhase, next: TurnPhase) -> anyhow::Result<TurnPhase> {
    match phase.advance(next) {
        Some(phase) => Ok(phase),
        None => anyhow::bail!("Illegal turn phase transition from {:?} to {:?}", phase, next),
    }
}

/// Ranks players by score, highest first. Ties keep the player order.
pub fn ranking(scores: &[u32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| match scores[b].cmp(&scores[a]) {
        Ordering::Equal => a.cmp(&b),
        other => other,
    });
    order
}
