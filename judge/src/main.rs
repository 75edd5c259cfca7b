use std::path::PathBuf;

use clap::Parser;
use judge::{
    load_word_list, play_game, ranking, ComputerBot, GameConfig, GameResult, Player, Recorder,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wordgrid::SearchConfig;

#[derive(Parser)]
struct Args {
    /// Path to a word list with one word per line
    word_list: PathBuf,

    /// How many games to play
    #[arg(short, long, default_value_t = 1)]
    num_games: usize,

    /// How many computer players take part in each game
    #[arg(short = 'p', long, default_value_t = 2)]
    num_players: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// How many placements the move search checks at most per turn
    #[arg(long)]
    max_candidates: Option<usize>,

    /// End a game after this many passes and swaps in a row
    #[arg(long, default_value_t = 6)]
    max_scoreless_turns: usize,

    /// Record the games' turns as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct Tally {
    wins: Vec<usize>,
    total_points: Vec<u64>,
    ties: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    if args.num_players == 0 {
        anyhow::bail!("At least one player is needed");
    }

    let dict = load_word_list(&args.word_list)?;

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);

    let recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let mut config = GameConfig {
        rng: StdRng::seed_from_u64(seed),
        search: SearchConfig {
            max_candidates: args.max_candidates,
        },
        max_scoreless_turns: args.max_scoreless_turns,
        // Computer players never retry
        max_retries: 0,
        recorder,
    };

    let mut players: Vec<Player> = (1..=args.num_players)
        .map(|i| Player::new(&format!("Computer {}", i), ComputerBot::new(config.search)))
        .collect();

    let mut tally = Tally {
        wins: vec![0; players.len()],
        total_points: vec![0; players.len()],
        ..Default::default()
    };
    for game_idx in 0..args.num_games {
        let result = play_game(&mut config, &mut players, &dict)?;
        for (total, &score) in tally.total_points.iter_mut().zip(result.scores()) {
            *total += u64::from(score);
        }
        match result {
            GameResult::WonByPlayer { player_idx, scores } => {
                info!(winner = players[player_idx].name, game_idx, ?scores, "Game over");
                tally.wins[player_idx] += 1;
            }
            GameResult::Tie { scores } => {
                info!(game_idx, ?scores, "Tie");
                tally.ties += 1;
            }
        }
    }

    debug!(wins = ?tally.wins, ties = tally.ties, "All games played");
    let order = ranking(&tally.wins.iter().map(|&w| w as u32).collect::<Vec<_>>());
    eprintln!("End result after {} games:", args.num_games);
    for player_idx in order {
        let average = if args.num_games > 0 {
            tally.total_points[player_idx] as f32 / args.num_games as f32
        } else {
            0.0
        };
        eprintln!(
            "- {} wins by {} ({:.1} points per game)",
            tally.wins[player_idx], players[player_idx].name, average
        );
    }
    eprintln!("- {} ties", tally.ties);

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
