use std::path::PathBuf;

use clap::{Parser, Subcommand};
use judge::{play_game, replay_game, GameConfig, GameRecording, Recorder};
use quarto::{visualize_board, GameOutcome};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info", global = true)]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Commands {
    /// Two players take turns at this terminal
    Play {
        /// Path to a JSON file with the player names and who starts
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// How many games to play, unless a player quits earlier
        #[arg(short, long, default_value_t = 1)]
        num_games: usize,

        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// Record the games as JSON files into this directory
        #[arg(short, long)]
        record_games_to_directory: Option<PathBuf>,
    },
    /// Check recorded games and show how they ended
    Replay {
        /// Paths to game recordings
        #[clap(num_args(1..), required = true)]
        recordings: Vec<PathBuf>,
    },
}

#[derive(Default)]
struct MatchScore {
    wins: [usize; 2],
    ties: usize,
    abandoned: usize,
}

fn play(
    config: GameConfig,
    num_games: usize,
    seed: Option<u64>,
    record_games_to_directory: Option<PathBuf>,
) -> anyhow::Result<()> {
    // Get a random seed
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let mut match_score = MatchScore::default();
    for game_idx in 0..num_games {
        let recording = play_game(&mut stdin, &mut stdout, &config, &mut rng)?;
        if let Some(rec) = &mut recorder {
            let path = rec.write_game_recording(&recording)?;
            debug!(game_idx, path = %path.display(), "Recorded game");
        }
        match recording.outcome {
            Some(GameOutcome::Won { winner, .. }) => {
                debug!(winner = config.players[winner].as_str(), game_idx);
                match_score.wins[winner] += 1;
            }
            Some(GameOutcome::Drawn) => {
                debug!(game_idx, "Tie");
                match_score.ties += 1;
            }
            None => {
                match_score.abandoned += 1;
                break;
            }
        }
    }

    eprintln!(
        "End result:\n- {} wins by {}\n- {} wins by {}\n- {} ties",
        match_score.wins[0],
        config.players[0],
        match_score.wins[1],
        config.players[1],
        match_score.ties
    );
    if match_score.abandoned > 0 {
        eprintln!("- the last game was abandoned");
    }
    Ok(())
}

fn replay(recordings: &[PathBuf]) -> anyhow::Result<()> {
    let mut num_failed = 0;
    for path in recordings {
        let recording = GameRecording::load(path)?;
        match replay_game(&recording) {
            Ok(engine) => {
                let highlighted = engine
                    .winning_group()
                    .map(|result| result.winning_cells.to_vec())
                    .unwrap_or_default();
                println!("{}", path.display());
                println!("{}", visualize_board(engine.board(), &highlighted));
                match engine.outcome() {
                    Some(GameOutcome::Won { winner, .. }) => {
                        println!("Won by {}", recording.players[winner])
                    }
                    Some(GameOutcome::Drawn) => println!("Drawn"),
                    None => println!("Unfinished, {}", engine.mode()),
                }
            }
            Err(err) => {
                num_failed += 1;
                warn!(recording = %path.display(), "Invalid recording");
                let mut err_dyn = &err as &dyn std::error::Error;
                while let Some(src_err) = err_dyn.source() {
                    warn!("{}", err_dyn);
                    err_dyn = src_err;
                }
                warn!("{}", err_dyn);
            }
        }
    }
    if num_failed > 0 {
        anyhow::bail!("{} of {} recordings are invalid", num_failed, recordings.len());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    match args.command {
        Commands::Play {
            config,
            num_games,
            seed,
            record_games_to_directory,
        } => {
            let config = match config {
                Some(path) => GameConfig::load(&path)?,
                None => GameConfig::default(),
            };
            play(config, num_games, seed, record_games_to_directory)
        }
        Commands::Replay { recordings } => replay(&recordings),
    }
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    // Stdout belongs to the game
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
