// Headless self-play between two AI tiers

use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use reversi_engine::agent::ai::Difficulty;
use reversi_engine::config::GameConfig;
use reversi_engine::orchestrator::Session;
use reversi_engine::{Board, EngineResult, GameResult};
use std::time::Instant;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Tier {
    /// Uniformly random legal move
    Random,
    /// Corners, then edges, then anything
    Positional,
    /// Best one-ply disc count
    Greedy,
    /// Alpha-beta search
    Minimax,
}

impl From<Tier> for Difficulty {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Random => Difficulty::Easy,
            Tier::Positional => Difficulty::Medium,
            Tier::Greedy => Difficulty::Hard,
            Tier::Minimax => Difficulty::Expert,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "reversi-engine",
    about = "Play AI vs AI reversi games and report the tally"
)]
struct Args {
    /// Strategy playing Black (moves first)
    #[arg(long, value_enum, default_value_t = Tier::Minimax)]
    black: Tier,

    /// Strategy playing White
    #[arg(long, value_enum, default_value_t = Tier::Positional)]
    white: Tier,

    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: u64,

    /// Base seed; game i is seeded with seed + i
    #[arg(long, default_value_t = 1u64)]
    seed: u64,

    /// Print the final board of every game
    #[arg(long)]
    show_board: bool,
}

struct GameRecord {
    index: u64,
    result: GameResult,
    board: Board,
}

fn play_game(config: GameConfig, index: u64) -> EngineResult<GameRecord> {
    let mut session = Session::new(config);
    let result = session.play_out()?;
    Ok(GameRecord {
        index,
        result,
        board: *session.board(),
    })
}

fn main() -> EngineResult<()> {
    env_logger::init();
    let args = Args::parse();

    let black = Difficulty::from(args.black);
    let white = Difficulty::from(args.white);
    log::info!(
        "Playing {} games: {} (Black) vs {} (White), seed {}",
        args.games,
        black.name(),
        white.name(),
        args.seed
    );

    let start = Instant::now();
    let records: Vec<GameRecord> = (0..args.games)
        .into_par_iter()
        .map(|i| play_game(GameConfig::aivai(black, white).with_seed(args.seed.wrapping_add(i)), i))
        .collect::<EngineResult<_>>()?;

    let (mut black_wins, mut white_wins, mut ties) = (0u64, 0u64, 0u64);
    for record in &records {
        let counts = record.board.counts();
        match record.result {
            GameResult::BlackWins => black_wins += 1,
            GameResult::WhiteWins => white_wins += 1,
            GameResult::Tie => ties += 1,
        }
        println!(
            "game {:>3}: {:?} (Black {} - White {})",
            record.index, record.result, counts.black, counts.white
        );
        if args.show_board {
            println!("{}", record.board);
        }
    }

    println!();
    println!("Black ({}): {} wins", black.name(), black_wins);
    println!("White ({}): {} wins", white.name(), white_wins);
    println!("Ties: {}", ties);
    println!("Elapsed: {}ms", start.elapsed().as_millis());
    Ok(())
}
