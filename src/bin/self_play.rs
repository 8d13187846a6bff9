//! Engine-vs-engine self play from the standard position.
//!
//! Run with:
//! `cargo run --release --bin self_play -- --depth 2 --black random`
//! `RUST_LOG=briar_chess=debug cargo run --bin self_play`

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use briar_chess::board::alliance::Alliance;
use briar_chess::board::board::Board;
use briar_chess::config::EngineConfig;
use briar_chess::engines::engine_minimax::MinimaxEngine;
use briar_chess::engines::engine_random::RandomEngine;
use briar_chess::engines::engine_trait::Engine;
use briar_chess::errors::ChessResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineKind {
    Minimax,
    Random,
}

#[derive(Debug, Parser)]
#[command(name = "self_play", about = "Play the engine against itself")]
struct Args {
    /// TOML engine configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the configured search depth.
    #[arg(long)]
    depth: Option<u32>,

    /// Stop after this many plies.
    #[arg(long, default_value_t = 200)]
    max_plies: u32,

    #[arg(long, value_enum, default_value_t = EngineKind::Minimax)]
    white: EngineKind,

    #[arg(long, value_enum, default_value_t = EngineKind::Random)]
    black: EngineKind,

    /// Seed for random engines.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the board after every ply.
    #[arg(long, short)]
    verbose: bool,
}

fn build_engine(kind: EngineKind, config: EngineConfig, seed: Option<u64>) -> Box<dyn Engine> {
    match kind {
        EngineKind::Minimax => Box::new(MinimaxEngine::new(config)),
        EngineKind::Random => match seed {
            Some(seed) => Box::new(RandomEngine::with_seed(seed)),
            None => Box::new(RandomEngine::new()),
        },
    }
}

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };
    if let Some(depth) = args.depth {
        config.search.depth = depth;
        config.validate()?;
    }

    let mut white = build_engine(args.white, config, args.seed);
    let mut black = build_engine(args.black, config, args.seed.map(|seed| seed.wrapping_add(1)));
    info!(white = white.name(), black = black.name(), depth = config.search.depth, "starting self play");

    let mut board = Board::standard();
    for ply in 0..args.max_plies {
        let player = board.current_player();
        if player.is_in_check_mate() {
            println!("{board}\ncheckmate, {} wins after {ply} plies", player.alliance().opposite());
            return Ok(());
        }
        if player.is_in_stale_mate() {
            println!("{board}\nstalemate after {ply} plies");
            return Ok(());
        }

        let engine = match player.alliance() {
            Alliance::White => &mut white,
            Alliance::Black => &mut black,
        };
        let output = engine.choose_move(&board)?;
        println!("{:>3}. {} {}", ply + 1, player.alliance(), output.best_move);

        let next = player.make_move(&output.best_move).into_board();
        board = next;
        if args.verbose {
            println!("{board}\n");
        }
    }

    println!("{board}\nstopped after {} plies", args.max_plies);
    Ok(())
}
