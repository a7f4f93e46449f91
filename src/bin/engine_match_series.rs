//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose --games 20`
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use minichess::chess_errors::ChessError;
use minichess::engines::engine_minimax::MinimaxEngine;
use minichess::engines::engine_negamax::NegamaxEngine;
use minichess::engines::engine_trait::Engine;
use minichess::search::minimax::MinimaxConfig;
use minichess::search::negamax::SearchConfig;
use minichess::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use tracing_subscriber::EnvFilter;

fn parse_games(args: &[String]) -> Result<u16, ChessError> {
    match args.iter().position(|a| a == "--games") {
        None => Ok(10),
        Some(i) => args
            .get(i + 1)
            .and_then(|n| n.parse::<u16>().ok())
            .ok_or_else(|| ChessError::InvalidNotation("--games expects a number".to_string())),
    }
}

fn main() -> Result<(), ChessError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let games = parse_games(&args)?;

    let player1 = || Box::new(NegamaxEngine::new(SearchConfig::default())) as Box<dyn Engine>;
    let player2 = || Box::new(MinimaxEngine::new(MinimaxConfig::default())) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games,
            base_seed: 1234,
            per_game: MatchConfig::default(),
            verbose,
        },
    )?;

    println!("player1=negamax(pvs, depth 3) player2=minimax(depth 4)");
    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
