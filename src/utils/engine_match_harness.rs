//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other from the standard
//! layout, with an optional seeded random opening prefix. Every game ends by
//! checkmate, stalemate or the ply limit.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info};

use crate::api::apply_move;
use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::game_state::game_status::GameOutcome;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::utils::algebraic::move_to_notation;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWinCheckmate { player: PlayerId, color: Color },
    PlayerWinOnMaterial { player: PlayerId, color: Color },
    DrawStalemate,
    DrawPlyLimit,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            opening_min_plies: 0,
            opening_max_plies: 4,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: GameOutcome,
    pub final_state: GameState,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single seeded engine-vs-engine match.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: MatchConfig,
) -> ChessResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let mut state = GameState::new_game();
    let opening_moves = apply_seeded_random_opening(
        &mut state,
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    )?;

    let mut played_moves = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    let outcome = loop {
        let legal_moves = generate_legal_moves(&mut state);
        if let Some(outcome) = state.outcome() {
            break outcome;
        }

        let mover = state.side_to_move;
        let started = Instant::now();
        let out = match mover {
            Color::White => engine_white.choose_move(&state, &config.go_params)?,
            Color::Black => engine_black.choose_move(&state, &config.go_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        // The game is not over, so there is at least one legal move.
        let chosen = match out.best_move.or_else(|| legal_moves.first().copied()) {
            Some(mv) => mv,
            None => return Err(ChessError::GameOver),
        };
        played_moves.push(move_to_notation(&chosen));
        apply_move(&mut state, chosen)?;
    };

    Ok(MatchResult {
        outcome,
        final_state: state,
        opening_moves,
        played_moves,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> ChessResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let (white_id, black_id) = if player1_is_white {
            (PlayerId::Player1, PlayerId::Player2)
        } else {
            (PlayerId::Player2, PlayerId::Player1)
        };
        debug!(game = i + 1, seed, white = ?white_id, black = ?black_id, "starting game");

        let mut player1 = player1_factory();
        let mut player2 = player2_factory();
        let result = if player1_is_white {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, config.per_game)?
        };

        let (p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.black_move_count,
                result.white_total_time_ns,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.white_move_count,
                result.black_total_time_ns,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let player_for = |color: Color| match color {
            Color::White => white_id,
            Color::Black => black_id,
        };
        let mapped = match result.outcome {
            GameOutcome::Checkmate { winner } => SeriesOutcome::PlayerWinCheckmate {
                player: player_for(winner),
                color: winner,
            },
            GameOutcome::PlyLimit {
                winner: Some(winner),
            } => SeriesOutcome::PlayerWinOnMaterial {
                player: player_for(winner),
                color: winner,
            },
            GameOutcome::Stalemate => SeriesOutcome::DrawStalemate,
            GameOutcome::PlyLimit { winner: None } => SeriesOutcome::DrawPlyLimit,
        };
        match mapped {
            SeriesOutcome::PlayerWinCheckmate { player, .. }
            | SeriesOutcome::PlayerWinOnMaterial { player, .. } => match player {
                PlayerId::Player1 => stats.player1_wins += 1,
                PlayerId::Player2 => stats.player2_wins += 1,
            },
            SeriesOutcome::DrawStalemate | SeriesOutcome::DrawPlyLimit => stats.draws += 1,
        }
        stats.outcomes.push(mapped);

        if config.verbose {
            info!(
                game = i + 1,
                of = config.games,
                result = ?mapped,
                moves = %result.played_moves.join(" "),
                p1_wins = stats.player1_wins,
                p2_wins = stats.player2_wins,
                draws = stats.draws,
                "game finished"
            );
            debug!("final position:\n{}", render_game_state(&result.final_state));
        }
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

fn apply_seeded_random_opening(
    state: &mut GameState,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> ChessResult<Vec<String>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening_moves = Vec::<String>::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        let legal_moves = generate_legal_moves(state);
        if legal_moves.is_empty() || state.ply_limit_reached() {
            break;
        }

        let chosen = legal_moves[rng.random_range(0..legal_moves.len())];
        opening_moves.push(move_to_notation(&chosen));
        apply_move(state, chosen)?;
    }

    Ok(opening_moves)
}
