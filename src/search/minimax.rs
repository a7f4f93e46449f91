//! Plain minimax with alpha-beta pruning.
//!
//! White maximizes and Black minimizes a White-relative score. There is no
//! move ordering beyond the optional root shuffle.

use tracing::debug;

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::game_state::scoped_move::ScopedMove;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::BoardScorer;
use crate::search::move_ordering::shuffle_root_moves;
use crate::search::negamax::{leaf_score, SearchResult, SCORE_INFINITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxConfig {
    pub depth: u8,
    pub shuffle_root: bool,
    pub seed: Option<u64>,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            shuffle_root: true,
            seed: None,
        }
    }
}

/// Best move for the side to move, `None` only when it has no legal move. A
/// depth of zero searches one ply. `best_score` in the result is relative to
/// that side, matching `search_best_move`.
pub fn minimax_best_move<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &G,
    scorer: &S,
    config: &MinimaxConfig,
) -> SearchResult {
    let root_flags = game_state.flags;
    let root_side = game_state.side_to_move;
    let depth = config.depth.max(1);
    let mut nodes = 1u64;

    let mut root_moves = generator.generate_legal_moves(game_state);
    if root_moves.is_empty() {
        let best_score = leaf_score(game_state, scorer, 0);
        game_state.flags = root_flags;
        return SearchResult {
            best_move: None,
            best_score,
            nodes,
        };
    }
    if config.shuffle_root {
        shuffle_root_moves(&mut root_moves, config.seed);
    }

    let maximizing = root_side == Color::White;
    let mut alpha = -SCORE_INFINITY;
    let mut beta = SCORE_INFINITY;
    let mut best_move = None;
    let mut best_value = if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY };

    for mv in root_moves {
        let value = {
            let mut child = ScopedMove::apply(game_state, mv);
            minimax(&mut child, generator, scorer, depth - 1, alpha, beta, 1, &mut nodes)
        };

        if (maximizing && value > best_value) || (!maximizing && value < best_value) {
            best_value = value;
            best_move = Some(mv);
        }
        if maximizing {
            alpha = alpha.max(value);
        } else {
            beta = beta.min(value);
        }
    }

    game_state.flags = root_flags;
    let best_score = root_side.sign() * best_value;
    debug!(
        depth,
        nodes,
        score = best_score,
        best = %best_move.map(|mv| mv.to_string()).unwrap_or_default(),
        "minimax search complete"
    );

    SearchResult {
        best_move,
        best_score,
        nodes,
    }
}

/// White-relative value of `game_state` searched `depth` plies deep.
#[allow(clippy::too_many_arguments)]
pub fn minimax<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &G,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    ply: u8,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    let moves = generator.generate_legal_moves(game_state);
    if depth == 0 || moves.is_empty() || game_state.ply_limit_reached() {
        return game_state.side_to_move.sign() * leaf_score(game_state, scorer, ply);
    }

    if game_state.side_to_move == Color::White {
        let mut max_eval = -SCORE_INFINITY;
        for mv in moves {
            let mut child = ScopedMove::apply(game_state, mv);
            let value = minimax(&mut child, generator, scorer, depth - 1, alpha, beta, ply + 1, nodes);
            drop(child);

            max_eval = max_eval.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = SCORE_INFINITY;
        for mv in moves {
            let mut child = ScopedMove::apply(game_state, mv);
            let value = minimax(&mut child, generator, scorer, depth - 1, alpha, beta, ply + 1, nodes);
            drop(child);

            min_eval = min_eval.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
