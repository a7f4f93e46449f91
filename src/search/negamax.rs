//! Negamax with alpha-beta pruning and principal-variation search.
//!
//! The first ordered move at each node is searched with the full window, the
//! rest with a null window `(alpha, alpha + 1)` and re-searched with the full
//! window only when the null-window result lands strictly inside
//! `(alpha, beta)`. The position is mutated in place through `ScopedMove`.

use tracing::{debug, trace};

use crate::game_state::game_state::GameState;
use crate::game_state::scoped_move::ScopedMove;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::ChessMove;
use crate::search::board_scoring::BoardScorer;
use crate::search::move_ordering::{order_moves, shuffle_root_moves};

/// Wider than any reachable score.
pub const SCORE_INFINITY: i32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below the root. Zero is treated as one.
    pub depth: u8,
    /// Shuffle root moves before ordering them.
    pub shuffle_root: bool,
    /// Keep only the best N ordered moves at every node. `None` searches the
    /// full legal set.
    pub candidate_limit: Option<usize>,
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            shuffle_root: true,
            candidate_limit: None,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<ChessMove>,
    /// Score of `best_move` for the side to move at the root.
    pub best_score: i32,
    pub nodes: u64,
}

/// Searches `game_state` and returns the best move for the side to move, or
/// `None` only when it has no legal move. The position, including its terminal
/// flags, is left exactly as it was.
pub fn search_best_move<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &G,
    scorer: &S,
    config: &SearchConfig,
) -> SearchResult {
    let root_flags = game_state.flags;
    let depth = config.depth.max(1);
    let mut searcher = Searcher {
        generator,
        scorer,
        candidate_limit: config.candidate_limit,
        nodes: 1,
    };

    let mut root_moves = generator.generate_legal_moves(game_state);
    if root_moves.is_empty() {
        let result = SearchResult {
            best_move: None,
            best_score: leaf_score(game_state, scorer, 0),
            nodes: 1,
        };
        game_state.flags = root_flags;
        return result;
    }

    if config.shuffle_root {
        shuffle_root_moves(&mut root_moves, config.seed);
    }
    let ordered = order_moves(root_moves, config.candidate_limit);

    let mut alpha = -SCORE_INFINITY;
    let beta = SCORE_INFINITY;
    let mut best_move = None;
    let mut best_score = -SCORE_INFINITY;

    for (index, mv) in ordered.into_iter().enumerate() {
        let score = {
            let mut child = ScopedMove::apply(game_state, mv);
            searcher.principal_variation(&mut child, depth - 1, alpha, beta, index == 0, 1)
        };
        trace!(mv = %mv, score, "root move");

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        if score > alpha {
            alpha = score;
        }
    }

    game_state.flags = root_flags;
    debug!(
        depth,
        nodes = searcher.nodes,
        score = best_score,
        best = %best_move.map(|mv| mv.to_string()).unwrap_or_default(),
        "negamax search complete"
    );

    SearchResult {
        best_move,
        best_score,
        nodes: searcher.nodes,
    }
}

/// Static value of a leaf for the side to move. A checkmate found `ply`
/// plies from the root is worth `ply` less to the winner so shorter mates
/// are preferred.
pub(crate) fn leaf_score<S: BoardScorer>(game_state: &GameState, scorer: &S, ply: u8) -> i32 {
    let score = game_state.side_to_move.sign() * scorer.score(game_state);
    if game_state.flags.in_checkmate {
        score + i32::from(ply)
    } else {
        score
    }
}

struct Searcher<'a, G, S> {
    generator: &'a G,
    scorer: &'a S,
    candidate_limit: Option<usize>,
    nodes: u64,
}

impl<G: MoveGenerator, S: BoardScorer> Searcher<'_, G, S> {
    /// Negated child score for the move just played on `child`. The first
    /// move at a node gets the full window; later ones a null window first.
    fn principal_variation(
        &mut self,
        child: &mut GameState,
        depth: u8,
        alpha: i32,
        beta: i32,
        full_window: bool,
        ply: u8,
    ) -> i32 {
        if full_window {
            return -self.negamax(child, depth, -beta, -alpha, ply);
        }

        let score = -self.negamax(child, depth, -alpha - 1, -alpha, ply);
        if score > alpha && score < beta {
            -self.negamax(child, depth, -beta, -alpha, ply)
        } else {
            score
        }
    }

    fn negamax(
        &mut self,
        game_state: &mut GameState,
        depth: u8,
        mut alpha: i32,
        beta: i32,
        ply: u8,
    ) -> i32 {
        self.nodes += 1;

        // Generated even at the horizon: the scorer needs the terminal flags.
        let moves = self.generator.generate_legal_moves(game_state);
        if depth == 0 || moves.is_empty() || game_state.ply_limit_reached() {
            return leaf_score(game_state, self.scorer, ply);
        }

        let mut best = -SCORE_INFINITY;
        for (index, mv) in order_moves(moves, self.candidate_limit)
            .into_iter()
            .enumerate()
        {
            let score = {
                let mut child = ScopedMove::apply(game_state, mv);
                self.principal_variation(&mut child, depth - 1, alpha, beta, index == 0, ply + 1)
            };

            if score > best {
                best = score;
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }

        best
    }
}
