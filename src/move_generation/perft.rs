use crate::game_state::game_state::GameState;
use crate::game_state::scoped_move::ScopedMove;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::ChessMove;

/// Leaf tallies for a perft run. Everything except `nodes` describes the move
/// that reached the leaf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
    pub stalemates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
        self.stalemates += rhs.stalemates;
    }
}

/// Counts leaf positions `depth` plies below `game_state`. The ply limit is
/// ignored; this measures move generation only.
pub fn perft<G: MoveGenerator>(generator: &G, game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let flags = game_state.flags;
    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(game_state) {
        total.merge(perft_move(generator, game_state, mv, depth));
    }
    game_state.flags = flags;
    total
}

/// Per-root-move node counts, useful when comparing against another
/// generator.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> Vec<(ChessMove, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    let flags = game_state.flags;
    let divided = generator
        .generate_legal_moves(game_state)
        .into_iter()
        .map(|mv| (mv, perft_move(generator, game_state, mv, depth).nodes))
        .collect();
    game_state.flags = flags;
    divided
}

fn perft_move<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    mv: ChessMove,
    depth: u8,
) -> PerftCounts {
    let mut child = ScopedMove::apply(game_state, mv);
    if depth > 1 {
        return perft(generator, &mut child, depth - 1);
    }

    let mut leaf = PerftCounts {
        nodes: 1,
        captures: usize::from(mv.is_capture()),
        promotions: usize::from(mv.is_promotion()),
        ..PerftCounts::default()
    };
    let side = child.side_to_move;
    if is_in_check(&child, side) {
        leaf.checks = 1;
    }
    if generator.generate_legal_moves(&mut child).is_empty() {
        if child.flags.in_checkmate {
            leaf.checkmates = 1;
        } else {
            leaf.stalemates = 1;
        }
    }
    leaf
}
