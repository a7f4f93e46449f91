//! Cheap move ordering and root shuffling.

use std::cmp::Reverse;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::game_state::chess_types::PieceKind;
use crate::moves::chess_move::ChessMove;

/// Ordering key in tenths of a pawn: a capture is worth half the captured
/// piece, a promotion a little less than half a pawn.
#[inline]
pub fn order_score(mv: &ChessMove) -> i32 {
    let capture = mv
        .captured_piece()
        .map_or(0, |piece| piece.kind.material_value() * 10 / 2);
    let promotion = if mv.is_promotion() {
        (PieceKind::Queen.material_value() - PieceKind::Pawn.material_value()) / 2
    } else {
        0
    };
    capture + promotion
}

/// Best-first by `order_score`. The sort is stable, so equally scored moves
/// keep their incoming (possibly shuffled) order. `candidate_limit` keeps
/// only the first N moves; `None` keeps them all.
pub fn order_moves(mut moves: Vec<ChessMove>, candidate_limit: Option<usize>) -> Vec<ChessMove> {
    moves.sort_by_key(|mv| Reverse(order_score(mv)));
    if let Some(limit) = candidate_limit {
        moves.truncate(limit.max(1));
    }
    moves
}

/// Shuffles root candidates so equal scores do not always resolve the same
/// way. A seed makes the shuffle reproducible.
pub fn shuffle_root_moves(moves: &mut [ChessMove], seed: Option<u64>) {
    match seed {
        Some(seed) => moves.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => moves.shuffle(&mut rand::rng()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::generate_legal_moves;

    #[test]
    fn captures_come_first_by_victim_value() {
        // White rook c3 can take the queen on c5 or the pawn on a3.
        let mut game = GameState::from_layout("k4/2q2/5/p1R2/5/4K w 0").unwrap();
        let ordered = order_moves(generate_legal_moves(&mut game), None);

        assert_eq!(order_score(&ordered[0]), 45);
        assert_eq!(ordered[0].to().to_string(), "c5");
        assert_eq!(order_score(&ordered[1]), 5);
        assert!(ordered[2..].iter().all(|mv| !mv.is_capture()));
    }

    #[test]
    fn candidate_limit_truncates_but_keeps_one() {
        let mut game = GameState::new_game();
        let moves = generate_legal_moves(&mut game);
        assert_eq!(order_moves(moves.clone(), None).len(), 6);
        assert_eq!(order_moves(moves.clone(), Some(2)).len(), 2);
        assert_eq!(order_moves(moves, Some(0)).len(), 1);
    }

    #[test]
    fn seeded_shuffles_repeat() {
        let mut game = GameState::new_game();
        let moves = generate_legal_moves(&mut game);
        let mut a = moves.clone();
        let mut b = moves.clone();
        shuffle_root_moves(&mut a, Some(7));
        shuffle_root_moves(&mut b, Some(7));
        assert_eq!(a, b);
        a.sort_by_key(ChessMove::id);
        let mut sorted = moves;
        sorted.sort_by_key(ChessMove::id);
        assert_eq!(a, sorted);
    }
}
