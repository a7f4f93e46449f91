use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::chess_move::ChessMove;
use crate::moves::pawn_moves::{pawn_attacks, pawn_push_square};

/// Single step forward onto an empty square, diagonal steps forward only onto
/// an opponent piece. No double step and no en passant.
pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<ChessMove>,
) {
    let enemy_occ = game_state.occupancy(piece.color.opposite());

    let mut targets = pawn_attacks(piece.color, from.index()) & enemy_occ;
    if let Some(push) = pawn_push_square(piece.color, from) {
        if game_state.occupancy_all() & push.mask() == 0 {
            targets |= push.mask();
        }
    }

    push_target_moves(game_state, from, piece, targets, out);
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    fn moves_from(layout: &str, row: i32, col: i32) -> Vec<(usize, usize)> {
        let game = GameState::from_layout(layout).unwrap();
        let from = Square::new(row, col).unwrap();
        let piece = game.piece_at(from).unwrap();
        let mut out = Vec::new();
        generate_pawn_moves(&game, from, piece, &mut out);
        let mut targets: Vec<_> = out.iter().map(|m| (m.to().row(), m.to().col())).collect();
        targets.sort();
        targets
    }

    #[test]
    fn blocked_pawn_cannot_push_or_capture_own_pieces() {
        // White pawn c2 blocked by a black pawn on c3, white knight on b3.
        let targets = moves_from("k4/5/5/1Np2/2P2/4K w 0", 4, 2);
        assert!(targets.is_empty());
    }

    #[test]
    fn pawn_captures_diagonally_forward_only() {
        // Black pieces on b3 and d3 ahead of the c2 pawn, one behind on d1.
        let targets = moves_from("k4/5/5/1p1p1/2P2/3rK w 0", 4, 2);
        assert_eq!(targets, vec![(3, 1), (3, 2), (3, 3)]);
    }

    #[test]
    fn black_pawns_move_toward_row_five() {
        let targets = moves_from("k4/2p2/5/5/5/4K b 0", 1, 2);
        assert_eq!(targets, vec![(2, 2)]);
    }
}
