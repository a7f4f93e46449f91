use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::chess_move::ChessMove;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<ChessMove>,
) {
    let own_occ = game_state.occupancy(piece.color);
    let targets = rook_attacks(from, game_state.occupancy_all()) & !own_occ;
    push_target_moves(game_state, from, piece, targets, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn rook_ray_includes_capture_and_excludes_friendly_blocker() {
        // Rook a1, black pawn a4, white king d1.
        let game = GameState::from_layout("k4/5/p4/5/5/R2K1 w 0").unwrap();
        let from = Square::new(5, 0).unwrap();
        let mut out = Vec::new();
        generate_rook_moves(&game, from, game.piece_at(from).unwrap(), &mut out);

        let captures: Vec<_> = out.iter().filter(|m| m.is_capture()).collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].to(), Square::new(2, 0).unwrap());
        // a2, a3, a4 up the file and b1, c1 along the rank.
        assert_eq!(out.len(), 5);
    }
}
