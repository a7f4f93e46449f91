use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::chess_move::ChessMove;
use crate::moves::knight_moves::knight_attacks;

pub fn generate_knight_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<ChessMove>,
) {
    let own_occ = game_state.occupancy(piece.color);
    let targets = knight_attacks(from.index()) & !own_occ;
    push_target_moves(game_state, from, piece, targets, out);
}
