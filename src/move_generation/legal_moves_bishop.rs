use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::chess_move::ChessMove;

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<ChessMove>,
) {
    let own_occ = game_state.occupancy(piece.color);
    let targets = bishop_attacks(from, game_state.occupancy_all()) & !own_occ;
    push_target_moves(game_state, from, piece, targets, out);
}
