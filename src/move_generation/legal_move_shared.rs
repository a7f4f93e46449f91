//! Shared plumbing for the per-piece pseudo-legal generators.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::ChessMove;

/// Pushes one move per set bit of `targets`, recording whatever stands on the
/// destination as the captured piece.
#[inline]
pub fn push_target_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    targets: SquareMask,
    out: &mut Vec<ChessMove>,
) {
    for to in squares_in(targets) {
        out.push(ChessMove::new(from, to, piece, game_state.piece_at(to)));
    }
}

/// Pseudo-legal moves of the piece on `from`, whichever color it is. Empty
/// squares produce nothing.
pub fn generate_pseudo_moves_from(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let Some(piece) = game_state.piece_at(from) else {
        return;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, piece, out),
        PieceKind::Knight => generate_knight_moves(game_state, from, piece, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, piece, out),
        PieceKind::Rook => generate_rook_moves(game_state, from, piece, out),
        PieceKind::Queen => generate_queen_moves(game_state, from, piece, out),
        PieceKind::King => generate_king_moves(game_state, from, piece, out),
    }
}

/// Every pseudo-legal move available to `color`, scanning squares row by row.
pub fn generate_pseudo_moves(game_state: &GameState, color: Color) -> Vec<ChessMove> {
    let mut out = Vec::<ChessMove>::with_capacity(48);
    for from in squares_in(game_state.occupancy(color)) {
        generate_pseudo_moves_from(game_state, from, &mut out);
    }
    out
}
