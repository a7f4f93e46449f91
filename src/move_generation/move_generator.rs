use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

/// Produces the legal moves for the side to move.
///
/// Implementations may play moves speculatively but must hand the position
/// back unchanged apart from the terminal flags, which they set for it.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> Vec<ChessMove>;
}
