//! Coordinate move text (`c2c3`, `Ne1d3`) resolved against the legal moves of
//! a position.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_moves_from;
use crate::moves::chess_move::ChessMove;
use crate::utils::algebraic::algebraic_to_square;

/// Finds the legal move written as `[piece letter]<from><to>`. An optional
/// trailing `=Q` or `Q` promotion marker is accepted and ignored, since
/// promotion is always to a queen.
pub fn parse_coordinate_move(game_state: &mut GameState, text: &str) -> ChessResult<ChessMove> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_suffix("=Q")
        .or_else(|| trimmed.strip_suffix('Q').filter(|rest| rest.len() >= 4))
        .unwrap_or(trimmed);

    let (letter, squares) = match body.chars().next() {
        Some(ch) if ch.is_ascii_uppercase() => (Some(ch), &body[1..]),
        _ => (None, body),
    };

    if squares.len() != 4 || !squares.is_ascii() {
        return Err(ChessError::InvalidNotation(format!(
            "invalid coordinate move: {text}"
        )));
    }

    let from = algebraic_to_square(&squares[0..2])?;
    let to = algebraic_to_square(&squares[2..4])?;

    let piece = game_state
        .piece_at(from)
        .ok_or(ChessError::NoPieceAtSquare { square: from })?;
    if let Some(letter) = letter {
        if PieceKind::from_letter(letter) != Some(piece.kind) {
            return Err(ChessError::InvalidNotation(format!(
                "{text}: {from} holds a {:?}",
                piece.kind
            )));
        }
    }

    legal_moves_from(game_state, from)
        .into_iter()
        .find(|mv| mv.to() == to)
        .ok_or(ChessError::IllegalMove { from, to })
}
