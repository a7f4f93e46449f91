//! Algebraic coordinates for the 6x5 board.
//!
//! Files `a..e` are columns 0..4. Rank 1 is White's back row (row 5) and
//! rank 6 is Black's (row 0), so `a1` is `(5, 0)` and `e6` is `(0, 4)`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{PieceKind, Square, BOARD_COLS, BOARD_ROWS};
use crate::moves::chess_move::ChessMove;

/// Convert algebraic notation (for example: "c3") to a square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidNotation(format!(
            "invalid algebraic square: {square}"
        )));
    }

    let file = bytes[0];
    let rank = bytes[1];
    let last_file = b'a' + BOARD_COLS as u8 - 1;
    let last_rank = b'0' + BOARD_ROWS as u8;

    if !(b'a'..=last_file).contains(&file) {
        return Err(ChessError::InvalidNotation(format!(
            "invalid algebraic file: {}",
            file as char
        )));
    }
    if !(b'1'..=last_rank).contains(&rank) {
        return Err(ChessError::InvalidNotation(format!(
            "invalid algebraic rank: {}",
            rank as char
        )));
    }

    let col = i32::from(file - b'a');
    let row = BOARD_ROWS as i32 - i32::from(rank - b'0');
    Square::new(row, col)
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Piece letter (none for pawns), origin, destination. The knight's opening
/// jump is `Ne1d3`, a pawn push is `c2c3`.
pub fn move_to_notation(mv: &ChessMove) -> String {
    let mut out = String::with_capacity(5);
    let kind = mv.moved_piece().kind;
    if kind != PieceKind::Pawn {
        out.push(kind.letter());
    }
    out.push_str(&square_to_algebraic(mv.from()));
    out.push_str(&square_to_algebraic(mv.to()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_the_expected_coordinates() {
        assert_eq!(algebraic_to_square("a1").unwrap(), Square::new(5, 0).unwrap());
        assert_eq!(algebraic_to_square("e6").unwrap(), Square::new(0, 4).unwrap());
        assert_eq!(square_to_algebraic(Square::new(4, 2).unwrap()), "c2");
    }

    #[test]
    fn out_of_board_coordinates_are_rejected() {
        for text in ["f1", "a7", "a0", "e", "", "c10"] {
            assert!(
                matches!(algebraic_to_square(text), Err(ChessError::InvalidNotation(_))),
                "{text} should be rejected"
            );
        }
    }
}
