//! Minichess rule constants.
//!
//! Board geometry lives in `chess_types`; this module holds the fixed
//! starting layout and the simplified end-of-game ply limit.

use crate::game_state::chess_types::PieceKind;

/// Back rank from the a-file to the e-file, identical for both colors.
pub const BACK_RANK: [PieceKind; 5] = [
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Knight,
];

/// Column of the king on both back ranks.
pub const KING_COL: usize = king_col();

const fn king_col() -> usize {
    let mut col = 0;
    while col < BACK_RANK.len() {
        if matches!(BACK_RANK[col], PieceKind::King) {
            return col;
        }
        col += 1;
    }
    panic!("back rank has no king");
}

/// Standard starting position in the text layout format.
pub const STARTING_LAYOUT: &str = "rbqkn/ppppp/5/5/PPPPP/RBQKN w 0";

/// Once this many plies have been played the game ends on material.
pub const PLY_LIMIT: u16 = 30;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn king_column_matches_the_back_rank() {
        assert_eq!(KING_COL, 3);
        assert_eq!(BACK_RANK[KING_COL], PieceKind::King);
    }
}
