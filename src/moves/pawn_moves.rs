use crate::game_state::chess_types::{
    mask_if_on_board, Color, Square, SquareMask, BOARD_COLS, SQUARE_COUNT,
};

pub const WHITE_PAWN_ATTACKS: [SquareMask; SQUARE_COUNT] = generate_pawn_attacks(-1);
pub const BLACK_PAWN_ATTACKS: [SquareMask; SQUARE_COUNT] = generate_pawn_attacks(1);

/// Squares a pawn of `color` standing on `square_index` attacks diagonally.
#[inline]
pub const fn pawn_attacks(color: Color, square_index: usize) -> SquareMask {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square_index],
        Color::Black => BLACK_PAWN_ATTACKS[square_index],
    }
}

/// The square one step toward the opponent's back rank, if on the board.
#[inline]
pub fn pawn_push_square(color: Color, from: Square) -> Option<Square> {
    from.offset(color.forward(), 0)
}

const fn generate_pawn_attacks(forward: i32) -> [SquareMask; SQUARE_COUNT] {
    let mut table = [0; SQUARE_COUNT];
    let mut sq = 0usize;

    while sq < SQUARE_COUNT {
        let row = (sq / BOARD_COLS) as i32;
        let col = (sq % BOARD_COLS) as i32;
        table[sq] =
            mask_if_on_board(row + forward, col - 1) | mask_if_on_board(row + forward, col + 1);
        sq += 1;
    }

    table
}
