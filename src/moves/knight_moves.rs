use crate::game_state::chess_types::{mask_if_on_board, SquareMask, BOARD_COLS, SQUARE_COUNT};

pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

pub const KNIGHT_ATTACKS: [SquareMask; SQUARE_COUNT] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square_index: usize) -> SquareMask {
    KNIGHT_ATTACKS[square_index]
}

const fn generate_knight_attacks() -> [SquareMask; SQUARE_COUNT] {
    let mut table = [0; SQUARE_COUNT];
    let mut sq = 0usize;

    while sq < SQUARE_COUNT {
        let row = (sq / BOARD_COLS) as i32;
        let col = (sq % BOARD_COLS) as i32;
        let mut attacks = 0;

        let mut i = 0usize;
        while i < KNIGHT_OFFSETS.len() {
            let (d_row, d_col) = KNIGHT_OFFSETS[i];
            attacks |= mask_if_on_board(row + d_row, col + d_col);
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}
