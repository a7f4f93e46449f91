use crate::game_state::chess_types::{mask_if_on_board, SquareMask, BOARD_COLS, SQUARE_COUNT};

pub const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const KING_ATTACKS: [SquareMask; SQUARE_COUNT] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square_index: usize) -> SquareMask {
    KING_ATTACKS[square_index]
}

const fn generate_king_attacks() -> [SquareMask; SQUARE_COUNT] {
    let mut table = [0; SQUARE_COUNT];
    let mut sq = 0usize;

    while sq < SQUARE_COUNT {
        let row = (sq / BOARD_COLS) as i32;
        let col = (sq % BOARD_COLS) as i32;
        let mut attacks = 0;

        let mut i = 0usize;
        while i < KING_OFFSETS.len() {
            let (d_row, d_col) = KING_OFFSETS[i];
            attacks |= mask_if_on_board(row + d_row, col + d_col);
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::king_attacks;
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_neighbourhoods_are_clipped_at_the_edges() {
        assert_eq!(king_attacks(Square::new(2, 2).unwrap().index()).count_ones(), 8);
        assert_eq!(king_attacks(Square::new(0, 0).unwrap().index()).count_ones(), 3);
        assert_eq!(king_attacks(Square::new(5, 2).unwrap().index()).count_ones(), 5);
    }
}
