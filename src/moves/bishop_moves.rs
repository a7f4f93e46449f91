use crate::game_state::chess_types::{Square, SquareMask};
use crate::moves::rook_moves::trace_ray;

pub const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

#[inline]
pub fn bishop_attacks(square: Square, occupancy: SquareMask) -> SquareMask {
    BISHOP_DIRECTIONS
        .iter()
        .fold(0, |acc, &(d_row, d_col)| acc | trace_ray(square, d_row, d_col, occupancy))
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;
    use crate::game_state::chess_types::Square;

    #[test]
    fn centre_bishop_on_empty_board() {
        let c3 = Square::new(3, 2).unwrap();
        // Diagonals: 2 + 2 up, 2 + 2 down.
        assert_eq!(bishop_attacks(c3, 0).count_ones(), 8);
    }
}
