use crate::game_state::chess_types::{Square, SquareMask};

pub const ROOK_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Squares a rook on `square` reaches given `occupancy`. Each ray includes
/// the first occupied square it meets, whatever its color.
#[inline]
pub fn rook_attacks(square: Square, occupancy: SquareMask) -> SquareMask {
    ROOK_DIRECTIONS
        .iter()
        .fold(0, |acc, &(d_row, d_col)| acc | trace_ray(square, d_row, d_col, occupancy))
}

pub(crate) fn trace_ray(square: Square, d_row: i32, d_col: i32, occupancy: SquareMask) -> SquareMask {
    let mut attacks = 0;
    let mut current = square;

    while let Some(next) = current.offset(d_row, d_col) {
        let bit = next.mask();
        attacks |= bit;
        if occupancy & bit != 0 {
            break;
        }
        current = next;
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::rook_attacks;
    use crate::game_state::chess_types::Square;

    #[test]
    fn open_board_rook_sees_its_row_and_column() {
        let c3 = Square::new(3, 2).unwrap();
        assert_eq!(rook_attacks(c3, 0).count_ones(), 9);
    }

    #[test]
    fn rays_stop_on_the_first_blocker() {
        let a1 = Square::new(5, 0).unwrap();
        let blocker = Square::new(3, 0).unwrap();
        let attacks = rook_attacks(a1, blocker.mask());
        assert_ne!(attacks & blocker.mask(), 0);
        assert_eq!(attacks & Square::new(2, 0).unwrap().mask(), 0);
        assert_eq!(attacks.count_ones(), 2 + 4);
    }
}
