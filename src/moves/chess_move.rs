//! The move value.
//!
//! A `ChessMove` records everything `unmake_move` needs: origin, destination,
//! the moving piece as it was before the move, the captured piece (if any) and
//! whether the move promotes. Promotion is always to a queen and follows from
//! the destination rank, so two moves are the same move when their origin and
//! destination squares match.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_types::{Cell, Piece, PieceKind, Square};
use crate::utils::algebraic::move_to_notation;

#[derive(Debug, Clone, Copy)]
pub struct ChessMove {
    from: Square,
    to: Square,
    moved_piece: Piece,
    captured_piece: Cell,
    is_promotion: bool,
}

impl ChessMove {
    pub fn new(from: Square, to: Square, moved_piece: Piece, captured_piece: Cell) -> Self {
        let is_promotion =
            moved_piece.kind == PieceKind::Pawn && to.row() == moved_piece.color.promotion_row();
        Self {
            from,
            to,
            moved_piece,
            captured_piece,
            is_promotion,
        }
    }

    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Square {
        self.to
    }

    #[inline]
    pub fn moved_piece(&self) -> Piece {
        self.moved_piece
    }

    #[inline]
    pub fn captured_piece(&self) -> Cell {
        self.captured_piece
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.is_promotion
    }

    /// Numeric identity `from_row*1000 + from_col*100 + to_row*10 + to_col`.
    pub fn id(&self) -> u16 {
        (self.from.row() * 1000 + self.from.col() * 100 + self.to.row() * 10 + self.to.col())
            as u16
    }
}

impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for ChessMove {}

impl Hash for ChessMove {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_notation(self))
    }
}
