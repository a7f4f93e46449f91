//! Core value types for the 6x5 minichess board.
//!
//! Colors, piece kinds and squares are small `Copy` values. A board cell is an
//! `Option<Piece>`, so "empty" is an explicit variant rather than a sentinel.
//! Squares also have a bit index (`row * BOARD_COLS + col`) so attack sets can
//! be carried in a 30-bit `SquareMask`.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};

pub use crate::game_state::game_state::GameState;

pub const BOARD_ROWS: usize = 6;
pub const BOARD_COLS: usize = 5;
pub const SQUARE_COUNT: usize = BOARD_ROWS * BOARD_COLS;

/// One bit per square, bit index `row * BOARD_COLS + col`.
pub type SquareMask = u32;

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// `+1` for White, `-1` for Black. Converts White-relative scores to
    /// side-to-move-relative ones.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row delta of a pawn step. White starts on row 4 and moves toward row 0.
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The far rank on which this color's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => BOARD_ROWS - 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Material value in pawns. The king is never captured, so it counts zero.
    #[inline]
    pub const fn material_value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// Upper-case letter used in layouts and move notation.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece. Pieces have no identity beyond the square they stand on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Layout character: upper case for White, lower case for Black.
    pub fn to_char(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };
        PieceKind::from_letter(ch).map(|kind| Piece::new(color, kind))
    }
}

/// Contents of one board cell; `None` is an empty square.
pub type Cell = Option<Piece>;

/// Shared bounds predicate: row in `0..6`, column in `0..5`.
#[inline]
pub const fn is_on_board(row: i32, col: i32) -> bool {
    row >= 0 && row < BOARD_ROWS as i32 && col >= 0 && col < BOARD_COLS as i32
}

/// Single-bit mask for `(row, col)`, or zero when off the board.
#[inline]
pub const fn mask_if_on_board(row: i32, col: i32) -> SquareMask {
    if !is_on_board(row, col) {
        return 0;
    }
    1 << (row as usize * BOARD_COLS + col as usize)
}

/// A board coordinate. Construction through [`Square::new`] is checked, so a
/// `Square` value is always on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: i32, col: i32) -> ChessResult<Self> {
        if !is_on_board(row, col) {
            return Err(ChessError::InvalidSquare { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Square for a bit index in `0..SQUARE_COUNT`. Callers derive the index
    /// from a board mask or another square.
    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        debug_assert!(index < SQUARE_COUNT);
        Self {
            row: (index / BOARD_COLS) as u8,
            col: (index % BOARD_COLS) as u8,
        }
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_COLS + self.col as usize
    }

    #[inline]
    pub const fn mask(self) -> SquareMask {
        1 << self.index()
    }

    /// The square `(row + d_row, col + d_col)`, if it is on the board.
    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        let row = self.row as i32 + d_row;
        let col = self.col as i32 + d_col;
        if is_on_board(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 30 squares, row by row from Black's back rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    /// Algebraic coordinate: files `a..e` left to right, rank 1 is row 5.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = BOARD_ROWS - self.row as usize;
        write!(f, "{file}{rank}")
    }
}

/// Iterates the squares whose bits are set in `mask`, lowest index first.
pub fn squares_in(mut mask: SquareMask) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let index = mask.trailing_zeros() as usize;
        mask &= mask - 1;
        Some(Square::from_index(index))
    })
}
