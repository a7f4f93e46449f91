//! Pluggable board evaluation.
//!
//! Search stays independent of the heuristic by scoring positions through the
//! `BoardScorer` trait. Scores are White-relative: positive favors White.
//! Both scorers read the terminal flags set by legal-move generation, so a
//! position must have had its legal moves generated before it is scored.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::king_moves::king_attacks;

pub const CHECKMATE_SCORE: i32 = 1000;
pub const STALEMATE_SCORE: i32 = 0;

pub trait BoardScorer: Send + Sync {
    /// Score from White's perspective.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Checkmate, stalemate or `None` for a position still in play.
#[inline]
fn terminal_score(game_state: &GameState) -> Option<i32> {
    if game_state.flags.in_checkmate {
        return Some(-game_state.side_to_move.sign() * CHECKMATE_SCORE);
    }
    if game_state.flags.in_stalemate {
        return Some(STALEMATE_SCORE);
    }
    None
}

/// Terminal shortcut plus material balance. Cheap enough for every node of
/// the deep search.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        terminal_score(game_state).unwrap_or_else(|| game_state.material_balance())
    }
}

/// Material (in tenths of a pawn), piece-square tables and king safety.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl PositionalScorer {
    const MATERIAL_WEIGHT: i32 = 10;

    fn positional_term(game_state: &GameState) -> i32 {
        Square::all()
            .filter_map(|square| game_state.piece_at(square).map(|piece| (square, piece)))
            .map(|(square, piece)| piece.color.sign() * piece_square_bonus(piece, square))
            .sum()
    }
}

impl BoardScorer for PositionalScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        if let Some(score) = terminal_score(game_state) {
            return score;
        }

        game_state.material_balance() * Self::MATERIAL_WEIGHT
            + Self::positional_term(game_state)
            + king_safety(game_state, Color::White)
            - king_safety(game_state, Color::Black)
    }
}

type SquareTable = [[i32; BOARD_COLS]; BOARD_ROWS];

const KNIGHT_TABLE: SquareTable = [
    [1, 1, 1, 1, 1],
    [1, 2, 2, 2, 1],
    [1, 2, 3, 2, 1],
    [1, 2, 3, 2, 1],
    [1, 2, 2, 2, 1],
    [1, 1, 1, 1, 1],
];

const BISHOP_TABLE: SquareTable = [
    [3, 2, 1, 2, 3],
    [3, 3, 2, 3, 3],
    [2, 3, 3, 3, 2],
    [2, 3, 3, 3, 2],
    [3, 3, 2, 3, 3],
    [3, 2, 1, 2, 3],
];

const QUEEN_TABLE: SquareTable = [
    [1, 2, 1, 2, 1],
    [1, 2, 2, 2, 1],
    [1, 2, 3, 2, 1],
    [1, 2, 3, 2, 1],
    [1, 2, 2, 2, 1],
    [1, 2, 1, 2, 1],
];

const ROOK_TABLE: SquareTable = [
    [3, 3, 3, 3, 3],
    [3, 2, 2, 2, 3],
    [1, 2, 1, 2, 1],
    [1, 2, 1, 2, 1],
    [3, 2, 2, 2, 3],
    [3, 3, 3, 3, 3],
];

// White pawns advance toward row 0; Black reads the table upside down.
const WHITE_PAWN_TABLE: SquareTable = [
    [5, 5, 5, 5, 5],
    [4, 4, 4, 4, 4],
    [3, 3, 3, 3, 3],
    [2, 2, 2, 2, 2],
    [1, 1, 1, 1, 1],
    [0, 0, 0, 0, 0],
];

/// Table bonus for `piece` on `square`, always non-negative.
pub fn piece_square_bonus(piece: Piece, square: Square) -> i32 {
    let (row, col) = (square.row(), square.col());
    match piece.kind {
        PieceKind::Pawn => match piece.color {
            Color::White => WHITE_PAWN_TABLE[row][col],
            Color::Black => WHITE_PAWN_TABLE[BOARD_ROWS - 1 - row][col],
        },
        PieceKind::Knight => KNIGHT_TABLE[row][col],
        PieceKind::Bishop => BISHOP_TABLE[row][col],
        PieceKind::Rook => ROOK_TABLE[row][col],
        PieceKind::Queen => QUEEN_TABLE[row][col],
        PieceKind::King => 0,
    }
}

/// Pawn shield, open king file and adjacent enemy pieces for `color`'s king.
///
/// * +1 per own pawn in the two rows ahead of the king on its file or a
///   neighbouring file.
/// * -1 when no pawn of either color stands on the king's file.
/// * -1 per opponent piece on a square next to the king.
pub fn king_safety(game_state: &GameState, color: Color) -> i32 {
    let king = game_state.king_square(color);

    let shield = [1, 2]
        .into_iter()
        .flat_map(|steps| {
            [-1, 0, 1]
                .into_iter()
                .filter_map(move |d_col| king.offset(color.forward() * steps, d_col))
        })
        .filter(|square| game_state.piece_at(*square) == Some(Piece::new(color, PieceKind::Pawn)))
        .count() as i32;

    let file_has_pawn = (0..BOARD_ROWS).any(|row| {
        game_state.board[row][king.col()].is_some_and(|piece| piece.kind == PieceKind::Pawn)
    });
    let open_file = if file_has_pawn { 0 } else { -1 };

    let threats =
        (king_attacks(king.index()) & game_state.occupancy(color.opposite())).count_ones() as i32;

    shield + open_file - threats
}
