//! Mutable minichess position.
//!
//! `GameState` is the single source of truth for a game: the 6x5 board,
//! per-color occupancy masks, side to move, cached king squares, ply count,
//! terminal flags and the move log that drives make/unmake. All engine
//! functions receive it explicitly; nothing is kept in ambient state.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{BACK_RANK, KING_COL, PLY_LIMIT};
use crate::game_state::chess_types::*;
use crate::game_state::game_status::{GameOutcome, GameStatus, TerminalFlags};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::moves::chess_move::ChessMove;
use crate::utils::layout_generator::generate_layout;
use crate::utils::layout_parser::parse_layout;

pub type Board = [[Cell; BOARD_COLS]; BOARD_ROWS];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    // Occupancy caches, kept in step with `board`.
    pub occupancy_by_color: [SquareMask; 2],

    pub side_to_move: Color,

    // Always equal to the actual king locations.
    pub king_squares: [Square; 2],

    pub ply_count: u16,
    pub flags: TerminalFlags,

    /// White-relative material balance captured when `ply_count` reached
    /// `PLY_LIMIT`.
    pub ply_limit_score: Option<i32>,

    pub move_log: Vec<ChessMove>,
}

impl GameState {
    /// Fixed initial layout: back rank R B Q K N with a pawn rank in front,
    /// mirrored for both colors. White moves first.
    pub fn new_game() -> Self {
        let mut board: Board = [[None; BOARD_COLS]; BOARD_ROWS];
        for (col, kind) in BACK_RANK.iter().copied().enumerate() {
            board[0][col] = Some(Piece::new(Color::Black, kind));
            board[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board[BOARD_ROWS - 2][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board[BOARD_ROWS - 1][col] = Some(Piece::new(Color::White, kind));
        }

        let mut game_state = Self {
            board,
            occupancy_by_color: [0; 2],
            side_to_move: Color::White,
            king_squares: [
                Square::from_index((BOARD_ROWS - 1) * BOARD_COLS + KING_COL),
                Square::from_index(KING_COL),
            ],
            ply_count: 0,
            flags: TerminalFlags::default(),
            ply_limit_score: None,
            move_log: Vec::new(),
        };
        game_state.recalc_occupancy();
        game_state
    }

    /// Builds a position from a bare board, validating that each color has
    /// exactly one king and that the side not to move is not in check.
    pub fn from_board(board: Board, side_to_move: Color, ply_count: u16) -> ChessResult<Self> {
        let mut kings: [Vec<Square>; 2] = [Vec::new(), Vec::new()];
        for square in Square::all() {
            if let Some(piece) = board[square.row()][square.col()] {
                if piece.kind == PieceKind::King {
                    kings[piece.color.index()].push(square);
                }
            }
        }

        for color in Color::ALL {
            let found = kings[color.index()].len();
            if found != 1 {
                return Err(ChessError::InvalidLayout(format!(
                    "{color:?} must have exactly one king, found {found}"
                )));
            }
        }

        let mut game_state = Self {
            board,
            occupancy_by_color: [0; 2],
            side_to_move,
            king_squares: [kings[0][0], kings[1][0]],
            ply_count,
            flags: TerminalFlags::default(),
            ply_limit_score: None,
            move_log: Vec::new(),
        };
        game_state.recalc_occupancy();

        // Otherwise the king of the side not to move could be captured.
        let waiting = side_to_move.opposite();
        if is_in_check(&game_state, waiting) {
            return Err(ChessError::InvalidLayout(format!(
                "{waiting:?} is in check but it is {side_to_move:?}'s turn"
            )));
        }

        if ply_count >= PLY_LIMIT {
            game_state.ply_limit_score = Some(game_state.material_balance());
        }
        Ok(game_state)
    }

    #[inline]
    pub fn from_layout(layout: &str) -> ChessResult<Self> {
        parse_layout(layout)
    }

    #[inline]
    pub fn get_layout(&self) -> String {
        generate_layout(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Cell {
        self.board[square.row()][square.col()]
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> SquareMask {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn occupancy_all(&self) -> SquareMask {
        self.occupancy_by_color[0] | self.occupancy_by_color[1]
    }

    /// Sum of piece values, White minus Black.
    pub fn material_balance(&self) -> i32 {
        self.board
            .iter()
            .flatten()
            .flatten()
            .map(|piece| piece.color.sign() * piece.kind.material_value())
            .sum()
    }

    #[inline]
    pub fn ply_limit_reached(&self) -> bool {
        self.ply_limit_score.is_some()
    }

    /// Outcome of the game, if it has ended. Checkmate and stalemate are only
    /// known once legal moves have been generated for this position.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.flags.in_checkmate {
            let winner = self
                .flags
                .winner
                .unwrap_or_else(|| self.side_to_move.opposite());
            return Some(GameOutcome::Checkmate { winner });
        }
        if self.flags.in_stalemate {
            return Some(GameOutcome::Stalemate);
        }
        self.ply_limit_score.map(|score| GameOutcome::PlyLimit {
            winner: match score {
                s if s > 0 => Some(Color::White),
                s if s < 0 => Some(Color::Black),
                _ => None,
            },
        })
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        GameStatus::from_state(self)
    }

    /// Plays `mv` without any legality check. Legality is the caller's job,
    /// which keeps speculative moves in search cheap.
    pub fn make_move(&mut self, mv: ChessMove) {
        let mover = mv.moved_piece();

        self.clear_square(mv.from());
        self.clear_square(mv.to());
        let placed = if mv.is_promotion() {
            Piece::new(mover.color, PieceKind::Queen)
        } else {
            mover
        };
        self.put_piece(mv.to(), placed);

        if mover.kind == PieceKind::King {
            self.king_squares[mover.color.index()] = mv.to();
        }

        self.move_log.push(mv);
        self.side_to_move = self.side_to_move.opposite();
        self.ply_count = self.ply_count.saturating_add(1);
        self.flags = TerminalFlags::default();

        if self.ply_count == PLY_LIMIT {
            self.ply_limit_score = Some(self.material_balance());
        }
    }

    /// Reverts the last logged move and returns it. Terminal flags are cleared
    /// and must be recomputed by the caller.
    pub fn unmake_move(&mut self) -> ChessResult<ChessMove> {
        let mv = self.move_log.pop().ok_or(ChessError::NoHistory)?;

        self.clear_square(mv.to());
        if let Some(captured) = mv.captured_piece() {
            self.put_piece(mv.to(), captured);
        }
        self.put_piece(mv.from(), mv.moved_piece());

        let mover = mv.moved_piece();
        if mover.kind == PieceKind::King {
            self.king_squares[mover.color.index()] = mv.from();
        }

        self.side_to_move = self.side_to_move.opposite();
        self.ply_count = self.ply_count.saturating_sub(1);
        self.flags = TerminalFlags::default();

        if self.ply_count < PLY_LIMIT {
            self.ply_limit_score = None;
        }

        Ok(mv)
    }

    fn put_piece(&mut self, square: Square, piece: Piece) {
        self.board[square.row()][square.col()] = Some(piece);
        self.occupancy_by_color[piece.color.index()] |= square.mask();
    }

    fn clear_square(&mut self, square: Square) {
        if let Some(piece) = self.board[square.row()][square.col()].take() {
            self.occupancy_by_color[piece.color.index()] &= !square.mask();
        }
    }

    fn recalc_occupancy(&mut self) {
        self.occupancy_by_color = [0; 2];
        for square in Square::all() {
            if let Some(piece) = self.piece_at(square) {
                self.occupancy_by_color[piece.color.index()] |= square.mask();
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}
