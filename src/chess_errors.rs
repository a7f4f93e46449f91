//! Errors used throughout the minichess engine.
//!
//! `ChessError` is the single error type returned by the public API, the
//! layout/notation parsers and the engines. Every variant is recoverable: an
//! operation that fails with one of these leaves the `GameState` untouched.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

/// Unified error type for the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Coordinates outside the 6-row by 5-column board.
    #[error("invalid square ({row}, {col}): rows must be in 0..6 and columns in 0..5")]
    InvalidSquare { row: i32, col: i32 },

    /// The origin square of a requested move is empty.
    #[error("no piece at square {square}")]
    NoPieceAtSquare { square: Square },

    /// A piece (or a search) was requested for the side that is not to move.
    #[error("{requested:?} cannot move: it is {side_to_move:?}'s turn")]
    WrongSideToMove {
        side_to_move: Color,
        requested: Color,
    },

    /// The destination is not in the legal set for the piece on the origin.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// Undo was requested with an empty move log.
    #[error("no move to undo")]
    NoHistory,

    /// A move was attempted after the game already ended on the ply limit.
    #[error("the game is over")]
    GameOver,

    /// A text board layout could not be parsed or violates a board invariant.
    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    /// A square or move in algebraic notation could not be interpreted.
    #[error("invalid notation: {0}")]
    InvalidNotation(String),

    /// A game record is malformed or contains a move that cannot be replayed.
    #[error("invalid game record: {0}")]
    InvalidRecord(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
