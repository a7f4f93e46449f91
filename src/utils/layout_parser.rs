//! Text layout to `GameState`.
//!
//! A layout lists the six rows from row 0 (Black's back rank) to row 5,
//! separated by `/`, using upper case for White, lower case for Black and a
//! digit for a run of empty squares. Side to move (`w`/`b`) and the ply count
//! follow, e.g. `rbqkn/ppppp/5/5/PPPPP/RBQKN w 0`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::{Board, GameState};

pub fn parse_layout(layout: &str) -> ChessResult<GameState> {
    let mut parts = layout.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board rows"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let ply_part = parts.next().unwrap_or("0");

    if parts.next().is_some() {
        return Err(invalid("layout has extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let ply_count = ply_part
        .parse::<u16>()
        .map_err(|_| invalid(format!("invalid ply count: {ply_part}")))?;

    GameState::from_board(board, side_to_move, ply_count)
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != BOARD_ROWS {
        return Err(invalid(format!(
            "board must contain {BOARD_ROWS} rows, found {}",
            rows.len()
        )));
    }

    let mut board: Board = [[None; BOARD_COLS]; BOARD_ROWS];
    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = empty_count as usize;
                if !(1..=BOARD_COLS).contains(&step) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                col += step;
                continue;
            }

            let piece = Piece::from_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?;
            if col >= BOARD_COLS {
                return Err(invalid(format!("row {row} has too many columns")));
            }
            if piece.kind == PieceKind::Pawn && row == piece.color.promotion_row() {
                return Err(invalid(format!("unpromoted pawn on row {row}")));
            }

            board[row][col] = Some(piece);
            col += 1;
        }

        if col != BOARD_COLS {
            return Err(invalid(format!(
                "row {row} does not sum to {BOARD_COLS} columns"
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("invalid side to move: {side_part}"))),
    }
}

fn invalid(message: impl Into<String>) -> ChessError {
    ChessError::InvalidLayout(message.into())
}
