use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Inverse of `parse_layout`.
pub fn generate_layout(game_state: &GameState) -> String {
    let rows: Vec<String> = game_state.board.iter().map(row_text).collect();
    let side = match game_state.side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    };
    format!("{} {side} {}", rows.join("/"), game_state.ply_count)
}

fn row_text(row: &[Cell; BOARD_COLS]) -> String {
    let mut out = String::with_capacity(BOARD_COLS);
    let mut empty = 0u8;

    for cell in row {
        match cell {
            Some(piece) => {
                if empty > 0 {
                    out.push(char::from(b'0' + empty));
                    empty = 0;
                }
                out.push(piece.to_char());
            }
            None => empty += 1,
        }
    }
    if empty > 0 {
        out.push(char::from(b'0' + empty));
    }

    out
}
