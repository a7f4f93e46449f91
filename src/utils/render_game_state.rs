//! Terminal-oriented Unicode board renderer for debugging and diagnostics.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board with file letters and rank numbers, rank 6 at the top.
pub fn render_game_state(game_state: &GameState) -> String {
    let files: String = (0..BOARD_COLS)
        .map(|col| char::from(b'a' + col as u8))
        .flat_map(|file| [file, ' '])
        .collect();
    let files = format!("  {}", files.trim_end());

    let mut out = String::new();
    out.push_str(&files);
    out.push('\n');

    for (row, cells) in game_state.board.iter().enumerate() {
        let rank = char::from(b'0' + (BOARD_ROWS - row) as u8);
        out.push(rank);
        out.push(' ');

        for (col, cell) in cells.iter().enumerate() {
            out.push(cell.map_or('·', piece_to_unicode));
            if col + 1 < BOARD_COLS {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str(&files);
    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::game_state::GameState;

    #[test]
    fn renders_the_starting_position() {
        let rendered = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "  a b c d e");
        assert_eq!(lines[1], "6 ♜ ♝ ♛ ♚ ♞ 6");
        assert_eq!(lines[3], "4 · · · · · 4");
        assert_eq!(lines[6], "1 ♖ ♗ ♕ ♔ ♘ 1");
    }
}
