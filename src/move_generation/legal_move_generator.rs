//! Full legal move generation pipeline.
//!
//! Generates pseudo-legal moves for the side to move, plays each one through a
//! `ScopedMove`, drops those that leave the mover's king attacked, and records
//! check, checkmate and stalemate on the position.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::game_state::game_status::TerminalFlags;
use crate::game_state::scoped_move::ScopedMove;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_shared::generate_pseudo_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::ChessMove;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> Vec<ChessMove> {
        generate_legal_moves(game_state)
    }
}

pub fn generate_legal_moves(game_state: &mut GameState) -> Vec<ChessMove> {
    let mover = game_state.side_to_move;
    let pseudo = generate_pseudo_moves(game_state, mover);

    let mut legal = Vec::<ChessMove>::with_capacity(pseudo.len());
    for mv in pseudo {
        let applied = ScopedMove::apply(game_state, mv);
        // Illegal if own king is in check after move.
        if !is_in_check(&applied, mover) {
            legal.push(mv);
        }
    }

    game_state.flags = terminal_flags(game_state, mover, legal.is_empty());
    legal
}

/// Legal moves of the piece on `square`. Empty when the square is empty or
/// holds a piece of the side not to move.
pub fn legal_moves_from(game_state: &mut GameState, square: Square) -> Vec<ChessMove> {
    let mut legal = generate_legal_moves(game_state);
    legal.retain(|mv| mv.from() == square);
    legal
}

fn terminal_flags(game_state: &GameState, mover: Color, no_moves: bool) -> TerminalFlags {
    let in_check = is_in_check(game_state, mover);
    TerminalFlags {
        in_check,
        in_checkmate: no_moves && in_check,
        in_stalemate: no_moves && !in_check,
        winner: (no_moves && in_check).then(|| mover.opposite()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_shared::generate_pseudo_moves_from;

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        // White rook d2 is pinned against the d1 king by the black queen d6.
        let mut game = GameState::from_layout("k2q1/5/5/5/3R1/3K1 w 0").unwrap();
        let rook = Square::new(4, 3).unwrap();
        let moves = legal_moves_from(&mut game, rook);
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|mv| mv.to().col() == 3));
    }

    #[test]
    fn legal_moves_are_a_subset_of_pseudo_moves_and_leave_the_position_alone() {
        let mut game = GameState::from_layout("1r1k1/2P2/b4/3Q1/p4/2K1n b 0").unwrap();
        let before = game.clone();
        let legal = generate_legal_moves(&mut game);

        for mv in &legal {
            let mut pseudo = Vec::new();
            generate_pseudo_moves_from(&game, mv.from(), &mut pseudo);
            assert!(pseudo.contains(mv));
        }
        assert_eq!(game.board, before.board);
        assert_eq!(game.move_log, before.move_log);
        assert_eq!(game.side_to_move, before.side_to_move);
    }

    #[test]
    fn repeated_generation_is_stable() {
        let mut game = GameState::from_layout("1r1k1/p1p2/2N2/1P3/3P1/B2K1 b 6").unwrap();
        let board = game.board;
        let kings = game.king_squares;
        let log = game.move_log.clone();

        let ids = |moves: Vec<ChessMove>| {
            let mut ids: Vec<u16> = moves.iter().map(ChessMove::id).collect();
            ids.sort_unstable();
            ids
        };
        let first = ids(generate_legal_moves(&mut game));
        assert!(!first.is_empty());
        for _ in 0..3 {
            assert_eq!(ids(generate_legal_moves(&mut game)), first);
        }

        assert_eq!(game.board, board);
        assert_eq!(game.king_squares, kings);
        assert_eq!(game.move_log, log);
    }

    #[test]
    fn empty_legal_set_sets_exactly_one_terminal_flag() {
        let mut stalemate = GameState::from_layout("k4/5/1Q3/5/5/4K b 0").unwrap();
        assert!(generate_legal_moves(&mut stalemate).is_empty());
        assert!(stalemate.flags.in_stalemate);
        assert!(!stalemate.flags.in_checkmate);
        assert_eq!(stalemate.flags.winner, None);

        let mut mate = GameState::from_layout("k3Q/pp3/5/5/5/4K b 0").unwrap();
        assert!(generate_legal_moves(&mut mate).is_empty());
        assert!(mate.flags.in_checkmate);
        assert!(!mate.flags.in_stalemate);
        assert_eq!(mate.flags.winner, Some(Color::White));
    }

    #[test]
    fn opponent_square_yields_no_moves() {
        let mut game = GameState::new_game();
        assert!(legal_moves_from(&mut game, Square::new(1, 0).unwrap()).is_empty());
        assert_eq!(legal_moves_from(&mut game, Square::new(5, 4).unwrap()).len(), 1);
    }
}
