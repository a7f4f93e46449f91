//! Presentation-facing operations.
//!
//! Thin, checked wrappers over the position and the search: every operation
//! either succeeds or returns a `ChessError` with the position untouched, and
//! the terminal flags are refreshed after each successful mutation so
//! `status` always describes the current position.

use tracing::{debug, warn};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::game_status::GameStatus;
use crate::move_generation::legal_move_generator::{self, LegalMoveGenerator};
use crate::moves::chess_move::ChessMove;
use crate::search::board_scoring::MaterialScorer;
use crate::search::negamax::{search_best_move, SearchConfig};

/// Fresh game from the standard layout, White to move.
pub fn new_game() -> GameState {
    let mut game_state = GameState::new_game();
    legal_move_generator::generate_legal_moves(&mut game_state);
    game_state
}

/// Legal moves of the piece on `square`. Empty for an empty square, a piece
/// of the side not to move, or a game that has ended.
pub fn legal_moves_from(game_state: &mut GameState, square: Square) -> Vec<ChessMove> {
    if game_state.ply_limit_reached() {
        return Vec::new();
    }
    legal_move_generator::legal_moves_from(game_state, square)
}

pub fn status(game_state: &GameState) -> GameStatus {
    game_state.status()
}

/// Plays `mv` after checking it against the legal set.
pub fn apply_move(game_state: &mut GameState, mv: ChessMove) -> ChessResult<()> {
    apply_move_between(game_state, mv.from(), mv.to())
}

/// Plays the legal move from `from` to `to`.
pub fn apply_move_between(game_state: &mut GameState, from: Square, to: Square) -> ChessResult<()> {
    if game_state.ply_limit_reached() {
        return Err(ChessError::GameOver);
    }

    let piece = game_state
        .piece_at(from)
        .ok_or(ChessError::NoPieceAtSquare { square: from })?;
    if piece.color != game_state.side_to_move {
        return Err(ChessError::WrongSideToMove {
            side_to_move: game_state.side_to_move,
            requested: piece.color,
        });
    }

    let flags = game_state.flags;
    let Some(mv) = legal_move_generator::legal_moves_from(game_state, from)
        .into_iter()
        .find(|candidate| candidate.to() == to)
    else {
        game_state.flags = flags;
        return Err(ChessError::IllegalMove { from, to });
    };

    game_state.make_move(mv);
    legal_move_generator::generate_legal_moves(game_state);
    debug!(mv = %mv, ply = game_state.ply_count, "applied move");
    Ok(())
}

/// Takes back the last move and returns it.
pub fn undo(game_state: &mut GameState) -> ChessResult<ChessMove> {
    let mv = game_state.unmake_move()?;
    legal_move_generator::generate_legal_moves(game_state);
    debug!(mv = %mv, ply = game_state.ply_count, "undid move");
    Ok(mv)
}

/// Runs the negamax search for `side`. `Ok(None)` means `side` has no legal
/// move; the terminal flags then say whether it is checkmate or stalemate.
pub fn best_move(
    game_state: &mut GameState,
    side: Color,
    config: &SearchConfig,
) -> ChessResult<Option<ChessMove>> {
    if side != game_state.side_to_move {
        warn!(?side, side_to_move = ?game_state.side_to_move, "search requested for the wrong side");
        return Err(ChessError::WrongSideToMove {
            side_to_move: game_state.side_to_move,
            requested: side,
        });
    }
    if game_state.ply_limit_reached() {
        return Err(ChessError::GameOver);
    }

    // Refresh the flags so the search restores current ones.
    legal_move_generator::generate_legal_moves(game_state);
    let result = search_best_move(game_state, &LegalMoveGenerator, &MaterialScorer, config);
    Ok(result.best_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};
    use crate::game_state::game_status::GameOutcome;
    use crate::move_generation::legal_move_checks::is_in_check;
    use crate::move_generation::legal_move_generator::generate_legal_moves;
    use crate::move_generation::legal_move_shared::{
        generate_pseudo_moves, generate_pseudo_moves_from,
    };

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    fn seeded(seed: u64) -> SearchConfig {
        SearchConfig {
            seed: Some(seed),
            ..SearchConfig::default()
        }
    }

    /// Plays `plies` moves chosen by seeded searches, stopping early if the
    /// game ends.
    fn play_out(game: &mut GameState, plies: usize, depth: u8) {
        for ply in 0..plies {
            let side = game.side_to_move;
            let config = SearchConfig {
                depth,
                ..seeded(ply as u64)
            };
            match best_move(game, side, &config) {
                Ok(Some(mv)) => apply_move(game, mv).unwrap(),
                _ => break,
            }
        }
    }

    #[test]
    fn new_game_status() {
        let game = new_game();
        let snapshot = status(&game);
        assert_eq!(snapshot.side_to_move, Color::White);
        assert!(!snapshot.in_check && !snapshot.in_checkmate && !snapshot.in_stalemate);
        assert_eq!(snapshot.ply_count, 0);
        assert_eq!(snapshot.outcome, None);
    }

    #[test]
    fn rejected_moves_leave_the_position_unchanged() {
        let mut game = new_game();
        let before = game.clone();

        assert_eq!(
            apply_move_between(&mut game, sq(2, 2), sq(3, 2)),
            Err(ChessError::NoPieceAtSquare { square: sq(2, 2) })
        );
        assert_eq!(
            apply_move_between(&mut game, sq(1, 2), sq(2, 2)),
            Err(ChessError::WrongSideToMove {
                side_to_move: Color::White,
                requested: Color::Black,
            })
        );
        assert_eq!(
            apply_move_between(&mut game, sq(4, 2), sq(2, 2)),
            Err(ChessError::IllegalMove {
                from: sq(4, 2),
                to: sq(2, 2),
            })
        );
        assert_eq!(undo(&mut game), Err(ChessError::NoHistory));
        assert_eq!(game, before);
    }

    #[test]
    fn apply_then_undo_round_trips_every_legal_move() {
        let mut game = new_game();
        play_out(&mut game, 6, 1);

        for mv in generate_legal_moves(&mut game) {
            let before = game.clone();
            apply_move(&mut game, mv).unwrap();
            assert_eq!(undo(&mut game).unwrap(), mv);
            assert_eq!(game, before, "{mv}");
        }
    }

    #[test]
    fn legal_moves_are_pseudo_legal_for_their_square() {
        let mut game = GameState::from_layout("1r1k1/p1p2/2N2/1P3/3P1/B2K1 b 6").unwrap();
        for square in Square::all() {
            let legal = legal_moves_from(&mut game, square);
            let mut pseudo = Vec::new();
            generate_pseudo_moves_from(&game, square, &mut pseudo);
            assert!(legal.iter().all(|mv| pseudo.contains(mv)), "{square}");
        }
    }

    #[test]
    fn check_matches_pseudo_attacks_along_a_game() {
        let mut game = new_game();
        for _ in 0..12 {
            for color in Color::ALL {
                let attacked = generate_pseudo_moves(&game, color.opposite())
                    .iter()
                    .any(|mv| mv.to() == game.king_square(color));
                assert_eq!(is_in_check(&game, color), attacked);
            }
            play_out(&mut game, 1, 1);
        }
    }

    #[test]
    fn terminal_flags_are_exclusive() {
        for layout in [
            "k4/5/1Q3/5/5/4K b 0",
            "k3Q/pp3/5/5/5/4K b 0",
            "rbqkn/ppppp/5/5/PPPPP/RBQKN w 0",
        ] {
            let mut game = GameState::from_layout(layout).unwrap();
            let moves = generate_legal_moves(&mut game);
            let snapshot = status(&game);
            assert!(!(snapshot.in_checkmate && snapshot.in_stalemate));
            assert_eq!(
                moves.is_empty(),
                snapshot.in_checkmate || snapshot.in_stalemate,
                "{layout}"
            );
        }
    }

    #[test]
    fn white_pawn_promotes_to_a_queen() {
        let mut game = GameState::from_layout("k4/2P2/5/5/5/4K w 0").unwrap();
        apply_move_between(&mut game, sq(1, 2), sq(0, 2)).unwrap();
        assert_eq!(
            game.piece_at(sq(0, 2)),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );

        undo(&mut game).unwrap();
        assert_eq!(
            game.piece_at(sq(1, 2)),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
    }

    #[test]
    fn stalemate_is_reported() {
        let mut game = GameState::from_layout("k4/5/1Q3/5/5/4K b 0").unwrap();
        assert_eq!(best_move(&mut game, Color::Black, &seeded(1)), Ok(None));
        let snapshot = status(&game);
        assert!(snapshot.in_stalemate);
        assert!(!snapshot.in_checkmate);
        assert_eq!(snapshot.outcome, Some(GameOutcome::Stalemate));
    }

    #[test]
    fn back_rank_mate_is_reported_with_the_winner() {
        // The queen arrives on e6; the a7/b7 pawns box the king in.
        let mut game = GameState::from_layout("k4/pp3/5/4Q/5/4K w 0").unwrap();
        apply_move_between(&mut game, sq(3, 4), sq(0, 4)).unwrap();

        let snapshot = status(&game);
        assert!(snapshot.in_check);
        assert!(snapshot.in_checkmate);
        assert!(!snapshot.in_stalemate);
        assert_eq!(snapshot.winner, Some(Color::White));
        assert_eq!(best_move(&mut game, Color::Black, &seeded(1)), Ok(None));
    }

    #[test]
    fn thirty_plies_with_level_material_is_a_draw() {
        let mut game = new_game();
        let shuffle = [
            (sq(5, 4), sq(3, 3)),
            (sq(0, 4), sq(2, 3)),
            (sq(3, 3), sq(5, 4)),
            (sq(2, 3), sq(0, 4)),
        ];
        for ply in 0..30 {
            let (from, to) = shuffle[ply % shuffle.len()];
            apply_move_between(&mut game, from, to).unwrap();
        }

        let snapshot = status(&game);
        assert_eq!(snapshot.ply_count, 30);
        assert_eq!(snapshot.outcome, Some(GameOutcome::PlyLimit { winner: None }));
        assert_eq!(snapshot.winner, None);
        assert!(snapshot.is_game_over());

        assert_eq!(
            apply_move_between(&mut game, sq(4, 0), sq(3, 0)),
            Err(ChessError::GameOver)
        );
        assert!(legal_moves_from(&mut game, sq(4, 0)).is_empty());
        let side = game.side_to_move;
        assert_eq!(
            best_move(&mut game, side, &seeded(1)),
            Err(ChessError::GameOver)
        );

        undo(&mut game).unwrap();
        assert_eq!(status(&game).outcome, None);
    }

    #[test]
    fn ply_limit_favors_the_side_ahead_on_material() {
        let mut game = GameState::from_layout("k4/5/5/5/4P/4K w 29").unwrap();
        apply_move_between(&mut game, sq(4, 4), sq(3, 4)).unwrap();
        assert_eq!(
            status(&game).outcome,
            Some(GameOutcome::PlyLimit {
                winner: Some(Color::White)
            })
        );
    }

    #[test]
    fn best_move_is_legal_and_keeps_the_position() {
        let mut game = new_game();
        play_out(&mut game, 4, 2);
        let before = game.clone();

        let side = game.side_to_move;
        let mv = best_move(&mut game, side, &seeded(9))
            .unwrap()
            .expect("position has moves");
        assert_eq!(game, before);
        assert!(generate_legal_moves(&mut game).contains(&mv));

        assert!(matches!(
            best_move(&mut game, side.opposite(), &seeded(9)),
            Err(ChessError::WrongSideToMove { .. })
        ));
    }

    #[test]
    fn depth_zero_still_returns_a_legal_move() {
        let mut game = new_game();
        let before = game.clone();
        let config = SearchConfig {
            depth: 0,
            ..seeded(1)
        };

        let mv = best_move(&mut game, Color::White, &config)
            .unwrap()
            .expect("the start position has moves");
        assert_eq!(game, before);
        assert!(generate_legal_moves(&mut game).contains(&mv));
    }
}
