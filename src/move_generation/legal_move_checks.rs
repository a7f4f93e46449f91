//! Attack detection.
//!
//! Rather than generating every opponent move, attacks are found by looking
//! outward from the target square: a knight-shaped hop, a king step, a pawn
//! diagonal or an unobstructed slider ray ending on the matching enemy piece.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn is_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(game_state, game_state.king_square(color), color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let attacker_occ = game_state.occupancy(attacker_color);
    let occupancy = game_state.occupancy_all();

    let holds = |mask: SquareMask, kinds: &[PieceKind]| {
        squares_in(mask & attacker_occ).any(|from| {
            game_state
                .piece_at(from)
                .is_some_and(|piece| kinds.contains(&piece.kind))
        })
    };

    // A pawn of `attacker_color` hits `square` from where a defending pawn on
    // `square` would itself strike.
    holds(
        pawn_attacks(attacker_color.opposite(), square.index()),
        &[PieceKind::Pawn],
    ) || holds(knight_attacks(square.index()), &[PieceKind::Knight])
        || holds(king_attacks(square.index()), &[PieceKind::King])
        || holds(
            bishop_attacks(square, occupancy),
            &[PieceKind::Bishop, PieceKind::Queen],
        )
        || holds(
            rook_attacks(square, occupancy),
            &[PieceKind::Rook, PieceKind::Queen],
        )
}

/// Every `attacker_color` piece that attacks `square`, with its kind.
pub fn attackers_to_square(
    game_state: &GameState,
    square: Square,
    attacker_color: Color,
) -> Vec<(Square, PieceKind)> {
    let attacker_occ = game_state.occupancy(attacker_color);
    let occupancy = game_state.occupancy_all();
    let candidates = (pawn_attacks(attacker_color.opposite(), square.index())
        | knight_attacks(square.index())
        | king_attacks(square.index())
        | bishop_attacks(square, occupancy)
        | rook_attacks(square, occupancy))
        & attacker_occ;

    squares_in(candidates)
        .filter_map(|from| game_state.piece_at(from).map(|piece| (from, piece)))
        .filter(|(from, piece)| attack_set(*from, *piece, occupancy) & square.mask() != 0)
        .map(|(from, piece)| (from, piece.kind))
        .collect()
}

fn attack_set(from: Square, piece: Piece, occupancy: SquareMask) -> SquareMask {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, from.index()),
        PieceKind::Knight => knight_attacks(from.index()),
        PieceKind::King => king_attacks(from.index()),
        PieceKind::Bishop => bishop_attacks(from, occupancy),
        PieceKind::Rook => rook_attacks(from, occupancy),
        PieceKind::Queen => bishop_attacks(from, occupancy) | rook_attacks(from, occupancy),
    }
}
