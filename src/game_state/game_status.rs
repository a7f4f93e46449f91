//! Terminal flags and externally visible game status.

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

/// Flags derived by legal-move generation for the side to move.
///
/// `make_move`/`unmake_move` reset them; they are only meaningful right after
/// a call to `generate_legal_moves` on the current position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalFlags {
    pub in_check: bool,
    pub in_checkmate: bool,
    pub in_stalemate: bool,
    pub winner: Option<Color>,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    /// Ply limit reached; `winner` is the side ahead on material, `None` on
    /// equal material.
    PlyLimit { winner: Option<Color> },
}

impl GameOutcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::Checkmate { winner } => Some(winner),
            GameOutcome::Stalemate => None,
            GameOutcome::PlyLimit { winner } => winner,
        }
    }

    pub fn is_draw(self) -> bool {
        self.winner().is_none()
    }

    /// Game record result token.
    pub fn result_token(self) -> &'static str {
        match self.winner() {
            Some(Color::White) => "1-0",
            Some(Color::Black) => "0-1",
            None => "1/2-1/2",
        }
    }
}

/// Snapshot reported to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStatus {
    pub side_to_move: Color,
    pub in_check: bool,
    pub in_checkmate: bool,
    pub in_stalemate: bool,
    pub winner: Option<Color>,
    pub ply_count: u16,
    pub outcome: Option<GameOutcome>,
}

impl GameStatus {
    pub fn from_state(game_state: &GameState) -> Self {
        let outcome = game_state.outcome();
        Self {
            side_to_move: game_state.side_to_move,
            in_check: game_state.flags.in_check,
            in_checkmate: game_state.flags.in_checkmate,
            in_stalemate: game_state.flags.in_stalemate,
            winner: outcome.and_then(GameOutcome::winner),
            ply_count: game_state.ply_count,
            outcome,
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }
}
