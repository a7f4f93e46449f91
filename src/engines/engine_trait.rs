//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different move
//! choosers can be swapped behind a single trait, in the match harness or in
//! a host application.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

/// Per-call overrides. Unset fields fall back to the engine's own config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    pub depth: Option<u8>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    /// Score for the side to move, when the engine searched.
    pub score: Option<i32>,
    pub nodes: u64,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Picks a move for the side to move. `best_move` is `None` when the game
    /// is over. Engines work on their own copy of the position.
    fn choose_move(&mut self, game_state: &GameState, params: &GoParams)
        -> ChessResult<EngineOutput>;
}
