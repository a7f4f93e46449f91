//! Scoped make/unmake.
//!
//! `ScopedMove` plays a move on a borrowed `GameState` and takes it back when
//! dropped, so every exit path of a recursive search (including pruning
//! cutoffs) leaves the position as it found it.

use std::ops::{Deref, DerefMut};

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

/// Dropping the guard unwinds the move log to its length before `apply`,
/// including any moves made or taken back through the guard itself.
pub struct ScopedMove<'a> {
    game_state: &'a mut GameState,
    restore_len: usize,
}

impl<'a> ScopedMove<'a> {
    pub fn apply(game_state: &'a mut GameState, mv: ChessMove) -> Self {
        let restore_len = game_state.move_log.len();
        game_state.make_move(mv);
        Self {
            game_state,
            restore_len,
        }
    }
}

impl Deref for ScopedMove<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.game_state
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        self.game_state
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        while self.game_state.move_log.len() > self.restore_len {
            if self.game_state.unmake_move().is_err() {
                break;
            }
        }
    }
}
