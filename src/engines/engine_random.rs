//! Random-move engine.
//!
//! Selects uniformly from legal moves. Used as a baseline opponent and to
//! randomize match openings.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Minichess Random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let mut position = game_state.clone();
        let legal_moves = self.move_generator.generate_legal_moves(&mut position);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() || position.ply_limit_reached() {
            return Ok(out);
        }

        out.best_move = match params.seed {
            Some(seed) => legal_moves.choose(&mut StdRng::seed_from_u64(seed)).copied(),
            None => legal_moves.choose(&mut rand::rng()).copied(),
        };
        Ok(out)
    }
}
