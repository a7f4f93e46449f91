//! Minimax alpha-beta engine over the positional scorer.

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::board_scoring::PositionalScorer;
use crate::search::minimax::{minimax_best_move, MinimaxConfig};

pub struct MinimaxEngine {
    config: MinimaxConfig,
    move_generator: LegalMoveGenerator,
    scorer: PositionalScorer,
}

impl MinimaxEngine {
    pub fn new(config: MinimaxConfig) -> Self {
        Self {
            config,
            move_generator: LegalMoveGenerator,
            scorer: PositionalScorer,
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(MinimaxConfig::default())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Minichess Minimax"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let config = MinimaxConfig {
            depth: params.depth.unwrap_or(self.config.depth).max(1),
            seed: params.seed.or(self.config.seed),
            ..self.config
        };

        let mut position = game_state.clone();
        let mut out = EngineOutput::default();
        if position.ply_limit_reached() {
            out.info_lines
                .push("info string minimax_engine ply limit reached".to_owned());
            return Ok(out);
        }

        let result = minimax_best_move(&mut position, &self.move_generator, &self.scorer, &config);
        out.best_move = result.best_move;
        out.score = Some(result.best_score);
        out.nodes = result.nodes;
        out.info_lines.push(format!(
            "info depth {} score {} nodes {}",
            config.depth, result.best_score, result.nodes
        ));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ply_limit_position_yields_no_move() {
        let game = GameState::from_layout("k4/5/5/5/4P/4K w 30").unwrap();
        let out = MinimaxEngine::default()
            .choose_move(&game, &GoParams::default())
            .unwrap();
        assert_eq!(out.best_move, None);
        assert_eq!(out.score, None);
    }

    #[test]
    fn shallow_search_takes_a_free_queen() {
        let game = GameState::from_layout("k4/2q2/5/2R2/5/4K w 0").unwrap();
        let out = MinimaxEngine::default()
            .choose_move(&game, &GoParams { depth: Some(2), seed: Some(5) })
            .unwrap();
        assert_eq!(out.best_move.map(|mv| mv.to().to_string()), Some("c5".to_owned()));
    }
}
