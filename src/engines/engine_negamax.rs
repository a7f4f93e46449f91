//! Principal-variation negamax engine over the material scorer.

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::board_scoring::MaterialScorer;
use crate::search::negamax::{search_best_move, SearchConfig};

pub struct NegamaxEngine {
    config: SearchConfig,
    move_generator: LegalMoveGenerator,
    scorer: MaterialScorer,
}

impl NegamaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            move_generator: LegalMoveGenerator,
            scorer: MaterialScorer,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "Minichess Negamax PVS"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let config = SearchConfig {
            depth: params.depth.unwrap_or(self.config.depth).max(1),
            seed: params.seed.or(self.config.seed),
            ..self.config
        };

        let mut position = game_state.clone();
        let mut out = EngineOutput::default();
        if position.ply_limit_reached() {
            out.info_lines
                .push("info string negamax_engine ply limit reached".to_owned());
            return Ok(out);
        }

        let result = search_best_move(&mut position, &self.move_generator, &self.scorer, &config);
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
    use crate::game_state::chess_types::Square;

    #[test]
    fn depth_override_is_reported_and_mate_is_found() {
        let game = GameState::from_layout("k4/pp3/5/4Q/5/4K w 0").unwrap();
        let mut engine = NegamaxEngine::default();
        let out = engine
            .choose_move(
                &game,
                &GoParams {
                    depth: Some(2),
                    seed: Some(1),
                },
            )
            .unwrap();

        assert_eq!(out.best_move.map(|mv| mv.to()), Some(Square::new(0, 4).unwrap()));
        assert!(out.info_lines[0].starts_with("info depth 2 "));
        assert!(out.nodes > 0);
    }

    #[test]
    fn zero_depth_override_still_moves() {
        let game = GameState::new_game();
        let out = NegamaxEngine::default()
            .choose_move(
                &game,
                &GoParams {
                    depth: Some(0),
                    seed: Some(4),
                },
            )
            .unwrap();

        assert!(out.best_move.is_some());
        assert!(out.info_lines[0].starts_with("info depth 1 "));
    }
}
