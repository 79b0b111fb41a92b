//! Alpha-beta engine.
//!
//! Runs the iterative deepening search and falls back to a random legal move
//! when the search comes back empty without having been cancelled.

use rand::{rngs::StdRng, SeedableRng};
use tracing::warn;

use crate::engines::engine_trait::{Engine, EngineOutput, EngineResult};
use crate::game_state::game_state::GameState;
use crate::search::alpha_beta::{search_with_scorer, SearchConfig};
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer};
use crate::search::random_move::find_random_move;
use crate::search::threading::SearchControl;

pub struct AlphaBetaEngine<S: BoardScorer = PieceSquareScorer> {
    config: SearchConfig,
    scorer: S,
}

impl AlphaBetaEngine<PieceSquareScorer> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(config, PieceSquareScorer)
    }
}

impl Default for AlphaBetaEngine<PieceSquareScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<S: BoardScorer> AlphaBetaEngine<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S) -> Self {
        Self { config, scorer }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl<S: BoardScorer> Engine for AlphaBetaEngine<S> {
    fn name(&self) -> &str {
        "AlphaBeta"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        control: &SearchControl,
    ) -> EngineResult<EngineOutput> {
        let legal_moves = game_state.legal_moves();
        let mut out = EngineOutput::default();
        if legal_moves.is_empty() {
            return Ok(out);
        }

        let result = search_with_scorer(
            game_state,
            &legal_moves,
            &self.scorer,
            &self.config,
            control,
        );
        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {}",
            result.reached_depth, result.best_score, result.nodes
        ));

        if result.cancelled {
            return Ok(out);
        }

        out.best_move = match result.best_move {
            Some(mv) => Some(mv),
            None => {
                warn!("search produced no move, falling back to a random one");
                let mut rng = StdRng::seed_from_u64(self.config.seed);
                find_random_move(&legal_moves, &mut rng)
            }
        };
        Ok(out)
    }
}
