//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing, and low-strength gameplay.

use rand::{rngs::StdRng, SeedableRng};

use crate::engines::engine_trait::{Engine, EngineOutput, EngineResult};
use crate::game_state::game_state::GameState;
use crate::search::random_move::find_random_move;
use crate::search::threading::SearchControl;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
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
        "Random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        _control: &SearchControl,
    ) -> EngineResult<EngineOutput> {
        let legal_moves = game_state.legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));
        out.best_move = find_random_move(&legal_moves, &mut self.rng);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::game_state::GameState;
    use crate::search::threading::SearchControl;

    #[test]
    fn random_engine_returns_legal_move() {
        let game = GameState::new_game();
        let mut engine = RandomEngine::with_seed(5);
        let out = engine
            .choose_move(&game, &SearchControl::new())
            .expect("random engine should choose a move");
        let mv = out.best_move.expect("start position has moves");
        assert!(game.legal_moves().contains(&mv));
    }

    #[test]
    fn random_engine_reports_no_move_when_game_is_over() {
        let game =
            GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let mut engine = RandomEngine::with_seed(5);
        let out = engine
            .choose_move(&game, &SearchControl::new())
            .expect("random engine should run");
        assert_eq!(out.best_move, None);
    }
}
