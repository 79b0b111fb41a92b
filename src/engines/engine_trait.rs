//! Engine abstraction layer used by the search worker and the match harness.
//!
//! Different move-selection strategies sit behind a single trait so a game
//! loop can pick one at runtime and run it on a background thread.

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::threading::SearchControl;

pub type EngineResult<T> = ChessResult<T>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move for the side to move. `best_move` is `None` only when
    /// there is no legal move or the search was stopped through `control`.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        control: &SearchControl,
    ) -> EngineResult<EngineOutput>;
}
