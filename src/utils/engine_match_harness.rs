//! Minimal head-to-head engine match harness for local testing.
//!
//! Two alpha-beta engines, each with its own search settings, play one game
//! through the background search worker. An optional seeded random opening
//! prefix keeps repeated games from being identical.

use std::time::{Duration, Instant};

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};

use crate::engines::engine_alpha_beta::AlphaBetaEngine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::game_state::game_status::{DrawReason, GameStatus};
use crate::search::alpha_beta::SearchConfig;
use crate::search::random_move::find_random_move;
use crate::search::threading::{SearchOutcome, SearchWorker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Checkmate { winner: Color },
    Draw(DrawReason),
    MaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_plies: u8,
    pub seed: u64,
    pub light_config: SearchConfig,
    pub dark_config: SearchConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_plies: 4,
            seed: 0,
            light_config: SearchConfig::default(),
            dark_config: SearchConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves_lan: Vec<String>,
    pub played_moves_lan: Vec<String>,
    pub light_think_time: Duration,
    pub dark_think_time: Duration,
}

/// Play one game from the standard starting position.
pub fn play_match(config: &MatchConfig) -> ChessResult<MatchResult> {
    play_match_from_state(GameState::new_game(), config)
}

/// Play one game from a caller-provided position.
pub fn play_match_from_state(mut state: GameState, config: &MatchConfig) -> ChessResult<MatchResult> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut worker = SearchWorker::new();

    let mut opening_moves_lan = Vec::new();
    for _ in 0..config.opening_plies {
        if state.status().is_terminal() {
            break;
        }
        let Some(mv) = find_random_move(&state.valid_moves(), &mut rng) else {
            break;
        };
        opening_moves_lan.push(mv.to_long_algebraic());
        state.make_move(mv);
    }

    let mut played_moves_lan = Vec::new();
    let mut light_think_time = Duration::ZERO;
    let mut dark_think_time = Duration::ZERO;

    for _ in 0..config.max_plies {
        if state.status().is_terminal() {
            break;
        }

        let mover = state.side_to_move();
        let search_config = match mover {
            Color::Light => config.light_config,
            Color::Dark => config.dark_config,
        };

        let started = Instant::now();
        let handle = worker.spawn(AlphaBetaEngine::new(search_config), state.clone());
        let output = match handle.wait() {
            SearchOutcome::Finished(output) => output,
            SearchOutcome::Failed(err) => return Err(err),
            SearchOutcome::Cancelled => {
                return Err(ChessError::Engine("search was cancelled mid-match".to_owned()))
            }
        };
        let elapsed = started.elapsed();
        match mover {
            Color::Light => light_think_time += elapsed,
            Color::Dark => dark_think_time += elapsed,
        }

        let chosen = match output.best_move {
            Some(mv) => mv,
            None => find_random_move(&state.legal_moves(), &mut rng)
                .ok_or_else(|| ChessError::Engine("no move available in a live game".to_owned()))?,
        };
        let legal = state
            .find_legal_move(chosen.start, chosen.end, chosen.promotion_choice())
            .ok_or_else(|| ChessError::InvalidMove(chosen.to_long_algebraic()))?;

        debug!(ply = state.move_log().len(), mv = %legal, ?mover, "match move");
        played_moves_lan.push(legal.to_long_algebraic());
        state.make_move(legal);
    }

    let outcome = match state.status() {
        GameStatus::Checkmate { winner } => MatchOutcome::Checkmate { winner },
        GameStatus::Stalemate(reason) => MatchOutcome::Draw(reason),
        GameStatus::InProgress => MatchOutcome::MaxPlies,
    };
    info!(
        ?outcome,
        plies = state.move_log().len(),
        fen = %state.get_fen(),
        "match finished"
    );

    Ok(MatchResult {
        outcome,
        final_state: state,
        opening_moves_lan,
        played_moves_lan,
        light_think_time,
        dark_think_time,
    })
}
