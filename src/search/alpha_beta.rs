//! Iterative deepening search with negamax alpha-beta pruning.
//!
//! The search runs on a private clone of the caller's state and walks the
//! tree with make/undo pairs. Each completed depth replaces the previous
//! answer; an iteration interrupted by cancellation or a budget is thrown
//! away, except at depth 1 under a budget, where the best root move found so
//! far is still better than nothing.

use std::cmp::Reverse;
use std::time::{Duration, Instant};

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::{info, trace};

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::{
    expand_promotions, generate_expanded_legal_moves,
};
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardScorer, MaterialScorer, PieceSquareScorer, MATE_SCORE};
use crate::search::threading::SearchControl;

const INFINITY: i32 = MATE_SCORE + 1;
const MAX_MATE_PLY: i32 = 256;
const DEADLINE_CHECK_INTERVAL: u64 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    /// Stop after roughly this many nodes.
    pub node_budget: Option<u64>,
    /// Stop once this much wall time has passed.
    pub time_budget: Option<Duration>,
    /// Seeds the root shuffle, which decides ties between equal moves.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            node_budget: None,
            time_budget: None,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub reached_depth: u8,
    pub nodes: u64,
    pub cancelled: bool,
}

/// Best move for the side to move among `legal_moves`, scored with
/// [`PieceSquareScorer`]. `None` when there is nothing to choose from or the
/// search was stopped before it had an answer.
pub fn find_best_move(
    game_state: &GameState,
    legal_moves: &[Move],
    config: &SearchConfig,
    control: &SearchControl,
) -> Option<Move> {
    search_with_scorer(game_state, legal_moves, &PieceSquareScorer, config, control).best_move
}

pub fn search_with_scorer<S: BoardScorer + ?Sized>(
    game_state: &GameState,
    legal_moves: &[Move],
    scorer: &S,
    config: &SearchConfig,
    control: &SearchControl,
) -> SearchResult {
    let mut result = SearchResult::default();

    let mut root_moves = expand_promotions(legal_moves.to_vec());
    if root_moves.is_empty() || config.max_depth == 0 {
        result.best_score = scorer.score(game_state);
        return result;
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    root_moves.shuffle(&mut rng);
    order_moves(&mut root_moves);

    let mut scratch = game_state.clone();
    let mut searcher = Searcher {
        scorer,
        control,
        node_budget: config.node_budget,
        deadline: config.time_budget.map(|budget| Instant::now() + budget),
        nodes: 0,
        stop: None,
    };

    for depth in 1..=config.max_depth {
        let (best_move, best_score) = searcher.search_root(&mut scratch, &root_moves, depth);

        match searcher.stop {
            Some(StopReason::Cancelled) => {
                result.cancelled = true;
                break;
            }
            Some(StopReason::Budget) => {
                if result.best_move.is_none() {
                    result.best_move = best_move;
                    result.best_score = best_score;
                }
                break;
            }
            None => {}
        }

        result.best_move = best_move;
        result.best_score = best_score;
        result.reached_depth = depth;
        trace!(
            depth,
            score = best_score,
            nodes = searcher.nodes,
            best = ?best_move.map(|mv| mv.to_long_algebraic()),
            "iteration complete"
        );

        // Search the previous best first on the next pass.
        if let Some(best) = best_move {
            if let Some(pos) = root_moves.iter().position(|mv| *mv == best) {
                root_moves[..=pos].rotate_right(1);
            }
        }

        if best_score.abs() >= MATE_SCORE - MAX_MATE_PLY {
            break;
        }
    }

    if result.cancelled {
        result.best_move = None;
    }
    result.nodes = searcher.nodes;
    control.add_nodes(searcher.nodes);

    info!(
        depth = result.reached_depth,
        score = result.best_score,
        nodes = result.nodes,
        cancelled = result.cancelled,
        best = ?result.best_move.map(|mv| mv.to_long_algebraic()),
        "search complete"
    );

    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopReason {
    Cancelled,
    Budget,
}

struct Searcher<'a, S: BoardScorer + ?Sized> {
    scorer: &'a S,
    control: &'a SearchControl,
    node_budget: Option<u64>,
    deadline: Option<Instant>,
    nodes: u64,
    stop: Option<StopReason>,
}

impl<S: BoardScorer + ?Sized> Searcher<'_, S> {
    fn search_root(
        &mut self,
        game_state: &mut GameState,
        moves: &[Move],
        depth: u8,
    ) -> (Option<Move>, i32) {
        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut best_move = None;
        let mut best_score = -INFINITY;

        for mv in moves {
            game_state.push_move(*mv);
            let score = -self.negamax(game_state, depth - 1, -beta, -alpha, 1);
            game_state.pop_move();

            if self.stop.is_some() {
                break;
            }

            if score > best_score {
                best_score = score;
                best_move = Some(*mv);
            }
            if score > alpha {
                alpha = score;
            }
        }

        (best_move, best_score)
    }

    fn negamax(
        &mut self,
        game_state: &mut GameState,
        depth: u8,
        mut alpha: i32,
        beta: i32,
        ply: i32,
    ) -> i32 {
        self.nodes += 1;
        if self.should_stop() {
            return 0;
        }

        // Mate and stalemate are decided before any draw rule, and dominate
        // material even at the horizon.
        let mut moves = generate_expanded_legal_moves(game_state);
        if moves.is_empty() {
            return terminal_score(game_state, ply);
        }
        if game_state.draw_by_rule().is_some() {
            return 0;
        }
        if depth == 0 {
            return self.scorer.score(game_state);
        }

        order_moves(&mut moves);

        let mut best = -INFINITY;
        for mv in moves {
            game_state.push_move(mv);
            let score = -self.negamax(game_state, depth - 1, -beta, -alpha, ply + 1);
            game_state.pop_move();

            if self.stop.is_some() {
                return 0;
            }

            if score > best {
                best = score;
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }

        best
    }

    fn should_stop(&mut self) -> bool {
        if self.stop.is_some() {
            return true;
        }
        if self.control.should_stop() {
            self.stop = Some(StopReason::Cancelled);
        } else if self.node_budget.is_some_and(|budget| self.nodes > budget) {
            self.stop = Some(StopReason::Budget);
        } else if self.nodes % DEADLINE_CHECK_INTERVAL == 0
            && self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
        {
            self.stop = Some(StopReason::Budget);
        }
        self.stop.is_some()
    }
}

fn terminal_score(game_state: &GameState, ply: i32) -> i32 {
    if game_state.in_check() {
        -MATE_SCORE + ply
    } else {
        0
    }
}

/// Captures by most valuable victim / least valuable attacker, then
/// promotions. The sort is stable so earlier moves win ties.
fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|mv| Reverse(move_order_score(mv)));
}

fn move_order_score(mv: &Move) -> i32 {
    let mut score = 0;
    if let Some(victim) = mv.captured {
        score += 10 * MaterialScorer::piece_value(victim.kind)
            - MaterialScorer::piece_value(mv.moved.kind)
            + 1;
    }
    if mv.is_pawn_promotion {
        score += MaterialScorer::piece_value(mv.promotion_piece());
    }
    score
}

#[cfg(test)]
mod tests {
    use super::{find_best_move, search_with_scorer, SearchConfig, MAX_MATE_PLY};
    use crate::game_state::chess_types::PieceKind;
    use crate::game_state::game_state::GameState;
    use crate::search::board_scoring::{MaterialScorer, MATE_SCORE};
    use crate::search::threading::SearchControl;

    fn depth(max_depth: u8) -> SearchConfig {
        SearchConfig {
            max_depth,
            ..SearchConfig::default()
        }
    }

    #[test]
    fn no_legal_moves_gives_none() {
        let game =
            GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let moves = game.legal_moves();
        assert!(moves.is_empty());
        assert_eq!(
            find_best_move(&game, &moves, &depth(3), &SearchControl::new()),
            None
        );
    }

    #[test]
    fn search_depth_zero_returns_eval_only() {
        let game = GameState::new_game();
        let result = search_with_scorer(
            &game,
            &game.legal_moves(),
            &MaterialScorer,
            &depth(0),
            &SearchControl::new(),
        );
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, 0);
        assert_eq!(result.reached_depth, 0);
    }

    #[test]
    fn search_prefers_winning_capture_in_simple_position() {
        let game =
            GameState::from_fen("4k3/8/8/8/8/8/4q3/4KQ2 w - - 0 1").expect("FEN should parse");
        let best = find_best_move(&game, &game.legal_moves(), &depth(1), &SearchControl::new())
            .expect("best move should exist");
        assert_eq!(best.to_long_algebraic(), "f1e2");
    }

    #[test]
    fn search_finds_mate_in_one() {
        let mut game =
            GameState::from_fen("7k/8/6K1/8/8/8/8/R7 w - - 0 1").expect("FEN should parse");
        let result = search_with_scorer(
            &game,
            &game.legal_moves(),
            &MaterialScorer,
            &depth(2),
            &SearchControl::new(),
        );
        let best = result.best_move.expect("best move should exist");

        game.make_move(best);
        assert!(game.is_checkmate(), "{best} should deliver checkmate");
        assert!(
            result.best_score >= MATE_SCORE - MAX_MATE_PLY,
            "mate score should dominate material, got {}",
            result.best_score
        );
    }

    #[test]
    fn mate_on_the_hundredth_halfmove_beats_the_fifty_move_draw() {
        let game =
            GameState::from_fen("7k/8/6K1/8/8/8/8/R7 w - - 99 80").expect("FEN should parse");
        let result = search_with_scorer(
            &game,
            &game.legal_moves(),
            &MaterialScorer,
            &depth(2),
            &SearchControl::new(),
        );
        let best = result.best_move.expect("best move should exist");
        assert_eq!(best.to_long_algebraic(), "a1a8");
        assert!(result.best_score >= MATE_SCORE - MAX_MATE_PLY);
    }

    #[test]
    fn same_seed_and_depth_give_the_same_move() {
        let game = GameState::new_game();
        let moves = game.legal_moves();
        let config = SearchConfig {
            max_depth: 2,
            seed: 11,
            ..SearchConfig::default()
        };

        let first = find_best_move(&game, &moves, &config, &SearchControl::new());
        let second = find_best_move(&game, &moves, &config, &SearchControl::new());
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn caller_state_is_left_untouched() {
        let game = GameState::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("FEN should parse");
        let fen_before = game.get_fen();
        let key_before = game.zobrist_key();

        find_best_move(&game, &game.legal_moves(), &depth(2), &SearchControl::new());

        assert_eq!(game.get_fen(), fen_before);
        assert_eq!(game.zobrist_key(), key_before);
        assert_eq!(game.move_log().len(), 0);
    }

    #[test]
    fn stopped_search_yields_nothing() {
        let game = GameState::new_game();
        let control = SearchControl::new();
        control.request_stop();

        let result = search_with_scorer(
            &game,
            &game.legal_moves(),
            &MaterialScorer,
            &depth(3),
            &control,
        );
        assert!(result.cancelled);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn node_budget_still_returns_a_move() {
        let game = GameState::new_game();
        let config = SearchConfig {
            max_depth: 6,
            node_budget: Some(50),
            ..SearchConfig::default()
        };
        let moves = game.legal_moves();
        let best = find_best_move(&game, &moves, &config, &SearchControl::new())
            .expect("a budgeted search should still answer");
        assert!(moves.contains(&best));
    }

    #[test]
    fn promotion_is_searched_with_a_concrete_piece() {
        let game = GameState::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").expect("FEN should parse");
        let best = find_best_move(&game, &game.legal_moves(), &depth(2), &SearchControl::new())
            .expect("best move should exist");
        assert_eq!(best.to_long_algebraic(), "a7a8q");
        assert_eq!(best.promotion_choice(), Some(PieceKind::Queen));
    }
}
