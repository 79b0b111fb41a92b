//! Move-path enumeration for verifying the move generator against known
//! node counts.

use std::thread;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::{
    generate_expanded_legal_moves, has_legal_move,
};
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count leaf positions `depth` plies below `game_state`. Promotions count
/// once per piece choice.
pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    let mut scratch = game_state.clone();
    let mut total = PerftCounts::default();
    perft_recurse(&mut scratch, depth, &mut total);
    total
}

/// Same counts as [`perft`], one thread per root move.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth <= 1 {
        return Ok(perft(game_state, depth));
    }

    let handles: Vec<_> = generate_expanded_legal_moves(game_state)
        .into_iter()
        .map(|mv| {
            let mut scratch = game_state.clone();
            thread::spawn(move || {
                let mut local = PerftCounts::default();
                scratch.push_move(mv);
                perft_recurse(&mut scratch, depth - 1, &mut local);
                local
            })
        })
        .collect();

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle
            .join()
            .map_err(|_| ChessError::Engine("perft worker thread panicked".to_owned()))?;
        total.merge(local);
    }

    Ok(total)
}

/// Node count below each root move, for narrowing down generator bugs.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(Move, usize)> {
    let mut scratch = game_state.clone();
    generate_expanded_legal_moves(game_state)
        .into_iter()
        .map(|mv| {
            let mut local = PerftCounts::default();
            scratch.push_move(mv);
            perft_recurse(&mut scratch, depth.saturating_sub(1), &mut local);
            scratch.pop_move();
            (mv, local.nodes)
        })
        .collect()
}

fn perft_recurse(game_state: &mut GameState, depth: u8, counts: &mut PerftCounts) {
    if depth == 0 {
        counts.nodes += 1;
        return;
    }

    for mv in generate_expanded_legal_moves(game_state) {
        game_state.push_move(mv);
        if depth == 1 {
            count_leaf(game_state, &mv, counts);
        } else {
            perft_recurse(game_state, depth - 1, counts);
        }
        game_state.pop_move();
    }
}

fn count_leaf(after_move: &GameState, mv: &Move, counts: &mut PerftCounts) {
    counts.nodes += 1;
    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.is_en_passant {
        counts.en_passant += 1;
    }
    if mv.is_castle() {
        counts.castles += 1;
    }
    if mv.is_pawn_promotion {
        counts.promotions += 1;
    }
    if after_move.in_check() {
        counts.checks += 1;
        if !has_legal_move(after_move) {
            counts.checkmates += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide, perft_multi_threaded, PerftCounts};
    use crate::game_state::game_state::GameState;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const POSITION_4: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&GameState::new_game(), 0);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn starting_position_node_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1).nodes, 20);
        assert_eq!(perft(&game, 2).nodes, 400);

        let depth_three = perft(&game, 3);
        assert_eq!(depth_three.nodes, 8902);
        assert_eq!(depth_three.captures, 34);
        assert_eq!(depth_three.checks, 12);
        assert_eq!(depth_three.checkmates, 0);
    }

    #[test]
    fn kiwipete_exercises_castling_and_en_passant() {
        let game = GameState::from_fen(KIWIPETE).expect("FEN should parse");

        let depth_one = perft(&game, 1);
        assert_eq!(depth_one.nodes, 48);
        assert_eq!(depth_one.captures, 8);
        assert_eq!(depth_one.castles, 2);

        let depth_two = perft(&game, 2);
        assert_eq!(depth_two.nodes, 2039);
        assert_eq!(depth_two.captures, 351);
        assert_eq!(depth_two.en_passant, 1);
        assert_eq!(depth_two.castles, 91);
        assert_eq!(depth_two.checks, 3);
    }

    #[test]
    fn position_three_node_counts() {
        let game = GameState::from_fen(POSITION_3).expect("FEN should parse");
        assert_eq!(perft(&game, 1).nodes, 14);
        assert_eq!(perft(&game, 2).nodes, 191);

        let depth_three = perft(&game, 3);
        assert_eq!(depth_three.nodes, 2812);
        assert_eq!(depth_three.en_passant, 2);
        assert_eq!(depth_three.checks, 267);
    }

    #[test]
    fn position_four_counts_underpromotions() {
        let game = GameState::from_fen(POSITION_4).expect("FEN should parse");
        assert_eq!(perft(&game, 1).nodes, 6);

        let depth_two = perft(&game, 2);
        assert_eq!(depth_two.nodes, 264);
        assert_eq!(depth_two.captures, 87);
        assert_eq!(depth_two.castles, 6);
        assert_eq!(depth_two.promotions, 48);
        assert_eq!(depth_two.checks, 10);
    }

    #[test]
    fn threaded_perft_matches_single_threaded() {
        let game = GameState::from_fen(KIWIPETE).expect("FEN should parse");
        let threaded = perft_multi_threaded(&game, 2).expect("perft should run");
        assert_eq!(threaded, perft(&game, 2));
    }

    #[test]
    fn divide_sums_to_total() {
        let game = GameState::new_game();
        let divided = perft_divide(&game, 2);
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<usize>(), 400);
        assert_eq!(game.move_log().len(), 0);
    }
}
