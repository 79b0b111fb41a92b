//! Pseudo-legal rook move generation.
//!
//! Rays stop at the first occupied square; the blocker is a capture target
//! when it belongs to the opponent.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::chess_move::Move;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(game_state: &GameState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let targets = rook_attacks(game_state.board(), from);
    push_target_moves(game_state, from, piece, targets, out);
}
