//! Uniform random move selection, the fallback when search yields nothing.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::moves::chess_move::Move;

/// Pick one of `legal_moves` uniformly. `None` on an empty slice.
pub fn find_random_move<R: Rng + ?Sized>(legal_moves: &[Move], rng: &mut R) -> Option<Move> {
    legal_moves.choose(rng).copied()
}
