use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(board: &Board, square: Square) -> Vec<Square> {
    let mut out = rook_attacks(board, square);
    out.extend(bishop_attacks(board, square));
    out
}
