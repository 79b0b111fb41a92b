use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::rook_moves::trace_ray;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Squares a bishop on `square` attacks, stopping at the first blocker.
#[inline]
pub fn bishop_attacks(board: &Board, square: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(13);
    for (d_row, d_col) in BISHOP_DIRECTIONS {
        trace_ray(board, square, d_row, d_col, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn bishop_rays_from_d4_have_thirteen_squares() {
        assert_eq!(bishop_attacks(&Board::empty(), Square::new(4, 3)).len(), 13);
    }

    #[test]
    fn bishop_blocker_is_included_but_not_passed() {
        let mut board = Board::empty();
        let c1 = Square::new(7, 2);
        let e3 = Square::new(5, 4);
        board.set(e3, Some(Piece::new(Color::Light, PieceKind::Pawn)));

        let attacks = bishop_attacks(&board, c1);
        assert!(attacks.contains(&Square::new(6, 3)));
        assert!(attacks.contains(&e3));
        assert!(!attacks.contains(&Square::new(4, 5)));
    }
}
