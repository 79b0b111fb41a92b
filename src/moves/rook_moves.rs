use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Squares a rook on `square` attacks: each ray runs until it leaves the
/// board or reaches the first occupied square (inclusive).
#[inline]
pub fn rook_attacks(board: &Board, square: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(14);
    for (d_row, d_col) in ROOK_DIRECTIONS {
        trace_ray(board, square, d_row, d_col, &mut out);
    }
    out
}

pub(crate) fn trace_ray(
    board: &Board,
    square: Square,
    d_row: i8,
    d_col: i8,
    out: &mut Vec<Square>,
) {
    let mut current = square.offset(d_row, d_col);
    while let Some(target) = current {
        out.push(target);
        if !board.is_empty(target) {
            break;
        }
        current = target.offset(d_row, d_col);
    }
}

/// First occupied square along a ray, if any.
pub(crate) fn first_blocker(
    board: &Board,
    square: Square,
    d_row: i8,
    d_col: i8,
) -> Option<Square> {
    let mut current = square.offset(d_row, d_col);
    while let Some(target) = current {
        if !board.is_empty(target) {
            return Some(target);
        }
        current = target.offset(d_row, d_col);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::rook_attacks;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn rook_rays_from_d4_have_fourteen_squares() {
        let board = Board::empty();
        assert_eq!(rook_attacks(&board, Square::new(4, 3)).len(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let mut board = Board::empty();
        let a1 = Square::new(7, 0);
        let a4 = Square::new(4, 0);
        board.set(a4, Some(Piece::new(Color::Dark, PieceKind::Pawn)));

        let attacks = rook_attacks(&board, a1);
        assert!(attacks.contains(&a4));
        assert!(!attacks.contains(&Square::new(3, 0)));
    }
}
