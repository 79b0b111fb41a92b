//! Attack and check detection over a mailbox board.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::{first_blocker, ROOK_DIRECTIONS};

/// Location of `color`'s king.
///
/// # Panics
/// Panics when the king is missing. The engine never produces such a
/// position through its own moves, so reaching this is a programming error.
#[inline]
pub fn king_square(board: &Board, color: Color) -> Square {
    board
        .king_square(color)
        .unwrap_or_else(|| panic!("{color:?} king missing from board"))
}

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    is_square_attacked(board, king_square(board, color), color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let holds = |sq: Square, kinds: &[PieceKind]| {
        board
            .get(sq)
            .is_some_and(|p| p.color == attacker_color && kinds.contains(&p.kind))
    };

    // A pawn attacks `square` from the squares a defending pawn there would attack.
    if pawn_attacks(attacker_color.opposite(), square).any(|sq| holds(sq, &[PieceKind::Pawn])) {
        return true;
    }

    if knight_targets(square).any(|sq| holds(sq, &[PieceKind::Knight])) {
        return true;
    }

    if king_targets(square).any(|sq| holds(sq, &[PieceKind::King])) {
        return true;
    }

    for (d_row, d_col) in BISHOP_DIRECTIONS {
        if let Some(sq) = first_blocker(board, square, d_row, d_col) {
            if holds(sq, &[PieceKind::Bishop, PieceKind::Queen]) {
                return true;
            }
        }
    }

    for (d_row, d_col) in ROOK_DIRECTIONS {
        if let Some(sq) = first_blocker(board, square, d_row, d_col) {
            if holds(sq, &[PieceKind::Rook, PieceKind::Queen]) {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::{is_king_in_check, is_square_attacked};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_position_has_no_checks() {
        let game = GameState::new_game();
        assert!(!is_king_in_check(game.board(), Color::Light));
        assert!(!is_king_in_check(game.board(), Color::Dark));
    }

    #[test]
    fn pawn_attacks_diagonally_forward_only() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        let d3 = Square::new(5, 3);
        let e3 = Square::new(5, 4);
        let d1 = Square::new(7, 3);
        assert!(is_square_attacked(game.board(), d3, Color::Light));
        assert!(!is_square_attacked(game.board(), e3, Color::Light));
        assert!(is_square_attacked(game.board(), d1, Color::Light));
    }

    #[test]
    fn slider_check_is_blocked_by_interposed_piece() {
        let open = GameState::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(open.board(), Color::Light));

        let blocked =
            GameState::from_fen("4k3/8/8/8/8/8/8/r2NK3 w - - 0 1").expect("FEN should parse");
        assert!(!is_king_in_check(blocked.board(), Color::Light));
    }

    #[test]
    #[should_panic(expected = "king missing")]
    fn missing_king_fails_loudly() {
        let mut board = Board::empty();
        board.set(Square::new(7, 4), Some(Piece::new(Color::Light, PieceKind::King)));
        is_king_in_check(&board, Color::Dark);
    }
}
