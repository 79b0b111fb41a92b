//! Board-level effects of applying and reverting a move.
//!
//! `GameState::make_move` and the legality filter both go through
//! [`apply_move_to_board`], so the scratch board that is tested for self-check
//! is exactly the board the game would end up with.

use crate::game_state::chess_rules::{kingside_rook_start, queenside_rook_start};
use crate::game_state::{board::Board, chess_types::*};
use crate::moves::chess_move::Move;

/// Where the captured piece of `mv` stands before the move, if any.
#[inline]
pub fn capture_square(mv: &Move) -> Option<Square> {
    if mv.is_en_passant {
        Some(Square::new(mv.start.row, mv.end.col))
    } else if mv.captured.is_some() {
        Some(mv.end)
    } else {
        None
    }
}

/// Rook hop `(from, to)` that accompanies a castling move.
#[inline]
pub fn castling_rook_squares(mv: &Move) -> Option<(Square, Square)> {
    let row = mv.start.row;
    if mv.is_castle_kingside {
        Some((Square::new(row, 7), Square::new(row, 5)))
    } else if mv.is_castle_queenside {
        Some((Square::new(row, 0), Square::new(row, 3)))
    } else {
        None
    }
}

/// Apply `mv` to `board`, returning the captured piece and its square.
pub fn apply_move_to_board(board: &mut Board, mv: &Move) -> Option<(Square, Piece)> {
    let captured = capture_square(mv).and_then(|sq| board.take(sq).map(|piece| (sq, piece)));

    let moving = board.take(mv.start).unwrap_or(mv.moved);
    let placed = if mv.is_pawn_promotion {
        Piece::new(moving.color, mv.promotion_piece())
    } else {
        moving
    };
    board.set(mv.end, Some(placed));

    if let Some((rook_from, rook_to)) = castling_rook_squares(mv) {
        let rook = board.take(rook_from);
        board.set(rook_to, rook);
    }

    captured
}

/// Exact inverse of [`apply_move_to_board`].
pub fn revert_move_on_board(board: &mut Board, mv: &Move, captured: Option<(Square, Piece)>) {
    if let Some((rook_from, rook_to)) = castling_rook_squares(mv) {
        let rook = board.take(rook_to);
        board.set(rook_from, rook);
    }

    // Promotion reverts to the original pawn.
    board.take(mv.end);
    board.set(mv.start, Some(mv.moved));

    if let Some((sq, piece)) = captured {
        board.set(sq, Some(piece));
    }
}

/// Castling rights after `mv`: a king move drops both of its rights, a rook
/// leaving or being captured on its home square drops that side's right.
pub fn update_castling_rights(rights: CastlingRights, mv: &Move) -> CastlingRights {
    let mut next = rights;
    let mover = mv.moved.color;

    if mv.moved.kind == PieceKind::King {
        next &= !(kingside_right(mover) | queenside_right(mover));
    }

    for color in [Color::Light, Color::Dark] {
        for square in [mv.start, mv.end] {
            if square == kingside_rook_start(color) {
                next &= !kingside_right(color);
            }
            if square == queenside_rook_start(color) {
                next &= !queenside_right(color);
            }
        }
    }

    next
}

/// En-passant target created by `mv`: the square the pawn skipped over.
#[inline]
pub fn en_passant_target_after(mv: &Move) -> Option<Square> {
    if mv.is_double_pawn_push {
        Some(Square::new((mv.start.row + mv.end.row) / 2, mv.start.col))
    } else {
        None
    }
}
