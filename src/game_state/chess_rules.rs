//! Canonical chess-rule constants.
//!
//! Starting position FEN plus the fixed squares and thresholds used by
//! castling and the draw rules.

use crate::game_state::chess_types::{Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Halfmove clock value at which the fifty-move rule ends the game.
pub const FIFTY_MOVE_HALFMOVES: u16 = 100;

/// Occurrences of one position that end the game by repetition.
pub const REPETITION_LIMIT: usize = 3;

pub const KING_START_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

#[inline]
pub const fn king_start(color: Color) -> Square {
    Square::new(color.back_row(), KING_START_COL)
}

#[inline]
pub const fn kingside_rook_start(color: Color) -> Square {
    Square::new(color.back_row(), KINGSIDE_ROOK_COL)
}

#[inline]
pub const fn queenside_rook_start(color: Color) -> Square {
    Square::new(color.back_row(), QUEENSIDE_ROOK_COL)
}
