use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Single undo record for `make_move` / `undo_move`.
///
/// Everything that `make_move` overwrites is captured here at apply time, so
/// undo never has to reconstruct state from the board.
#[derive(Debug, Clone)]
pub struct UndoState {
    pub mv: Move,
    pub captured_piece: Option<Piece>,
    pub captured_square: Option<Square>,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,

    pub prev_zobrist_key: u64,
}
