//! Pseudo-legal pawn move generation: pushes, double pushes, captures,
//! en passant, and promotion flagging.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{occupant, Occupant};
use crate::moves::chess_move::Move;
use crate::moves::pawn_moves::pawn_attacks;

pub fn generate_pawn_moves(game_state: &GameState, from: Square, pawn: Piece, out: &mut Vec<Move>) {
    let side = pawn.color;
    let board = game_state.board();
    let promotion_row = side.promotion_row();

    if let Some(to) = from.offset(side.pawn_direction(), 0) {
        if board.is_empty(to) {
            if to.row == promotion_row {
                out.push(Move::promotion(from, to, pawn, None));
            } else {
                out.push(Move::new(from, to, pawn, None));

                if from.row == side.pawn_start_row() {
                    if let Some(two_step) = to.offset(side.pawn_direction(), 0) {
                        if board.is_empty(two_step) {
                            out.push(Move::double_pawn_push(from, two_step, pawn));
                        }
                    }
                }
            }
        }
    }

    for to in pawn_attacks(side, from) {
        match occupant(game_state, side, to) {
            Occupant::Enemy(captured) => {
                if to.row == promotion_row {
                    out.push(Move::promotion(from, to, pawn, Some(captured)));
                } else {
                    out.push(Move::new(from, to, pawn, Some(captured)));
                }
            }
            Occupant::Empty if game_state.en_passant_square() == Some(to) => {
                // The pawn being taken sits beside us, on the destination column.
                let passed = Square::new(from.row, to.col);
                if let Some(captured) = board.get(passed) {
                    if captured.color != side && captured.kind == PieceKind::Pawn {
                        out.push(Move::en_passant(from, to, pawn, captured));
                    }
                }
            }
            _ => {}
        }
    }
}
