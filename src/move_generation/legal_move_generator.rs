//! Full legal move generation pipeline.
//!
//! Orchestrates piece-wise pseudo-legal generation, applies each candidate to
//! a scratch copy of the board, and drops every move that leaves the mover's
//! own king attacked.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move_to_board, revert_move_on_board};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

/// Pseudo-legal moves for the side to move, in board order.
pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<Move> {
    let side = game_state.side_to_move();
    let mut pseudo = Vec::<Move>::with_capacity(64);

    for (from, piece) in game_state.board().pieces_of(side) {
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, from, piece, &mut pseudo),
            PieceKind::Knight => generate_knight_moves(game_state, from, piece, &mut pseudo),
            PieceKind::Bishop => generate_bishop_moves(game_state, from, piece, &mut pseudo),
            PieceKind::Rook => generate_rook_moves(game_state, from, piece, &mut pseudo),
            PieceKind::Queen => generate_queen_moves(game_state, from, piece, &mut pseudo),
            PieceKind::King => generate_king_moves(game_state, from, piece, &mut pseudo),
        }
    }

    pseudo
}

/// Legal moves for the side to move. Promotions appear once each, with no
/// promotion choice set.
pub fn generate_legal_moves(game_state: &GameState) -> Vec<Move> {
    let side = game_state.side_to_move();
    let mut scratch = *game_state.board();

    generate_pseudo_legal_moves(game_state)
        .into_iter()
        .filter(|mv| {
            let captured = apply_move_to_board(&mut scratch, mv);
            // Illegal if own king is in check after move.
            let legal = !is_king_in_check(&scratch, side);
            revert_move_on_board(&mut scratch, mv, captured);
            legal
        })
        .collect()
}

/// Legal moves with every promotion expanded into its four piece choices.
/// This is the set the search explores.
pub fn generate_expanded_legal_moves(game_state: &GameState) -> Vec<Move> {
    expand_promotions(generate_legal_moves(game_state))
}

pub fn expand_promotions(moves: Vec<Move>) -> Vec<Move> {
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        if mv.is_pawn_promotion && mv.promotion_choice().is_none() {
            out.extend(
                PieceKind::PROMOTIONS
                    .iter()
                    .map(|kind| mv.with_promotion_choice(*kind)),
            );
        } else {
            out.push(mv);
        }
    }
    out
}

/// Whether `side` to move has any legal move at all. Stops at the first one.
pub fn has_legal_move(game_state: &GameState) -> bool {
    let side = game_state.side_to_move();
    let mut scratch = *game_state.board();
    generate_pseudo_legal_moves(game_state).iter().any(|mv| {
        let captured = apply_move_to_board(&mut scratch, mv);
        let legal = !is_king_in_check(&scratch, side);
        revert_move_on_board(&mut scratch, mv, captured);
        legal
    })
}
