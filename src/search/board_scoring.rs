//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.

use crate::game_state::{chess_types::*, game_state::GameState};

pub const MATE_SCORE: i32 = 30000;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, game_state: &GameState) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 0,
        }
    }

    fn material_balance_light_minus_dark(game_state: &GameState) -> i32 {
        game_state
            .board()
            .pieces()
            .map(|(_, piece)| signed(piece.color, Self::piece_value(piece.kind)))
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        from_side_to_move(game_state, Self::material_balance_light_minus_dark(game_state))
    }
}

/// Material plus a small positional term per piece.
///
/// This is the default scorer used by the alpha-beta engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareScorer;

impl BoardScorer for PieceSquareScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let light_minus_dark: i32 = game_state
            .board()
            .pieces()
            .map(|(sq, piece)| {
                let value = MaterialScorer::piece_value(piece.kind)
                    + piece_square_bonus(piece.kind, piece.color, sq);
                signed(piece.color, value)
            })
            .sum();
        from_side_to_move(game_state, light_minus_dark)
    }
}

#[inline]
fn signed(color: Color, value: i32) -> i32 {
    match color {
        Color::Light => value,
        Color::Dark => -value,
    }
}

#[inline]
fn from_side_to_move(game_state: &GameState, light_minus_dark: i32) -> i32 {
    signed(game_state.side_to_move(), light_minus_dark)
}

fn piece_square_bonus(piece: PieceKind, color: Color, sq: Square) -> i32 {
    // Relative rank: 0 is the owner's back rank.
    let r = match color {
        Color::Light => 7 - sq.row as i32,
        Color::Dark => sq.row as i32,
    };
    let file = sq.col as i32;
    let dist_center = (file - 3).abs() + (r - 3).abs();
    let center_bonus = 4 - dist_center;

    match piece {
        PieceKind::Pawn => r * 8 - (file - 3).abs() * 2,
        PieceKind::Knight => center_bonus * 6,
        PieceKind::Bishop => center_bonus * 4 + r,
        PieceKind::Rook => r * 2,
        PieceKind::Queen => center_bonus * 2,
        PieceKind::King => {
            if r <= 1 {
                8 - (file - 4).abs() * 2
            } else {
                -center_bonus * 4
            }
        }
    }
}
