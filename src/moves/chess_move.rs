//! Value type describing one ply.
//!
//! Moves compare by `(start, end, promotion_choice)` only, so a move built
//! from user input matches the generator's copy regardless of the metadata
//! the generator attached.

use std::fmt;

use crate::game_state::chess_types::{Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub is_pawn_promotion: bool,
    pub is_en_passant: bool,
    pub is_castle_kingside: bool,
    pub is_castle_queenside: bool,
    pub is_double_pawn_push: bool,
    promotion_choice: Option<PieceKind>,
}

impl Move {
    /// Plain move or capture with no special flags.
    pub fn new(start: Square, end: Square, moved: Piece, captured: Option<Piece>) -> Self {
        Self {
            start,
            end,
            moved,
            captured,
            is_pawn_promotion: false,
            is_en_passant: false,
            is_castle_kingside: false,
            is_castle_queenside: false,
            is_double_pawn_push: false,
            promotion_choice: None,
        }
    }

    pub fn promotion(start: Square, end: Square, moved: Piece, captured: Option<Piece>) -> Self {
        Self {
            is_pawn_promotion: true,
            ..Self::new(start, end, moved, captured)
        }
    }

    pub fn double_pawn_push(start: Square, end: Square, moved: Piece) -> Self {
        Self {
            is_double_pawn_push: true,
            ..Self::new(start, end, moved, None)
        }
    }

    /// `captured` is the pawn removed from beside `end`, not from `end` itself.
    pub fn en_passant(start: Square, end: Square, moved: Piece, captured: Piece) -> Self {
        Self {
            is_en_passant: true,
            ..Self::new(start, end, moved, Some(captured))
        }
    }

    pub fn castle(start: Square, end: Square, king: Piece, kingside: bool) -> Self {
        Self {
            is_castle_kingside: kingside,
            is_castle_queenside: !kingside,
            ..Self::new(start, end, king, None)
        }
    }

    #[inline]
    pub fn promotion_choice(&self) -> Option<PieceKind> {
        self.promotion_choice
    }

    /// Piece kind the pawn becomes when this move is applied.
    #[inline]
    pub fn promotion_piece(&self) -> PieceKind {
        self.promotion_choice.unwrap_or(PieceKind::Queen)
    }

    /// Record the mover's promotion choice. Only the first call on a
    /// promotion move takes effect; non-promotion moves and pawn/king
    /// choices are ignored. Returns whether the choice was stored.
    pub fn set_promotion_choice(&mut self, kind: PieceKind) -> bool {
        if !self.is_pawn_promotion || self.promotion_choice.is_some() || !kind.is_promotion_target()
        {
            return false;
        }
        self.promotion_choice = Some(kind);
        true
    }

    /// Copy of this promotion move with the choice filled in.
    pub fn with_promotion_choice(mut self, kind: PieceKind) -> Self {
        self.promotion_choice = None;
        self.set_promotion_choice(kind);
        self
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.is_castle_kingside || self.is_castle_queenside
    }

    /// Long algebraic text such as `e2e4` or `e7e8n`.
    pub fn to_long_algebraic(&self) -> String {
        let mut out = format!("{}{}", self.start, self.end);
        if self.is_pawn_promotion {
            out.push(self.promotion_piece().code().to_ascii_lowercase());
        }
        out
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && self.promotion_choice == other.promotion_choice
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_long_algebraic())
    }
}
