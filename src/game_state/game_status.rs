//! Terminal-state vocabulary for a game in progress.

use crate::game_state::chess_types::Color;

/// Why a game ended without a winner. Reported through
/// [`GameStatus::Stalemate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    /// Side to move has no legal move and is not in check.
    NoLegalMoves,
    /// Neither side can possibly deliver mate.
    InsufficientMaterial,
    /// The same position occurred three times.
    ThreefoldRepetition,
    /// One hundred plies without a pawn move or capture.
    FiftyMoveRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Checkmate {
        winner: Color,
    },
    Stalemate(DrawReason),
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
