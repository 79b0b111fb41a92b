//! Error types for the chess engine.
//!
//! Covers the recoverable failures: text that does not parse (FEN, squares,
//! long algebraic moves) and engine plumbing. Rule violations are not errors;
//! an illegal request simply has no match in the legal-move set.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid move text: {0}")]
    InvalidMove(String),

    /// Well-formed move text that matches no legal move.
    #[error("no legal move matches {0}")]
    NoLegalMove(String),

    #[error("engine error: {0}")]
    Engine(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
