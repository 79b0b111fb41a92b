use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;

/// What a piece of `mover`'s colour finds on `square`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    Empty,
    Friendly,
    Enemy(Piece),
}

#[inline]
pub fn occupant(game_state: &GameState, mover: Color, square: Square) -> Occupant {
    match game_state.board().get(square) {
        None => Occupant::Empty,
        Some(piece) if piece.color == mover => Occupant::Friendly,
        Some(piece) => Occupant::Enemy(piece),
    }
}

/// Emit quiet moves and captures from `from` onto each target square,
/// skipping squares held by the mover's own pieces.
pub fn push_target_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    targets: impl IntoIterator<Item = Square>,
    out: &mut Vec<Move>,
) {
    for to in targets {
        match occupant(game_state, piece.color, to) {
            Occupant::Empty => out.push(Move::new(from, to, piece, None)),
            Occupant::Enemy(captured) => out.push(Move::new(from, to, piece, Some(captured))),
            Occupant::Friendly => {}
        }
    }
}
