//! Long algebraic move text (`e2e4`, `e7e8q`) to and from engine moves.
//!
//! Parsing never builds a move on its own: the text is resolved against the
//! current legal set, so anything that parses is safe to apply.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;
use crate::utils::algebraic::algebraic_to_square;

pub fn move_to_long_algebraic(mv: &Move) -> String {
    mv.to_long_algebraic()
}

pub fn long_algebraic_to_move(long_algebraic: &str, game_state: &GameState) -> ChessResult<Move> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidMove(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text.chars().nth(4) {
        None => None,
        Some(ch) => Some(
            promotion_from_char(ch).ok_or_else(|| ChessError::InvalidMove(long_algebraic.to_owned()))?,
        ),
    };

    game_state
        .find_legal_move(from, to, promotion)
        .ok_or_else(|| ChessError::NoLegalMove(text.to_owned()))
}

fn promotion_from_char(ch: char) -> Option<PieceKind> {
    match ch.to_ascii_lowercase() {
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic};
    use crate::errors::ChessError;
    use crate::game_state::chess_types::PieceKind;
    use crate::game_state::game_state::GameState;

    #[test]
    fn parses_and_prints_a_double_push() {
        let game = GameState::new_game();
        let mv = long_algebraic_to_move("e2e4", &game).expect("e2e4 should resolve");
        assert!(mv.is_double_pawn_push);
        assert_eq!(move_to_long_algebraic(&mv), "e2e4");
    }

    #[test]
    fn promotion_suffix_selects_piece() {
        let game = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mv = long_algebraic_to_move("a7a8r", &game).expect("a7a8r should resolve");
        assert_eq!(mv.promotion_choice(), Some(PieceKind::Rook));
        assert_eq!(mv.to_string(), "a7a8r");
    }

    #[test]
    fn illegal_and_malformed_text_are_distinguished() {
        let game = GameState::new_game();
        assert_eq!(
            long_algebraic_to_move("e2e5", &game),
            Err(ChessError::NoLegalMove("e2e5".to_owned()))
        );
        assert!(matches!(
            long_algebraic_to_move("e2", &game),
            Err(ChessError::InvalidMove(_))
        ));
        assert!(matches!(
            long_algebraic_to_move("z2e4", &game),
            Err(ChessError::InvalidSquare(_))
        ));
    }
}
