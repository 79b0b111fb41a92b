//! King step and castling generation.
//!
//! Castling is emitted only when the right is still held, the rook is on its
//! home square, every square between king and rook is empty, and the king is
//! neither in check nor passing through an attacked square. The landing
//! square is checked here too, though the legality filter would also catch it.

use crate::game_state::chess_rules::{king_start, kingside_rook_start, queenside_rook_start};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::chess_move::Move;
use crate::moves::king_moves::king_targets;

pub fn generate_king_moves(game_state: &GameState, from: Square, king: Piece, out: &mut Vec<Move>) {
    push_target_moves(game_state, from, king, king_targets(from), out);
    generate_castling_moves(game_state, from, king, out);
}

fn generate_castling_moves(game_state: &GameState, from: Square, king: Piece, out: &mut Vec<Move>) {
    let side = king.color;
    if from != king_start(side) {
        return;
    }

    let rights = game_state.castling_rights();
    let wants_kingside = rights & kingside_right(side) != 0;
    let wants_queenside = rights & queenside_right(side) != 0;
    if !wants_kingside && !wants_queenside {
        return;
    }

    let board = game_state.board();
    let enemy = side.opposite();

    // Cannot castle out of check.
    if is_square_attacked(board, from, enemy) {
        return;
    }

    let row = from.row;
    let own_rook = Some(Piece::new(side, PieceKind::Rook));

    if wants_kingside && board.get(kingside_rook_start(side)) == own_rook {
        let between = [Square::new(row, 5), Square::new(row, 6)];
        if between.iter().all(|sq| board.is_empty(*sq))
            && between.iter().all(|sq| !is_square_attacked(board, *sq, enemy))
        {
            out.push(Move::castle(from, Square::new(row, 6), king, true));
        }
    }

    if wants_queenside && board.get(queenside_rook_start(side)) == own_rook {
        let between = [Square::new(row, 1), Square::new(row, 2), Square::new(row, 3)];
        let king_path = [Square::new(row, 3), Square::new(row, 2)];
        if between.iter().all(|sq| board.is_empty(*sq))
            && king_path.iter().all(|sq| !is_square_attacked(board, *sq, enemy))
        {
            out.push(Move::castle(from, Square::new(row, 2), king, false));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::game_state::GameState;

    fn castles(fen: &str) -> Vec<String> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        game.legal_moves()
            .into_iter()
            .filter(|m| m.is_castle())
            .map(|m| m.to_long_algebraic())
            .collect()
    }

    #[test]
    fn both_castles_available_on_open_back_rank() {
        let moves = castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&"e1g1".to_owned()));
        assert!(moves.contains(&"e1c1".to_owned()));
    }

    #[test]
    fn castling_through_attacked_square_is_refused() {
        // Black rook on f8 covers f1.
        let moves = castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert_eq!(moves, vec!["e1c1".to_owned()]);
    }

    #[test]
    fn castling_out_of_check_is_refused() {
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").is_empty());
    }

    #[test]
    fn queenside_b_file_may_be_attacked_but_not_occupied() {
        // b1 attacked by the rook on b8: still legal.
        let moves = castles("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert_eq!(moves, vec!["e1c1".to_owned()]);

        let blocked = castles("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1");
        assert!(blocked.is_empty());
    }
}
