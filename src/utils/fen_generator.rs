use crate::game_state::{chess_types::*, game_state::GameState};

pub fn generate_fen(game_state: &GameState) -> String {
    let side_to_move = match game_state.side_to_move() {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let en_passant = game_state
        .en_passant_square()
        .map_or_else(|| "-".to_owned(), |sq| sq.to_string());

    format!(
        "{} {} {} {} {} {}",
        generate_board_field(game_state),
        side_to_move,
        generate_castling_field(game_state.castling_rights()),
        en_passant,
        game_state.halfmove_clock(),
        game_state.fullmove_number()
    )
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for (row, cells) in game_state.board().rows().iter().enumerate() {
        let mut empty_count = 0u8;

        for cell in cells {
            if let Some(piece) = cell {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(*piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    let upper = piece.kind.code();
    match piece.color {
        Color::Light => upper,
        Color::Dark => upper.to_ascii_lowercase(),
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if (rights & CASTLE_LIGHT_KINGSIDE) != 0 {
        out.push('K');
    }
    if (rights & CASTLE_LIGHT_QUEENSIDE) != 0 {
        out.push('Q');
    }
    if (rights & CASTLE_DARK_KINGSIDE) != 0 {
        out.push('k');
    }
    if (rights & CASTLE_DARK_QUEENSIDE) != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Color, CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE};
    use crate::game_state::game_state::GameState;

    #[test]
    fn round_trip_starting_position_fen() {
        let generated = generate_fen(&GameState::new_game());
        assert_eq!(generated, STARTING_POSITION_FEN);
    }

    #[test]
    fn round_trip_custom_position_fen() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6";
        let parsed = GameState::from_fen(fen).expect("custom FEN should parse");
        let generated = generate_fen(&parsed);
        let reparsed = GameState::from_fen(&generated).expect("generated FEN should parse");

        assert_eq!(generated, fen);
        assert_eq!(reparsed.board(), parsed.board());
        assert_eq!(reparsed.side_to_move(), Color::Dark);
        assert_eq!(
            reparsed.castling_rights(),
            CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE
        );
        assert_eq!(reparsed.en_passant_square(), None);
        assert_eq!(reparsed.halfmove_clock(), 4);
        assert_eq!(reparsed.fullmove_number(), 6);
    }

    #[test]
    fn double_push_writes_en_passant_target() {
        let mut game = GameState::new_game();
        let mv = game
            .valid_moves()
            .into_iter()
            .find(|m| m.to_long_algebraic() == "e2e4")
            .expect("e2e4 should be legal");
        game.make_move(mv);
        assert_eq!(
            game.get_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }
}
