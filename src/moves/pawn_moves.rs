use crate::game_state::chess_types::{Color, Square};

/// Diagonal squares a `color` pawn on `square` attacks.
#[inline]
pub fn pawn_attacks(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let d_row = color.pawn_direction();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_col| square.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::pawn_attacks;
    use crate::game_state::chess_types::{Color, Square};

    #[test]
    fn light_pawn_attacks_from_e2() {
        let e2 = Square::new(6, 4);
        let attacks: Vec<String> = pawn_attacks(Color::Light, e2).map(|s| s.to_string()).collect();
        assert_eq!(attacks, vec!["d3", "f3"]);
    }

    #[test]
    fn dark_pawn_attacks_from_a7() {
        let a7 = Square::new(1, 0);
        let attacks: Vec<String> = pawn_attacks(Color::Dark, a7).map(|s| s.to_string()).collect();
        assert_eq!(attacks, vec!["b6"]);
    }
}
