//! Zobrist hashing support for fast position identity and repetition tracking.
//!
//! The keys are generated from a fixed seed so hashes are deterministic across
//! runs, which is useful for testing and debugging.

use std::sync::OnceLock;

use crate::game_state::{chess_types::*, game_state::GameState};

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    side_to_move: u64,
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for color in &mut piece_square {
        for piece in color {
            for sq in piece {
                *sq = next_random_u64(&mut seed);
            }
        }
    }

    let side_to_move = next_random_u64(&mut seed);

    let mut castling = [0u64; 16];
    for key in &mut castling {
        *key = next_random_u64(&mut seed);
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = next_random_u64(&mut seed);
    }

    ZobristTables {
        piece_square,
        side_to_move,
        castling,
        en_passant_file,
    }
}

#[inline]
fn next_random_u64(state: &mut u64) -> u64 {
    // splitmix64
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[inline]
pub fn piece_square_key(piece: Piece, square: Square) -> u64 {
    tables().piece_square[piece.color.index()][piece.kind.index()][square.index()]
}

/// Compute the full position key from board, side, rights, and any
/// capturable en-passant file.
pub fn compute_zobrist_key(game_state: &GameState) -> u64 {
    let tables = tables();
    let mut key = 0u64;

    for (sq, piece) in game_state.board().pieces() {
        key ^= piece_square_key(piece, sq);
    }

    if game_state.side_to_move() == Color::Dark {
        key ^= tables.side_to_move;
    }

    key ^= tables.castling[(game_state.castling_rights() & 0x0F) as usize];

    if let Some(ep_square) = capturable_en_passant_square(game_state) {
        key ^= tables.en_passant_file[ep_square.col as usize];
    }

    key
}

/// The en-passant target only counts toward identity when a pawn of the side
/// to move stands beside the pawn that just double-pushed.
fn capturable_en_passant_square(game_state: &GameState) -> Option<Square> {
    let ep_square = game_state.en_passant_square()?;
    let mover = game_state.side_to_move();
    let capturer = Piece::new(mover, PieceKind::Pawn);
    let back = -mover.pawn_direction();

    [-1, 1]
        .into_iter()
        .filter_map(|d_col| ep_square.offset(back, d_col))
        .any(|sq| game_state.board().get(sq) == Some(capturer))
        .then_some(ep_square)
}
