//! Core game state: board, turn, rights, history, and terminal status.
//!
//! `GameState` is the central model for the engine. It owns the board and
//! every piece of state a move can change, keeps an undo stack of per-move
//! snapshots, and recomputes checkmate/stalemate after each applied move.
//! One instance per game; callers serialise access.

use tracing::{debug, warn};

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{FIFTY_MOVE_HALFMOVES, REPETITION_LIMIT};
use crate::game_state::chess_types::*;
use crate::game_state::game_status::{DrawReason, GameStatus};
use crate::move_generation::legal_move_apply::{
    apply_move_to_board, en_passant_target_after, revert_move_on_board, update_castling_rights,
};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{generate_legal_moves, has_legal_move};
use crate::moves::chess_move::Move;
use crate::search::zobrist::compute_zobrist_key;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,

    // --- Clocks / move counters ---
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,

    // --- Repetition support ---
    pub(crate) zobrist_key: u64,
    pub(crate) position_history: Vec<u64>,

    // --- Make/undo stack ---
    pub(crate) move_log: Vec<UndoState>,

    pub(crate) status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        Self::from_parts(Board::starting_position(), Color::Light, CASTLE_ALL, None, 0, 1)
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Assemble a state from raw position fields with an empty move log.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_square: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> Self {
        let mut game_state = Self {
            board,
            side_to_move,
            castling_rights,
            en_passant_square,
            halfmove_clock,
            fullmove_number,
            zobrist_key: 0,
            position_history: Vec::new(),
            move_log: Vec::new(),
            status: GameStatus::InProgress,
        };
        game_state.zobrist_key = compute_zobrist_key(&game_state);
        game_state.position_history.push(game_state.zobrist_key);
        game_state.status = game_state.compute_status();
        game_state
    }

    // --- Read-only queries ---

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn zobrist_key(&self) -> u64 {
        self.zobrist_key
    }

    /// Applied moves in order, oldest first.
    pub fn move_log(&self) -> impl ExactSizeIterator<Item = &Move> + '_ {
        self.move_log.iter().map(|undo| &undo.mv)
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last().map(|undo| &undo.mv)
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        matches!(self.status, GameStatus::Checkmate { .. })
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        matches!(self.status, GameStatus::Stalemate(_))
    }

    #[inline]
    pub fn stalemate_reason(&self) -> Option<DrawReason> {
        match self.status {
            GameStatus::Stalemate(reason) => Some(reason),
            _ => None,
        }
    }

    /// Whether the side to move is currently attacked.
    #[inline]
    pub fn in_check(&self) -> bool {
        is_king_in_check(&self.board, self.side_to_move)
    }

    // --- Move generation ---

    /// Every legal move in the current position. Pure query.
    #[inline]
    pub fn legal_moves(&self) -> Vec<Move> {
        generate_legal_moves(self)
    }

    /// Every legal move in the current position, refreshing the terminal
    /// status from the result.
    pub fn valid_moves(&mut self) -> Vec<Move> {
        let moves = generate_legal_moves(self);
        self.status = self.status_for(!moves.is_empty());
        moves
    }

    /// Match a caller-supplied start/end pair against the legal set. For a
    /// promotion the given choice is recorded on the returned move; with no
    /// choice the pawn will become a queen.
    pub fn find_legal_move(
        &self,
        start: Square,
        end: Square,
        promotion: Option<PieceKind>,
    ) -> Option<Move> {
        let mut mv = self
            .legal_moves()
            .into_iter()
            .find(|mv| mv.start == start && mv.end == end)?;
        if let Some(kind) = promotion {
            if mv.is_pawn_promotion && !mv.set_promotion_choice(kind) {
                return None;
            }
        }
        Some(mv)
    }

    // --- Make / undo ---

    /// Apply a move taken from [`GameState::valid_moves`]. No legality check
    /// is made. Ignored once the game has reached a terminal state.
    pub fn make_move(&mut self, mv: Move) {
        if self.status.is_terminal() {
            warn!(mv = %mv, status = ?self.status, "move refused: game is over");
            return;
        }

        self.push_move(mv);
        self.status = self.compute_status();

        debug!(
            mv = %mv,
            ply = self.move_log.len(),
            status = ?self.status,
            "move applied"
        );
    }

    /// Revert the last applied move. No-op on an empty log.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.pop_move()?;
        self.status = GameStatus::InProgress;
        debug!(mv = %mv, ply = self.move_log.len(), "move undone");
        Some(mv)
    }

    /// Make without status recomputation. Search drives this directly and
    /// derives terminal states from its own move generation.
    pub(crate) fn push_move(&mut self, mv: Move) {
        let captured = apply_move_to_board(&mut self.board, &mv);
        let undo = UndoState {
            mv,
            captured_piece: captured.map(|(_, piece)| piece),
            captured_square: captured.map(|(sq, _)| sq),
            prev_castling_rights: self.castling_rights,
            prev_en_passant_square: self.en_passant_square,
            prev_halfmove_clock: self.halfmove_clock,
            prev_fullmove_number: self.fullmove_number,
            prev_zobrist_key: self.zobrist_key,
        };

        self.castling_rights = update_castling_rights(self.castling_rights, &mv);
        self.en_passant_square = en_passant_target_after(&mv);

        if mv.moved.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if self.side_to_move == Color::Dark {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.side_to_move = self.side_to_move.opposite();
        self.zobrist_key = compute_zobrist_key(self);
        self.position_history.push(self.zobrist_key);
        self.move_log.push(undo);
    }

    pub(crate) fn pop_move(&mut self) -> Option<Move> {
        let undo = self.move_log.pop()?;

        let captured = match (undo.captured_square, undo.captured_piece) {
            (Some(sq), Some(piece)) => Some((sq, piece)),
            _ => None,
        };
        revert_move_on_board(&mut self.board, &undo.mv, captured);

        self.side_to_move = self.side_to_move.opposite();
        self.castling_rights = undo.prev_castling_rights;
        self.en_passant_square = undo.prev_en_passant_square;
        self.halfmove_clock = undo.prev_halfmove_clock;
        self.fullmove_number = undo.prev_fullmove_number;
        self.zobrist_key = undo.prev_zobrist_key;
        self.position_history.pop();

        Some(undo.mv)
    }

    // --- Terminal detection ---

    fn compute_status(&self) -> GameStatus {
        self.status_for(has_legal_move(self))
    }

    fn status_for(&self, has_moves: bool) -> GameStatus {
        if !has_moves {
            return if self.in_check() {
                GameStatus::Checkmate {
                    winner: self.side_to_move.opposite(),
                }
            } else {
                GameStatus::Stalemate(DrawReason::NoLegalMoves)
            };
        }

        match self.draw_by_rule() {
            Some(reason) => GameStatus::Stalemate(reason),
            None => GameStatus::InProgress,
        }
    }

    /// Draw conditions that hold regardless of whether moves remain.
    pub fn draw_by_rule(&self) -> Option<DrawReason> {
        if self.has_insufficient_material() {
            Some(DrawReason::InsufficientMaterial)
        } else if self.halfmove_clock >= FIFTY_MOVE_HALFMOVES {
            Some(DrawReason::FiftyMoveRule)
        } else if self.repetition_count() >= REPETITION_LIMIT {
            Some(DrawReason::ThreefoldRepetition)
        } else {
            None
        }
    }

    /// Occurrences of the current position since the last irreversible move.
    pub fn repetition_count(&self) -> usize {
        let window = usize::from(self.halfmove_clock) + 1;
        self.position_history
            .iter()
            .rev()
            .take(window)
            .filter(|key| **key == self.zobrist_key)
            .count()
    }

    /// K v K, K+minor v K, and bishops-only endings with every bishop on the
    /// same square colour.
    pub fn has_insufficient_material(&self) -> bool {
        let mut knights = 0usize;
        let mut bishops_on_light = 0usize;
        let mut bishops_on_dark = 0usize;

        for (sq, piece) in self.board.pieces() {
            match piece.kind {
                PieceKind::King => {}
                PieceKind::Knight => knights += 1,
                PieceKind::Bishop if sq.is_light() => bishops_on_light += 1,
                PieceKind::Bishop => bishops_on_dark += 1,
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            }
        }

        let bishops = bishops_on_light + bishops_on_dark;
        match (knights, bishops) {
            (0, 0) | (1, 0) | (0, 1) => true,
            (0, _) => bishops_on_light == 0 || bishops_on_dark == 0,
            _ => false,
        }
    }
}
