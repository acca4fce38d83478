//! The stateful rules engine
//!
//! [`BoardEngine`] owns one game: the position, the half-move clock, the move
//! history and the list of positions seen so far. It is a plain owned value;
//! callers hold it exclusively and there is no global instance.
//!
//! # Move application
//!
//! [`BoardEngine::apply_move`] validates the selection, runs the pure
//! legality predicate, makes the move, and takes it back again if the mover's
//! king is left attacked. Only a move that survives all of that touches the
//! castling rights, the clock, the turn and the history.
//!
//! # Simulation
//!
//! Legal-move enumeration and terminal-state classification make and unmake
//! candidate moves on a scratch copy of the position, so they only need
//! `&self`.

use super::game_over::{GameOutcome, GameStatus};
use super::history::{HistoryEntry, MoveHistory, MoveRecord};
use super::make_unmake::{make_move, unmake_move, update_castling_rights};
use super::outcome::MoveOutcome;
use crate::board::Board;
use crate::config::EngineConfig;
use crate::error::MoveError;
use crate::rules::draw::{
    is_fivefold_repetition, is_insufficient_material, is_seventy_five_move_draw,
};
use crate::rules::{self, get_possible_moves, is_valid_move, BoardState, DrawReason};
use crate::types::{CastlingRights, Piece, PieceColor, PieceType, Square};
use tracing::{debug, trace};

#[derive(Clone, Debug)]
pub struct BoardEngine {
    state: BoardState,
    config: EngineConfig,
    history: MoveHistory,
    /// Plies since the last pawn move or capture
    halfmove_clock: u32,
    /// Every position reached, starting position included
    positions: Vec<BoardState>,
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new_game()
    }
}

impl BoardEngine {
    /// Standard starting position with the default configuration
    pub fn new_game() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::from_state(BoardState::starting(), config)
    }

    /// Start from an arbitrary position
    ///
    /// The position is taken as given: the caller guarantees at most one king
    /// per colour and rights that match the rook and king placement.
    pub fn from_state(state: BoardState, config: EngineConfig) -> Self {
        debug!(
            "[ENGINE] New engine, {} to move, castling rule {:?}",
            state.turn, config.castling
        );
        BoardEngine {
            positions: vec![state.clone()],
            state,
            config,
            history: MoveHistory::default(),
            halfmove_clock: 0,
        }
    }

    /// Back to the starting position, keeping the configuration
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config);
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.state.get_piece_at(square)
    }

    pub fn turn(&self) -> PieceColor {
        self.state.turn
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.state.castling
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.state.en_passant
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn history(&self) -> &[MoveRecord] {
        self.history.records()
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last_move()
    }

    /// Attempt a move for the side to move
    ///
    /// `promotion` is only consulted when a pawn reaches its last rank; an
    /// absent or unusable choice promotes to a queen. A rejected move leaves
    /// the engine exactly as it was.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceType>,
    ) -> MoveOutcome {
        match self.try_apply_move(from, to, promotion) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!("[ENGINE] Rejected {}{}: {}", from, to, err);
                MoveOutcome::Rejected(err)
            }
        }
    }

    fn try_apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceType>,
    ) -> Result<MoveOutcome, MoveError> {
        let piece = self
            .state
            .get_piece_at(from)
            .ok_or(MoveError::NoPieceAtSquare { square: from })?;

        let color = self.state.turn;
        if piece.color != color {
            return Err(MoveError::WrongPieceColor {
                square: from,
                color,
            });
        }

        if !is_valid_move(&self.state, piece, from, to, self.config.castling) {
            return Err(MoveError::IllegalMove { from, to });
        }

        let undo = make_move(&mut self.state, piece, from, to, promotion);
        if rules::is_in_check(&self.state, color) {
            unmake_move(&mut self.state, &undo);
            return Err(MoveError::LeavesKingInCheck { from, to });
        }

        update_castling_rights(&mut self.state, &undo);

        let prev_halfmove_clock = self.halfmove_clock;
        self.halfmove_clock = if undo.is_irreversible() {
            0
        } else {
            self.halfmove_clock + 1
        };

        self.state.turn = color.opposite();
        let gives_check = rules::is_in_check(&self.state, self.state.turn);
        let record = MoveRecord::from_undo(&undo, gives_check);

        self.positions.push(self.state.clone());
        self.history.push(
            record,
            HistoryEntry {
                undo,
                prev_halfmove_clock,
            },
        );

        debug!(
            "[ENGINE] {} {}{}{}",
            piece,
            from,
            to,
            if gives_check { " check" } else { "" }
        );
        trace!("[ENGINE] Board after move:\n{}", self.state.board);

        Ok(match record.captured {
            Some(captured) => MoveOutcome::Captured(captured),
            None => MoveOutcome::Moved,
        })
    }

    /// Take back the last accepted move
    ///
    /// Restores board, rights, en-passant target, clock and turn exactly.
    /// Returns the reverted move, or `None` at the starting position.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let (record, entry) = self.history.pop()?;

        unmake_move(&mut self.state, &entry.undo);
        self.state.turn = entry.undo.moved.color;
        self.halfmove_clock = entry.prev_halfmove_clock;
        self.positions.pop();

        debug!("[ENGINE] Undid {}{}", record.from, record.to);
        Some(record)
    }

    /// Every (from, to) pair `color` could legally play in this position
    pub fn legal_moves(&self, color: PieceColor) -> Vec<(Square, Square)> {
        let mut scratch = self.state.clone();
        let mut moves = Vec::new();

        for (from, piece) in self.state.board.pieces() {
            if piece.color != color {
                continue;
            }
            for to in get_possible_moves(&self.state, piece, from, self.config.castling) {
                if Self::is_safe(&mut scratch, piece, from, to) {
                    moves.push((from, to));
                }
            }
        }

        trace!("[ENGINE] {} legal moves for {}", moves.len(), color);
        moves
    }

    /// Legal destinations for the piece on `square`
    ///
    /// Empty when the square is empty. The piece need not belong to the side
    /// to move.
    pub fn legal_moves_from(&self, square: Square) -> Vec<Square> {
        let Some(piece) = self.state.get_piece_at(square) else {
            return Vec::new();
        };

        let mut scratch = self.state.clone();
        get_possible_moves(&self.state, piece, square, self.config.castling)
            .into_iter()
            .filter(|&to| Self::is_safe(&mut scratch, piece, square, to))
            .collect()
    }

    fn has_legal_move(&self, color: PieceColor) -> bool {
        let mut scratch = self.state.clone();
        self.state
            .board
            .pieces()
            .filter(|(_, piece)| piece.color == color)
            .any(|(from, piece)| {
                Square::all().any(|to| {
                    is_valid_move(&self.state, piece, from, to, self.config.castling)
                        && Self::is_safe(&mut scratch, piece, from, to)
                })
            })
    }

    /// Make, test the mover's king, unmake. `scratch` comes back unchanged.
    fn is_safe(scratch: &mut BoardState, piece: Piece, from: Square, to: Square) -> bool {
        let undo = make_move(scratch, piece, from, to, None);
        let safe = !rules::is_in_check(scratch, piece.color);
        unmake_move(scratch, &undo);
        safe
    }

    pub fn is_in_check(&self, color: PieceColor) -> bool {
        rules::is_in_check(&self.state, color)
    }

    /// Check, checkmate or stalemate for `color` in the current position
    pub fn classify(&self, color: PieceColor) -> GameStatus {
        let in_check = self.is_in_check(color);
        let can_move = self.has_legal_move(color);

        match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Normal,
        }
    }

    /// The first enabled automatic draw that applies, if any
    pub fn draw_reason(&self) -> Option<DrawReason> {
        let rules = self.config.draw_rules;

        if rules.insufficient_material && is_insufficient_material(&self.state.board) {
            return Some(DrawReason::InsufficientMaterial);
        }
        if rules.seventy_five_move && is_seventy_five_move_draw(self.halfmove_clock) {
            return Some(DrawReason::SeventyFiveMoveRule);
        }
        if rules.fivefold_repetition && is_fivefold_repetition(&self.positions, &self.state) {
            return Some(DrawReason::FivefoldRepetition);
        }
        None
    }

    /// Game result for the side to move. Mate and stalemate take precedence
    /// over the automatic draws.
    pub fn outcome(&self) -> GameOutcome {
        let turn = self.state.turn;
        match self.classify(turn) {
            GameStatus::Checkmate => GameOutcome::Checkmate {
                winner: turn.opposite(),
            },
            GameStatus::Stalemate => GameOutcome::Stalemate,
            GameStatus::Normal | GameStatus::Check => match self.draw_reason() {
                Some(reason) => GameOutcome::Draw(reason),
                None => GameOutcome::Ongoing,
            },
        }
    }
}
