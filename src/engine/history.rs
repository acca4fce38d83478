//! Move history tracking
//!
//! Maintains a chronological record of every accepted move. Each entry keeps
//! the public [`MoveRecord`] next to the [`MoveUndo`] that reverts it, so
//! `BoardEngine::undo` can walk back to the starting position.
//!
//! Index 0 = White's first move, index 1 = Black's reply, and so on.

use super::make_unmake::MoveUndo;
use crate::types::{Piece, PieceType, Square};
use serde::{Deserialize, Serialize};

/// Record of a single accepted move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The piece as it stood before moving (a pawn, for promotions)
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    /// Where the captured piece stood; differs from `to` only for en passant
    pub capture_square: Option<Square>,
    pub is_castling: bool,
    pub is_en_passant: bool,
    pub promotion: Option<PieceType>,
    /// The move left the opponent in check
    pub is_check: bool,
}

impl MoveRecord {
    pub(crate) fn from_undo(undo: &MoveUndo, is_check: bool) -> Self {
        MoveRecord {
            piece: undo.moved,
            from: undo.from,
            to: undo.to,
            captured: undo.captured.map(|(_, piece)| piece),
            capture_square: undo.captured.map(|(square, _)| square),
            is_castling: undo.is_castling(),
            is_en_passant: undo.is_en_passant(),
            promotion: undo.promoted_to,
            is_check,
        }
    }
}

/// How to reverse one accepted move
#[derive(Clone, Debug)]
pub(crate) struct HistoryEntry {
    pub undo: MoveUndo,
    pub prev_halfmove_clock: u32,
}

/// Accepted moves in play order, each paired with its undo entry
#[derive(Clone, Debug, Default)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
    entries: Vec<HistoryEntry>,
}

impl MoveHistory {
    pub(crate) fn push(&mut self, record: MoveRecord, entry: HistoryEntry) {
        self.records.push(record);
        self.entries.push(entry);
    }

    pub(crate) fn pop(&mut self) -> Option<(MoveRecord, HistoryEntry)> {
        Some((self.records.pop()?, self.entries.pop()?))
    }

    /// Get the most recent move, if any
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    /// All moves in the order they were played
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }
}
