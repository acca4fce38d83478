//! Automatic draw conditions
//!
//! Position-only checks live here. The half-move clock and the repetition
//! history are owned by the engine and passed in.

use super::board_state::BoardState;
use crate::board::Board;
use crate::constants::{FIVEFOLD_REPETITION, SEVENTY_FIVE_MOVE_PLIES};
use crate::types::PieceType;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum DrawReason {
    /// Neither side can possibly deliver mate
    InsufficientMaterial,
    /// 75 moves by each side without a capture or pawn move
    SeventyFiveMoveRule,
    /// The same position occurred five times
    FivefoldRepetition,
}

impl DrawReason {
    pub fn message(self) -> &'static str {
        match self {
            DrawReason::InsufficientMaterial => "Draw by insufficient material",
            DrawReason::SeventyFiveMoveRule => "Draw by 75-move rule",
            DrawReason::FivefoldRepetition => "Draw by fivefold repetition",
        }
    }
}

/// K v K, K+minor v K, or kings plus bishops that all share a square colour
pub fn is_insufficient_material(board: &Board) -> bool {
    let mut minors = Vec::new();
    for (square, piece) in board.pieces() {
        match piece.piece_type {
            PieceType::King => {}
            minor if minor.is_minor() => minors.push((square, minor)),
            _ => return false,
        }
    }

    match minors.as_slice() {
        [] | [_] => true,
        [(first, _), rest @ ..] => {
            minors.iter().all(|(_, t)| *t == PieceType::Bishop)
                && rest.iter().all(|(sq, _)| sq.is_light() == first.is_light())
        }
    }
}

pub fn is_seventy_five_move_draw(halfmove_clock: u32) -> bool {
    halfmove_clock >= SEVENTY_FIVE_MOVE_PLIES
}

/// How often `current` appears in `positions`
pub fn repetition_count(positions: &[BoardState], current: &BoardState) -> usize {
    positions.iter().filter(|p| *p == current).count()
}

pub fn is_fivefold_repetition(positions: &[BoardState], current: &BoardState) -> bool {
    repetition_count(positions, current) >= FIVEFOLD_REPETITION
}
