//! Error types for the rules engine
//!
//! Provides error types for move rejection, position snapshots and
//! configuration persistence.

use crate::types::{PieceColor, Square};
use thiserror::Error;

/// Reasons a move attempt is rejected
///
/// Every variant leaves the engine exactly as it was before the call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: Square },

    /// Piece does not belong to the side to move
    #[error("Piece at square {square} does not belong to {color}")]
    WrongPieceColor { square: Square, color: PieceColor },

    /// The piece cannot move that way
    #[error("Invalid move: from square {from} to square {to}")]
    IllegalMove { from: Square, to: Square },

    /// The move would leave the mover's own king attacked
    #[error("Move {from} to {to} leaves the king in check")]
    LeavesKingInCheck { from: Square, to: Square },
}

/// Coarse rejection category reported to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectKind {
    /// Nothing to move, or not that side's piece
    InvalidSelection,
    /// Fails piece rules or exposes the king
    IllegalMove,
}

impl MoveError {
    pub fn kind(&self) -> RejectKind {
        match self {
            MoveError::NoPieceAtSquare { .. } | MoveError::WrongPieceColor { .. } => {
                RejectKind::InvalidSelection
            }
            MoveError::IllegalMove { .. } | MoveError::LeavesKingInCheck { .. } => {
                RejectKind::IllegalMove
            }
        }
    }
}

/// Rejected coordinates or board snapshots
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    #[error("File index {0} is off the board")]
    FileOutOfRange(u8),

    #[error("Rank index {0} is off the board")]
    RankOutOfRange(u8),

    /// A board snapshot must hold exactly 64 squares
    #[error("Board has {0} squares, expected 64")]
    WrongSquareCount(usize),
}

/// Errors that can occur loading or saving [`crate::config::EngineConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file I/O error
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config serialization/deserialization error
    #[error("Config serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
