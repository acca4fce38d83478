//! Result of a move attempt

use crate::error::MoveError;
use crate::types::Piece;

/// Three-way result of [`super::BoardEngine::apply_move`]
///
/// A rejection and a quiet move are distinct variants, so "nothing happened"
/// can never be mistaken for "moved without capturing".
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was refused; the engine is unchanged
    Rejected(MoveError),
    /// Accepted, nothing captured
    Moved,
    /// Accepted, the given piece was removed from the board
    Captured(Piece),
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        !self.is_rejected()
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveOutcome::Rejected(_))
    }

    pub fn captured(&self) -> Option<Piece> {
        match self {
            MoveOutcome::Captured(piece) => Some(*piece),
            _ => None,
        }
    }

    /// `Ok(captured)` for accepted moves, so callers can use `?`
    pub fn into_result(self) -> Result<Option<Piece>, MoveError> {
        match self {
            MoveOutcome::Rejected(err) => Err(err),
            MoveOutcome::Moved => Ok(None),
            MoveOutcome::Captured(piece) => Ok(Some(piece)),
        }
    }
}
