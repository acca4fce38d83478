//! Terminal-state classification
//!
//! [`GameStatus`] answers "what is the situation for this colour" and follows
//! the move-availability definition: checkmate is check with no legal move,
//! stalemate is no legal move without check.
//!
//! [`GameOutcome`] is the game-level result. On top of mate and stalemate it
//! carries the automatic draws from [`crate::rules::draw`].

use crate::rules::DrawReason;
use crate::types::PieceColor;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Normal,
    Check,
    Checkmate,
    Stalemate,
}

/// How the game stands for the side to move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Ongoing,
    Checkmate { winner: PieceColor },
    Stalemate,
    Draw(DrawReason),
}

impl GameOutcome {
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }

    /// The mating side; `None` for draws and unfinished games
    pub fn winner(&self) -> Option<PieceColor> {
        match self {
            GameOutcome::Checkmate { winner } => Some(*winner),
            _ => None,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            GameOutcome::Ongoing => "Game in progress",
            GameOutcome::Checkmate {
                winner: PieceColor::White,
            } => "Checkmate! White wins!",
            GameOutcome::Checkmate {
                winner: PieceColor::Black,
            } => "Checkmate! Black wins!",
            GameOutcome::Stalemate => "Stalemate! Draw",
            GameOutcome::Draw(reason) => reason.message(),
        }
    }
}
