//! Engine constants
//!
//! Starting layout and the limits used by the automatic draw rules.

use crate::types::PieceType::{self, Bishop, King, Knight, Pawn, Queen, Rook};

/// Back rank from file a to file h, shared by both colours
pub const BACK_RANK: [PieceType; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

/// Pawns on the starting ranks
pub const PAWN_RANK: [PieceType; 8] = [Pawn; 8];

/// File the king starts on (e-file)
pub const KING_FILE: u8 = 4;

/// Half-moves without a capture or pawn move before the 75-move rule ends the game
pub const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Occurrences of the same position that end the game
pub const FIVEFOLD_REPETITION: usize = 5;
