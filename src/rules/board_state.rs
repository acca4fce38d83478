//! Board state representation for move validation
//!
//! [`BoardState`] bundles everything the legality predicate reads: the grid,
//! the side to move, castling rights and the en-passant target. It is also
//! the key used for repetition detection, so two states compare equal exactly
//! when they are the same position under the rules.

use crate::board::Board;
use crate::types::{CastlingRights, Piece, PieceColor, Square};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct BoardState {
    pub board: Board,
    pub turn: PieceColor,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::starting()
    }
}

impl BoardState {
    /// Standard starting position, White to move, all rights, no target
    pub fn starting() -> Self {
        BoardState {
            board: Board::starting(),
            turn: PieceColor::White,
            castling: CastlingRights::all(),
            en_passant: None,
        }
    }

    /// Custom position with no castling rights and no en-passant target
    pub fn new(board: Board, turn: PieceColor) -> Self {
        BoardState {
            board,
            turn,
            castling: CastlingRights::none(),
            en_passant: None,
        }
    }

    pub fn with_castling_rights(mut self, castling: CastlingRights) -> Self {
        self.castling = castling;
        self
    }

    pub fn with_en_passant(mut self, target: Option<Square>) -> Self {
        self.en_passant = target;
        self
    }

    #[inline]
    pub fn is_empty(&self, pos: Square) -> bool {
        self.board.is_empty(pos)
    }

    #[inline]
    pub fn get_piece_color(&self, pos: Square) -> Option<PieceColor> {
        self.board.color_at(pos)
    }

    #[inline]
    pub fn get_piece_at(&self, pos: Square) -> Option<Piece> {
        self.board.get(pos)
    }
}
