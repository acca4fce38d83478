//! Move making and unmaking
//!
//! [`make_move`] executes an already-validated move on a [`BoardState`] and
//! returns a [`MoveUndo`] describing its exact inverse. [`unmake_move`]
//! consumes that record to restore the prior state. The same pair backs the
//! check-safety rollback, legal-move enumeration and `BoardEngine::undo`.
//!
//! The side to move is not touched here; the engine flips it only once a move
//! has survived the safety test.

use crate::constants::KING_FILE;
use crate::rules::piece_moves::is_en_passant_capture;
use crate::rules::BoardState;
use crate::types::{CastleSide, CastlingRights, Piece, PieceType, Square};
use serde::{Deserialize, Serialize};

/// Information needed to undo a move
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveUndo {
    pub from: Square,
    pub to: Square,
    /// The piece as it stood on `from` (a pawn, for promotions)
    pub moved: Piece,
    /// Captured piece and the square it was taken from
    pub captured: Option<(Square, Piece)>,
    /// Rook relocation for castling, (from, to)
    pub rook_move: Option<(Square, Square)>,
    pub promoted_to: Option<PieceType>,
    pub prev_en_passant: Option<Square>,
    pub prev_castling: CastlingRights,
}

impl MoveUndo {
    pub fn is_castling(&self) -> bool {
        self.rook_move.is_some()
    }

    pub fn is_en_passant(&self) -> bool {
        self.captured.is_some_and(|(square, _)| square != self.to)
    }

    /// Pawn moves and captures reset the half-move clock
    pub fn is_irreversible(&self) -> bool {
        self.moved.piece_type == PieceType::Pawn || self.captured.is_some()
    }
}

/// Make a move on the board (returns undo information)
///
/// `piece` must stand on `from` and the move must already have passed
/// `is_valid_move`. Steps, in order:
/// resolve the capture (en passant takes the pawn behind the target),
/// snapshot and clear the en-passant target, move the piece, set a new target
/// after a double step, relocate the rook when castling, promote.
pub(crate) fn make_move(
    state: &mut BoardState,
    piece: Piece,
    from: Square,
    to: Square,
    promotion: Option<PieceType>,
) -> MoveUndo {
    let is_pawn = piece.piece_type == PieceType::Pawn;

    let en_passant =
        is_pawn && state.board.is_empty(to) && is_en_passant_capture(state, piece.color, to);
    let captured = if en_passant {
        let behind = Square::new(to.file.index(), from.rank.index());
        state.board.get(behind).map(|p| (behind, p))
    } else {
        state.board.get(to).map(|p| (to, p))
    };

    let prev_en_passant = state.en_passant.take();
    let prev_castling = state.castling;

    state.board.set(from, None);
    if let Some((square, _)) = captured {
        state.board.set(square, None);
    }
    state.board.set(to, Some(piece));

    let rank_delta = to.rank.index() as i8 - from.rank.index() as i8;
    if is_pawn && rank_delta.abs() == 2 {
        state.en_passant = from.offset(0, piece.color.forward());
    }

    let mut rook_move = None;
    let file_delta = to.file.index() as i8 - from.file.index() as i8;
    let is_castling = piece.piece_type == PieceType::King
        && from.file.index() == KING_FILE
        && file_delta.abs() == 2;
    if is_castling {
        let side = if file_delta > 0 {
            CastleSide::KingSide
        } else {
            CastleSide::QueenSide
        };
        let rank = from.rank.index();
        let rook_from = Square::new(side.rook_file(), rank);
        let rook_to = Square::new(side.rook_target_file(), rank);
        let rook = state.board.take(rook_from);
        state.board.set(rook_to, rook);
        rook_move = Some((rook_from, rook_to));
    }

    let mut promoted_to = None;
    if is_pawn && to.rank.index() == piece.color.promotion_rank() {
        let choice = PieceType::promotion_or_queen(promotion);
        state.board.set(to, Some(Piece::new(piece.color, choice)));
        promoted_to = Some(choice);
    }

    MoveUndo {
        from,
        to,
        moved: piece,
        captured,
        rook_move,
        promoted_to,
        prev_en_passant,
        prev_castling,
    }
}

/// Unmake a move on the board, restoring the exact prior state
pub(crate) fn unmake_move(state: &mut BoardState, undo: &MoveUndo) {
    state.board.set(undo.to, None);
    state.board.set(undo.from, Some(undo.moved));

    if let Some((rook_from, rook_to)) = undo.rook_move {
        let rook = state.board.take(rook_to);
        state.board.set(rook_from, rook);
    }

    if let Some((square, piece)) = undo.captured {
        state.board.set(square, Some(piece));
    }

    state.en_passant = undo.prev_en_passant;
    state.castling = undo.prev_castling;
}

/// Revoke castling rights after a move has been accepted
///
/// A king move clears both of its side's rights; a rook leaving its corner,
/// or a rook captured on its corner, clears that corner's right.
pub(crate) fn update_castling_rights(state: &mut BoardState, undo: &MoveUndo) {
    let mover = undo.moved;
    match mover.piece_type {
        PieceType::King => state.castling.revoke_all(mover.color),
        PieceType::Rook => revoke_corner(&mut state.castling, mover, undo.from),
        _ => {}
    }

    if let Some((square, captured)) = undo.captured {
        if captured.piece_type == PieceType::Rook {
            revoke_corner(&mut state.castling, captured, square);
        }
    }
}

fn revoke_corner(rights: &mut CastlingRights, rook: Piece, square: Square) {
    if square.rank.index() != rook.color.home_rank() {
        return;
    }
    if let Some(side) = CastleSide::from_rook_file(square.file.index()) {
        rights.revoke(rook.color, side);
    }
}
