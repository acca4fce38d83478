//! Attack detection and check testing
//!
//! To check if a square is attacked, we iterate through all pieces of the
//! attacking colour and test whether any of them reaches the target square.
//! Worst case is a 64-square scan per query, which is fine at this scale.
//!
//! Attack geometry differs from move legality in two places: pawns attack
//! only diagonally (a forward push never attacks), and castling never
//! attacks. For an occupied king square both notions agree.

use super::board_state::BoardState;
use super::piece_moves::{
    deltas, is_valid_bishop_move, is_valid_king_move, is_valid_knight_move, is_valid_queen_move,
    is_valid_rook_move,
};
use crate::types::{Piece, PieceColor, PieceType, Square};

/// Check if a square is under attack by pieces of the specified colour
pub fn is_square_attacked(state: &BoardState, square: Square, by_color: PieceColor) -> bool {
    state
        .board
        .pieces()
        .filter(|(_, piece)| piece.color == by_color)
        .any(|(from, piece)| attacks(state, piece, from, square))
}

/// Whether `piece` standing on `from` attacks `target`
pub fn attacks(state: &BoardState, piece: Piece, from: Square, target: Square) -> bool {
    if from == target {
        return false;
    }

    match piece.piece_type {
        PieceType::Pawn => {
            let (dx, dy) = deltas(from, target);
            dx.abs() == 1 && dy == piece.color.forward()
        }
        PieceType::Knight => is_valid_knight_move(from, target),
        PieceType::Bishop => is_valid_bishop_move(from, target, state),
        PieceType::Rook => is_valid_rook_move(from, target, state),
        PieceType::Queen => is_valid_queen_move(from, target, state),
        PieceType::King => is_valid_king_move(from, target),
    }
}

/// Is `color`'s king attacked? A side without a king is never in check.
pub fn is_in_check(state: &BoardState, color: PieceColor) -> bool {
    state
        .board
        .find_king(color)
        .is_some_and(|king| is_square_attacked(state, king, color.opposite()))
}
