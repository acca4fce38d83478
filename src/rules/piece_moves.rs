//! Chess piece movement rules
//!
//! Contains the rules for how each chess piece can move, including castling
//! and en passant. Pure functions with no side effects - easy to test.
//!
//! The predicates here do not look at whether the mover's own king ends up in
//! check; that is decided by simulating the move (see `engine::make_unmake`).

use super::attack::is_square_attacked;
use super::board_state::BoardState;
use crate::config::CastlingRule;
use crate::constants::KING_FILE;
use crate::types::{CastleSide, Piece, PieceColor, PieceType, Square};

/// Check if a move is valid for a given piece
///
/// Reads the board, castling rights and en-passant target from `state`. The
/// side to move is not consulted, so the same predicate serves check
/// detection for either colour.
pub fn is_valid_move(
    state: &BoardState,
    piece: Piece,
    from: Square,
    to: Square,
    castling_rule: CastlingRule,
) -> bool {
    // Can't move to the same square
    if from == to {
        return false;
    }

    // Can't capture your own pieces
    if state.get_piece_color(to) == Some(piece.color) {
        return false;
    }

    match piece.piece_type {
        PieceType::Pawn => is_valid_pawn_move(from, to, piece.color, state),
        PieceType::Knight => is_valid_knight_move(from, to),
        PieceType::Bishop => is_valid_bishop_move(from, to, state),
        PieceType::Rook => is_valid_rook_move(from, to, state),
        PieceType::Queen => is_valid_queen_move(from, to, state),
        PieceType::King => {
            is_valid_king_move(from, to)
                || castling_side(state, piece.color, from, to, castling_rule).is_some()
        }
    }
}

/// Get all pseudo-legal destinations for a piece
///
/// "Pseudo-legal" because moves that expose the mover's king are included.
pub fn get_possible_moves(
    state: &BoardState,
    piece: Piece,
    position: Square,
    castling_rule: CastlingRule,
) -> Vec<Square> {
    Square::all()
        .filter(|&to| is_valid_move(state, piece, position, to, castling_rule))
        .collect()
}

/// Which side a king move castles to, if it is a permitted castling move
///
/// Conditions:
/// - king on its home square, moving two files along the home rank
/// - the matching castling right is still held
/// - a friendly rook stands on that corner
/// - every square strictly between king and rook is empty
/// - the king is not currently in check
/// - under [`CastlingRule::Standard`], the squares the king crosses and lands
///   on are not attacked
pub fn castling_side(
    state: &BoardState,
    color: PieceColor,
    from: Square,
    to: Square,
    castling_rule: CastlingRule,
) -> Option<CastleSide> {
    let home = color.home_rank();
    if from != Square::new(KING_FILE, home) || to.rank.index() != home {
        return None;
    }

    let side = match to.file.index() as i8 - from.file.index() as i8 {
        2 => CastleSide::KingSide,
        -2 => CastleSide::QueenSide,
        _ => return None,
    };

    if !state.castling.has(color, side) {
        return None;
    }

    let rook_square = Square::new(side.rook_file(), home);
    if state.get_piece_at(rook_square) != Some(Piece::new(color, PieceType::Rook)) {
        return None;
    }

    let (low, high) = if side.rook_file() < KING_FILE {
        (side.rook_file(), KING_FILE)
    } else {
        (KING_FILE, side.rook_file())
    };
    if !(low + 1..high).all(|file| state.is_empty(Square::new(file, home))) {
        return None;
    }

    let enemy = color.opposite();
    if is_square_attacked(state, from, enemy) {
        return None;
    }

    if castling_rule == CastlingRule::Standard {
        let crossed = Square::new(side.rook_target_file(), home);
        if is_square_attacked(state, crossed, enemy) || is_square_attacked(state, to, enemy) {
            return None;
        }
    }

    Some(side)
}

fn is_valid_pawn_move(from: Square, to: Square, color: PieceColor, state: &BoardState) -> bool {
    let direction = color.forward();
    let (dx, dy) = deltas(from, to);

    // Forward move
    if dx == 0 && dy == direction {
        return state.is_empty(to);
    }

    // Double move from starting rank
    if dx == 0 && dy == 2 * direction && from.rank.index() == color.pawn_rank() {
        return match from.offset(0, direction) {
            Some(intermediate) => state.is_empty(intermediate) && state.is_empty(to),
            None => false,
        };
    }

    // Capture diagonally, or en passant onto the target square
    if dx.abs() == 1 && dy == direction {
        return match state.get_piece_color(to) {
            Some(target_color) => target_color != color,
            None => is_en_passant_capture(state, color, to),
        };
    }

    false
}

/// Whether a pawn of `color` landing on empty `to` captures en passant
///
/// The captured pawn sits on `to`'s file, one rank behind it from the
/// mover's point of view.
pub(crate) fn is_en_passant_capture(state: &BoardState, color: PieceColor, to: Square) -> bool {
    if state.en_passant != Some(to) {
        return false;
    }
    to.offset(0, -color.forward())
        .and_then(|sq| state.get_piece_at(sq))
        .is_some_and(|p| p == Piece::new(color.opposite(), PieceType::Pawn))
}

pub(crate) fn is_valid_knight_move(from: Square, to: Square) -> bool {
    let (dx, dy) = deltas(from, to);
    let (dx, dy) = (dx.abs(), dy.abs());
    (dx == 2 && dy == 1) || (dx == 1 && dy == 2)
}

pub(crate) fn is_valid_bishop_move(from: Square, to: Square, state: &BoardState) -> bool {
    let (dx, dy) = deltas(from, to);

    // Must move diagonally
    if dx.abs() != dy.abs() || dx == 0 {
        return false;
    }

    is_path_clear(from, to, state)
}

pub(crate) fn is_valid_rook_move(from: Square, to: Square, state: &BoardState) -> bool {
    // Must move horizontally or vertically
    if from.file != to.file && from.rank != to.rank {
        return false;
    }

    is_path_clear(from, to, state)
}

pub(crate) fn is_valid_queen_move(from: Square, to: Square, state: &BoardState) -> bool {
    is_valid_rook_move(from, to, state) || is_valid_bishop_move(from, to, state)
}

pub(crate) fn is_valid_king_move(from: Square, to: Square) -> bool {
    let (dx, dy) = deltas(from, to);
    from != to && dx.abs() <= 1 && dy.abs() <= 1
}

/// Every square strictly between `from` and `to` is empty
///
/// Callers guarantee the two squares share a rank, file or diagonal.
fn is_path_clear(from: Square, to: Square, state: &BoardState) -> bool {
    let (dx, dy) = deltas(from, to);
    let (step_x, step_y) = (dx.signum(), dy.signum());

    let mut current = from.offset(step_x, step_y);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !state.is_empty(square) {
            return false;
        }
        current = square.offset(step_x, step_y);
    }

    false
}

/// (file delta, rank delta) from `from` to `to`
#[inline]
pub(crate) fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.file.index() as i8 - from.file.index() as i8,
        to.rank.index() as i8 - from.rank.index() as i8,
    )
}
