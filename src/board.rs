//! Board grid
//!
//! An 8x8 array of `Option<Piece>` indexed by [`Square::index`]. The grid
//! itself enforces "one piece per square"; "at most one king per colour" is
//! the caller's responsibility when building custom positions.
//!
//! # Layout
//!
//! - Index 0 = a1 (rank 0, file 0)
//! - Index 7 = h1 (rank 0, file 7)
//! - Index 56 = a8 (rank 7, file 0)
//! - Index 63 = h8 (rank 7, file 7)

use crate::constants::{BACK_RANK, PAWN_RANK};
use crate::error::PositionError;
use crate::types::{Piece, PieceColor, PieceType, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Serialized as a flat array of 64 squares in index order
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<Piece>>", into = "Vec<Option<Piece>>")]
pub struct Board {
    squares: Vec<Option<Piece>>,
}

impl TryFrom<Vec<Option<Piece>>> for Board {
    type Error = PositionError;

    fn try_from(squares: Vec<Option<Piece>>) -> Result<Self, Self::Error> {
        if squares.len() != 64 {
            return Err(PositionError::WrongSquareCount(squares.len()));
        }
        Ok(Board { squares })
    }
}

impl From<Board> for Vec<Option<Piece>> {
    fn from(board: Board) -> Self {
        board.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Board with no pieces
    pub fn empty() -> Self {
        Board {
            squares: vec![None; 64],
        }
    }

    /// Standard starting position
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for file in 0..8u8 {
            let idx = file as usize;
            for color in [PieceColor::White, PieceColor::Black] {
                board.set(
                    Square::new(file, color.home_rank()),
                    Some(Piece::new(color, BACK_RANK[idx])),
                );
                board.set(
                    Square::new(file, color.pawn_rank()),
                    Some(Piece::new(color, PAWN_RANK[idx])),
                );
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index()] = piece;
    }

    /// Remove and return the piece on `square`
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Colour of the piece on `square`, `None` if empty
    #[inline]
    pub fn color_at(&self, square: Square) -> Option<PieceColor> {
        self.get(square).map(|p| p.color)
    }

    /// Builder-style placement for test and puzzle setups
    pub fn with(mut self, square: Square, piece: Piece) -> Self {
        self.set(square, Some(piece));
        self
    }

    /// All occupied squares with their pieces, in index order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, p)| Some((Square::from_index(i)?, (*p)?)))
    }

    /// Location of `color`'s king, if it has one
    pub fn find_king(&self, color: PieceColor) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.color == color && p.piece_type == PieceType::King)
            .map(|(sq, _)| sq)
    }

    /// Count total pieces on board
    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|p| p.is_some()).count()
    }
}

/// ASCII diagram, rank 8 at the top, used in trace logs
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            let row: Vec<String> = (0..8u8)
                .map(|file| {
                    self.get(Square::new(file, rank))
                        .map_or('.', Piece::symbol)
                        .to_string()
                })
                .collect();
            writeln!(f, "{} {}", rank + 1, row.join(" "))?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_layout() {
        let board = Board::starting();
        assert_eq!(board.piece_count(), 32);

        for file in 0..8 {
            assert_eq!(
                board.get(Square::new(file, 1)),
                Some(Piece::new(PieceColor::White, PieceType::Pawn))
            );
            assert_eq!(
                board.get(Square::new(file, 6)),
                Some(Piece::new(PieceColor::Black, PieceType::Pawn))
            );
            for rank in 2..6 {
                assert!(board.is_empty(Square::new(file, rank)));
            }
        }

        assert_eq!(board.find_king(PieceColor::White), Square::from_algebraic("e1"));
        assert_eq!(board.find_king(PieceColor::Black), Square::from_algebraic("e8"));
        assert_eq!(
            board.get(Square::from_algebraic("d8").unwrap()),
            Some(Piece::new(PieceColor::Black, PieceType::Queen))
        );
        assert_eq!(
            board.get(Square::from_algebraic("g1").unwrap()),
            Some(Piece::new(PieceColor::White, PieceType::Knight))
        );
    }

    #[test]
    fn test_take_clears_square() {
        let e2 = Square::from_algebraic("e2").unwrap();
        let mut board = Board::starting();

        let pawn = board.take(e2);
        assert_eq!(pawn, Some(Piece::new(PieceColor::White, PieceType::Pawn)));
        assert!(board.is_empty(e2));
        assert_eq!(board.piece_count(), 31);
        assert_eq!(board.take(e2), None);
    }

    #[test]
    fn test_find_king_missing() {
        let board = Board::empty().with(
            Square::new(0, 0),
            Piece::new(PieceColor::White, PieceType::King),
        );
        assert_eq!(board.find_king(PieceColor::White), Some(Square::new(0, 0)));
        assert_eq!(board.find_king(PieceColor::Black), None);
    }

    #[test]
    fn test_deserialize_requires_64_squares() {
        let board = Board::starting();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);

        let short = serde_json::from_str::<Board>("[]").unwrap_err();
        assert!(short.to_string().contains("expected 64"), "{}", short);

        let long = format!("[{}]", vec!["null"; 65].join(","));
        assert!(serde_json::from_str::<Board>(&long).is_err());
    }

    #[test]
    fn test_display_diagram() {
        let text = Board::starting().to_string();
        let first = text.lines().next().unwrap();
        assert_eq!(first, "8 r n b q k b n r");
        assert!(text.ends_with("  a b c d e f g h"));
    }
}
