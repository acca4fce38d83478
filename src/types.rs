//! Type definitions for the rules engine
//!
//! Newtypes for board coordinates plus the piece, colour and castling-right
//! types shared by the `rules` and `engine` layers.
//!
//! # Coordinates
//!
//! - `File` 0..=7 maps to files a..h
//! - `Rank` 0..=7 maps to ranks 1..8 (rank 0 is White's home rank)
//! - Linear index is `rank * 8 + file`, so a1 = 0, h1 = 7, a8 = 56, h8 = 63

use crate::error::PositionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board coordinate representing a file (column) on the chessboard
///
/// Values range from 0 (file 'a') to 7 (file 'h'); the constructors and
/// deserialization refuse anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct File(u8);

impl File {
    /// Create a file from its index (0-7)
    pub fn new(index: u8) -> Option<Self> {
        (index < 8).then_some(File(index))
    }

    /// Create a file from a character ('a'..='h')
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Some(File(c as u8 - b'a')),
            _ => None,
        }
    }

    /// Convert file to character ('a'..='h')
    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Get the file index (0-7)
    pub fn index(self) -> u8 {
        self.0
    }
}

/// Board coordinate representing a rank (row) on the chessboard
///
/// Values range from 0 (rank 1) to 7 (rank 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    /// Create a rank from its index (0-7)
    pub fn new(index: u8) -> Option<Self> {
        (index < 8).then_some(Rank(index))
    }

    /// Create a rank from a number (1-8)
    pub fn from_number(n: u8) -> Option<Self> {
        if (1..=8).contains(&n) {
            Some(Rank(n - 1))
        } else {
            None
        }
    }

    /// Convert rank to number (1-8)
    pub fn to_number(self) -> u8 {
        self.0 + 1
    }

    /// Get the rank index (0-7)
    pub fn index(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for File {
    type Error = PositionError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        File::new(index).ok_or(PositionError::FileOutOfRange(index))
    }
}

impl From<File> for u8 {
    fn from(file: File) -> u8 {
        file.0
    }
}

impl TryFrom<u8> for Rank {
    type Error = PositionError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Rank::new(index).ok_or(PositionError::RankOutOfRange(index))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

/// Board square position (file, rank)
///
/// Both coordinates are always on the board: `File` and `Rank` can only be
/// built in range, so `index()` is always below 64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub file: File,
    pub rank: Rank,
}

impl Square {
    /// Create a square from file and rank indices
    ///
    /// # Panics
    ///
    /// Panics if either index is outside 0..=7. Use [`Square::try_new`] for
    /// coordinates that come from user input.
    pub fn new(file: u8, rank: u8) -> Self {
        assert!(file < 8 && rank < 8, "square ({file}, {rank}) is off the board");
        Square {
            file: File(file),
            rank: Rank(rank),
        }
    }

    /// Create a square, returning `None` when off the board
    pub fn try_new(file: u8, rank: u8) -> Option<Self> {
        (file < 8 && rank < 8).then(|| Square::new(file, rank))
    }

    /// Create a square from its name (e.g., "e4")
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file_char = chars.next()?;
        let rank_num = chars.next()?.to_digit(10)? as u8;
        if chars.next().is_some() {
            return None;
        }

        Some(Square {
            file: File::from_char(file_char)?,
            rank: Rank::from_number(rank_num)?,
        })
    }

    /// Linear index (0-63), `rank * 8 + file`
    #[inline]
    pub fn index(self) -> usize {
        self.rank.index() as usize * 8 + self.file.index() as usize
    }

    /// Inverse of [`Square::index`]
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < 64).then(|| Square::new((index % 8) as u8, (index / 8) as u8))
    }

    /// Iterate all 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(|i| Square::new((i % 8) as u8, (i / 8) as u8))
    }

    /// Square shifted by a (file, rank) delta, if still on the board
    #[inline]
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = self.file.index() as i8 + file_delta;
        let rank = self.rank.index() as i8 + rank_delta;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square::new(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// Whether this is a light square (used for bishop colour comparisons)
    pub fn is_light(self) -> bool {
        (self.file.index() + self.rank.index()) % 2 == 1
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file.to_char(), self.rank.to_number())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Rank delta of a pawn step
    pub fn forward(self) -> i8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => -1,
        }
    }

    /// Rank holding the king and rooks at the start
    pub fn home_rank(self) -> u8 {
        match self {
            PieceColor::White => 0,
            PieceColor::Black => 7,
        }
    }

    /// Rank pawns start on (and may double-step from)
    pub fn pawn_rank(self) -> u8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => 6,
        }
    }

    /// Rank on which pawns promote
    pub fn promotion_rank(self) -> u8 {
        self.opposite().home_rank()
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => f.write_str("White"),
            PieceColor::Black => f.write_str("Black"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Resolve a caller's promotion choice
    ///
    /// Only Queen, Rook, Bishop and Knight are valid; anything else (or no
    /// choice at all) promotes to a Queen.
    pub fn promotion_or_queen(choice: Option<PieceType>) -> PieceType {
        match choice {
            Some(p @ (PieceType::Queen | PieceType::Rook | PieceType::Bishop | PieceType::Knight)) => p,
            _ => PieceType::Queen,
        }
    }

    /// Bishops and knights
    pub fn is_minor(self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Knight)
    }
}

/// A coloured piece. Empty squares are `None` in the board grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Piece {
    pub color: PieceColor,
    pub piece_type: PieceType,
}

impl Piece {
    pub const fn new(color: PieceColor, piece_type: PieceType) -> Self {
        Piece { color, piece_type }
    }

    /// Single-letter symbol, uppercase for White (`K`, `q`, ...)
    pub fn symbol(self) -> char {
        let c = match self.piece_type {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };
        match self.color {
            PieceColor::White => c.to_ascii_uppercase(),
            PieceColor::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.color, self.piece_type)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// File the rook starts on
    pub fn rook_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// File the king lands on
    pub fn king_target_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// File the rook lands on
    pub fn rook_target_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Side whose rook starts on `file`, if any
    pub fn from_rook_file(file: u8) -> Option<Self> {
        match file {
            7 => Some(CastleSide::KingSide),
            0 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }
}

/// Castling rights for both sides
///
/// Rights only ever go from `true` to `false`; there is no API to re-enable
/// one short of constructing a new value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastlingRights {
    pub const fn all() -> Self {
        CastlingRights {
            white_king_side: true,
            white_queen_side: true,
            black_king_side: true,
            black_queen_side: true,
        }
    }

    pub const fn none() -> Self {
        CastlingRights {
            white_king_side: false,
            white_queen_side: false,
            black_king_side: false,
            black_queen_side: false,
        }
    }

    pub fn has(&self, color: PieceColor, side: CastleSide) -> bool {
        match (color, side) {
            (PieceColor::White, CastleSide::KingSide) => self.white_king_side,
            (PieceColor::White, CastleSide::QueenSide) => self.white_queen_side,
            (PieceColor::Black, CastleSide::KingSide) => self.black_king_side,
            (PieceColor::Black, CastleSide::QueenSide) => self.black_queen_side,
        }
    }

    pub fn revoke(&mut self, color: PieceColor, side: CastleSide) {
        match (color, side) {
            (PieceColor::White, CastleSide::KingSide) => self.white_king_side = false,
            (PieceColor::White, CastleSide::QueenSide) => self.white_queen_side = false,
            (PieceColor::Black, CastleSide::KingSide) => self.black_king_side = false,
            (PieceColor::Black, CastleSide::QueenSide) => self.black_queen_side = false,
        }
    }

    pub fn revoke_all(&mut self, color: PieceColor) {
        self.revoke(color, CastleSide::KingSide);
        self.revoke(color, CastleSide::QueenSide);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_to_char() {
        assert_eq!(File(0).to_char(), 'a');
        assert_eq!(File(4).to_char(), 'e');
        assert_eq!(File(7).to_char(), 'h');
        assert_eq!(File::from_char('i'), None);
    }

    #[test]
    fn test_rank_from_number() {
        assert_eq!(Rank::from_number(1), Some(Rank(0)));
        assert_eq!(Rank::from_number(8), Some(Rank(7)));
        assert_eq!(Rank::from_number(0), None);
        assert_eq!(Rank::from_number(9), None);
    }

    #[test]
    fn test_square_algebraic() {
        let square = Square::from_algebraic("e4").unwrap();
        assert_eq!(square.file.index(), 4);
        assert_eq!(square.rank.index(), 3);
        assert_eq!(square.to_string(), "e4");

        assert_eq!(Square::from_algebraic("a1").unwrap().index(), 0);
        assert_eq!(Square::from_algebraic("h8").unwrap().index(), 63);
        assert_eq!(Square::from_algebraic("e44"), None);
        assert_eq!(Square::from_algebraic("z1"), None);
    }

    #[test]
    fn test_square_index_roundtrip_and_offset() {
        for sq in Square::all() {
            assert_eq!(Square::from_index(sq.index()), Some(sq));
        }
        assert_eq!(Square::from_index(64), None);

        let a1 = Square::new(0, 0);
        assert_eq!(a1.offset(1, 2), Some(Square::new(1, 2)));
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(Square::new(7, 7).offset(0, 1), None);
        assert_eq!(Square::try_new(8, 0), None);
    }

    #[test]
    fn test_coordinates_stay_on_board() {
        assert_eq!(File::new(7), Some(File(7)));
        assert_eq!(File::new(8), None);
        assert_eq!(Rank::new(8), None);
        assert_eq!(File::try_from(9), Err(PositionError::FileOutOfRange(9)));
        assert_eq!(Rank::try_from(8), Err(PositionError::RankOutOfRange(8)));
        assert_eq!(Square::try_new(0, 8), None);
    }

    #[test]
    fn test_square_deserialize_rejects_off_board() {
        let e4 = Square::from_algebraic("e4").unwrap();
        let json = serde_json::to_string(&e4).unwrap();
        assert_eq!(json, r#"{"file":4,"rank":3}"#);
        assert_eq!(serde_json::from_str::<Square>(&json).unwrap(), e4);

        assert!(serde_json::from_str::<Square>(r#"{"file":9,"rank":9}"#).is_err());
        assert!(serde_json::from_str::<Square>(r#"{"file":8,"rank":0}"#).is_err());
        assert!(serde_json::from_str::<Square>(r#"{"file":0,"rank":8}"#).is_err());
    }

    #[test]
    fn test_square_colour() {
        assert!(!Square::from_algebraic("a1").unwrap().is_light());
        assert!(Square::from_algebraic("h1").unwrap().is_light());
        assert!(Square::from_algebraic("d1").unwrap().is_light());
    }

    #[test]
    fn test_promotion_choice_defaults_to_queen() {
        assert_eq!(PieceType::promotion_or_queen(None), PieceType::Queen);
        assert_eq!(PieceType::promotion_or_queen(Some(PieceType::King)), PieceType::Queen);
        assert_eq!(PieceType::promotion_or_queen(Some(PieceType::Pawn)), PieceType::Queen);
        assert_eq!(PieceType::promotion_or_queen(Some(PieceType::Knight)), PieceType::Knight);
    }

    #[test]
    fn test_castling_rights_revoke() {
        let mut rights = CastlingRights::all();
        rights.revoke(PieceColor::White, CastleSide::QueenSide);
        assert!(rights.has(PieceColor::White, CastleSide::KingSide));
        assert!(!rights.has(PieceColor::White, CastleSide::QueenSide));

        rights.revoke_all(PieceColor::Black);
        assert!(!rights.has(PieceColor::Black, CastleSide::KingSide));
        assert!(!rights.has(PieceColor::Black, CastleSide::QueenSide));
        assert_eq!(CastlingRights::default(), CastlingRights::all());
    }
}
