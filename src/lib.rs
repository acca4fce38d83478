//! Chess rules engine
//!
//! Decides move legality for a two-player chess game and tracks everything
//! the rules depend on: castling rights, the en-passant target, the side to
//! move, the half-move clock and the positions already seen.
//!
//! # Layout
//!
//! - [`types`] and [`board`] - squares, pieces and the 8x8 grid
//! - [`rules`] - pure predicates over a [`rules::BoardState`]
//! - [`engine`] - [`BoardEngine`], which applies, rejects and undoes moves
//! - [`config`] - castling rule variant and draw rules, persisted as JSON
//! - [`error`] - move rejection and configuration errors
//!
//! # Example
//!
//! ```
//! use chess_rules::{BoardEngine, GameOutcome, PieceColor, Square};
//!
//! let mut engine = BoardEngine::new_game();
//! let sq = |s| Square::from_algebraic(s).unwrap();
//!
//! for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
//!     assert!(engine.apply_move(sq(from), sq(to), None).is_accepted());
//! }
//!
//! assert_eq!(
//!     engine.outcome(),
//!     GameOutcome::Checkmate { winner: PieceColor::Black }
//! );
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod rules;
pub mod types;

pub use board::Board;
pub use config::{CastlingRule, DrawRules, EngineConfig};
pub use engine::{BoardEngine, GameOutcome, GameStatus, MoveOutcome, MoveRecord};
pub use error::{ConfigError, ConfigResult, MoveError, PositionError, RejectKind};
pub use rules::{BoardState, DrawReason};
pub use types::{CastleSide, CastlingRights, Piece, PieceColor, PieceType, Square};
