//! Stateful game engine
//!
//! Wraps the pure predicates of [`crate::rules`] with the state that changes
//! over a game: whose turn it is, the move history, the half-move clock and
//! the positions seen so far.
//!
//! # Module Structure
//!
//! - `board_engine` - [`BoardEngine`], the public entry point
//! - `make_unmake` - executing a move and its exact inverse
//! - `history` - accepted moves and their undo records
//! - `outcome` - the three-way result of a move attempt
//! - `game_over` - check/mate/stalemate status and game outcome

pub mod board_engine;
pub mod game_over;
pub mod history;
pub mod make_unmake;
pub mod outcome;


pub use board_engine::BoardEngine;
pub use game_over::{GameOutcome, GameStatus};
pub use history::{MoveHistory, MoveRecord};
pub use make_unmake::MoveUndo;
pub use outcome::MoveOutcome;
