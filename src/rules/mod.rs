//! Chess rules module - pure game logic
//!
//! Move validation, attack detection and draw detection as pure functions
//! over a [`BoardState`]. Nothing in here mutates state; the stateful side
//! lives in [`crate::engine`].
//!
//! # Module Structure
//!
//! - `board_state` - the position value every predicate reads
//! - `piece_moves` - movement rules for each piece type, castling, en passant
//! - `attack` - square attack queries and check detection
//! - `draw` - insufficient material, 75-move rule, fivefold repetition

pub mod attack;
pub mod board_state;
pub mod draw;
pub mod piece_moves;


pub use attack::{is_in_check, is_square_attacked};
pub use board_state::BoardState;
pub use draw::DrawReason;
pub use piece_moves::{castling_side, get_possible_moves, is_valid_move};
