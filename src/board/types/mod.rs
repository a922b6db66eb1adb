//! Core rule-engine types.
//!
//! - `Color`, `PieceType` and `Piece` - what stands on a square
//! - `Position` - a checked (rank, file) coordinate
//! - `Move` and `MoveList` - move representation

mod moves;
mod piece;
mod position;

pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceType};
pub use position::Position;

pub(crate) use moves::MAX_PIECE_MOVES;
