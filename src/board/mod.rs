//! Board representation and pseudo-legal move generation.
//!
//! A [`Board`] is a plain 8x8 grid of optional pieces. Each [`Piece`] knows
//! how to generate its own pseudo-legal moves against a board; turning those
//! into legal moves is the job of [`crate::Game`].
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Position};
//!
//! let board = Board::new();
//! let e2 = Position::new(2, 5).unwrap();
//! let pawn = board.piece_at(e2).unwrap();
//! assert_eq!(pawn.pseudo_legal_moves(&board, e2).len(), 2);
//! ```

mod builder;
mod error;
mod fen;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, MoveParseError, PositionError};
pub use fen::STARTING_PLACEMENT;
pub use state::Board;
pub use types::{Color, Move, MoveList, MoveListIntoIter, Piece, PieceType, Position};

pub(crate) use types::MAX_PIECE_MOVES;
