//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceType, Position};
//!
//! let e1 = Position::new(1, 5).unwrap();
//! let e8 = Position::new(8, 5).unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, Color::White, PieceType::King)
//!     .piece(e8, Color::Black, PieceType::Rook)
//!     .build();
//! assert!(board.is_in_check(Color::White));
//! ```

use super::{Board, Color, Piece, PieceType, Position};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub const fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
        }
    }

    /// Place a piece, replacing any piece already on that square.
    #[must_use]
    pub fn piece(mut self, pos: Position, color: Color, kind: PieceType) -> Self {
        self.board.place_piece(pos, Some(Piece::new(color, kind)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, pos: Position) -> Self {
        self.board.place_piece(pos, None);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}
