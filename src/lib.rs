//! Chess rules engine.
//!
//! Board representation, per-piece pseudo-legal move generation, legality
//! filtering against self-check, and check/checkmate/stalemate queries.
//! Castling, en passant and draw rules other than stalemate are not
//! implemented.
//!
//! # Example
//! ```
//! use chess_rules::{Color, Game, Move};
//!
//! let mut game = Game::new();
//! let e2e4: Move = "e2e4".parse().unwrap();
//! game.make_move(e2e4).unwrap();
//! assert_eq!(game.team_turn(), Color::Black);
//! assert!(!game.is_in_check(Color::Black));
//! ```

pub mod board;
pub mod game;

pub use board::{Board, Color, Move, MoveError, MoveList, Piece, PieceType, Position};
pub use game::{Game, GameStatus};
