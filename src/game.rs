//! Game state: one board plus the side to move.
//!
//! Legal moves are found by simulation. Each pseudo-legal candidate is played
//! on a copy of the board and kept only if the mover's king is not attacked
//! afterwards. Checkmate and stalemate are queries, not states; a finished
//! game still accepts calls.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, FenError, Move, MoveError, MoveList, Position};

/// Outcome of [`Game::status`] for one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// Not in check, with at least one legal move
    Ongoing,
    /// In check, with at least one legal move
    Check,
    /// In check, with no legal move
    Checkmate,
    /// Not in check, with no legal move
    Stalemate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(text)
    }
}

/// A game in progress.
///
/// Owns its board exclusively. All mutation goes through [`Game::make_move`]
/// or the restore setters [`Game::set_board`] and [`Game::set_team_turn`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Game {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            turn: Color::White,
        }
    }

    /// Game over an arbitrary board with `turn` to move.
    #[must_use]
    pub fn with_board(board: Board, turn: Color) -> Self {
        Game { board, turn }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the whole board, e.g. when restoring a saved game.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// The side to move.
    #[must_use]
    pub fn team_turn(&self) -> Color {
        self.turn
    }

    pub fn set_team_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    /// Legal moves for the piece on `pos`.
    ///
    /// Returns `None` when the square is empty. `Some` with an empty list
    /// means a piece is there but cannot move. The side to move is not
    /// consulted.
    #[must_use]
    pub fn valid_moves(&self, pos: Position) -> Option<MoveList> {
        let piece = self.board.piece_at(pos)?;
        let mut moves = piece.pseudo_legal_moves(&self.board, pos);
        moves.retain(|mv| {
            let mut scratch = self.board.clone();
            scratch.apply_move(mv);
            !scratch.is_in_check(piece.color())
        });

        #[cfg(feature = "logging")]
        log::trace!("{} legal moves for {piece} on {pos}", moves.len());

        Some(moves)
    }

    /// Play `mv` for the side to move.
    ///
    /// On success the piece (or its promotion) lands on the end square, the
    /// start square is cleared and the turn passes. On error nothing changes.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if let Err(err) = self.check_move(&mv) {
            #[cfg(feature = "logging")]
            log::debug!("rejected {mv}: {err}");
            return Err(err);
        }

        self.board.apply_move(&mv);
        self.turn = self.turn.opponent();

        #[cfg(feature = "logging")]
        log::debug!("applied {mv}; {} to move", self.turn);

        Ok(())
    }

    fn check_move(&self, mv: &Move) -> Result<(), MoveError> {
        let start = mv.start();
        let piece = self
            .board
            .piece_at(start)
            .ok_or(MoveError::NoPieceAtStart { start })?;
        if piece.color() != self.turn {
            return Err(MoveError::OutOfTurn {
                start,
                expected: self.turn,
                found: piece.color(),
            });
        }
        match self.valid_moves(start) {
            Some(legal) if legal.contains(mv) => Ok(()),
            _ => Err(MoveError::IllegalMove { mv: *mv }),
        }
    }

    /// Returns true if `color`'s king is attacked. A side without a king is
    /// never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    /// In check with no legal move.
    #[must_use]
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_any_valid_move(color)
    }

    /// Not in check, but no legal move.
    #[must_use]
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_any_valid_move(color)
    }

    /// Check, checkmate and stalemate folded into one query.
    #[must_use]
    pub fn status(&self, color: Color) -> GameStatus {
        match (self.is_in_check(color), self.has_any_valid_move(color)) {
            (false, true) => GameStatus::Ongoing,
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
        }
    }

    /// Returns true if any piece of `color` has at least one legal move.
    #[must_use]
    pub fn has_any_valid_move(&self, color: Color) -> bool {
        self.board
            .pieces_of(color)
            .any(|(pos, _)| self.valid_moves(pos).is_some_and(|moves| !moves.is_empty()))
    }

    /// Every legal move of `color`, square by square from a1 to h8.
    #[must_use]
    pub fn all_valid_moves(&self, color: Color) -> Vec<Move> {
        self.board
            .pieces_of(color)
            .filter_map(|(pos, _)| self.valid_moves(pos))
            .flatten()
            .collect()
    }

    /// Count the leaf nodes of the legal-move tree `depth` plies deep.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.all_valid_moves(self.turn);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let mut child = self.clone();
            child.board.apply_move(&mv);
            child.turn = child.turn.opponent();
            nodes += child.perft(depth - 1);
        }
        nodes
    }

    /// Parse the first two FEN fields (placement and side to move).
    ///
    /// Any further fields are ignored.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut parts = fen.split_whitespace();
        let board = Board::try_from_fen_placement(parts.next().unwrap_or(""))?;
        let turn = match parts.next() {
            Some("w") => Color::White,
            Some("b") => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.unwrap_or("").to_string(),
                })
            }
        };
        Ok(Game { board, turn })
    }

    /// Parse the first two FEN fields.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Placement and side to move, e.g. "8/8/8/8/8/8/8/4K3 w".
    #[must_use]
    pub fn to_fen(&self) -> String {
        let side = match self.turn {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!("{} {side}", self.board.to_fen_placement())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
