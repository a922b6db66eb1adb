//! FEN piece placement ("rnbqkbnr/pppppppp/8/...").
//!
//! Only the placement field is handled here. Side to move is read and written
//! by [`crate::Game`]; castling, en passant and move clocks are not tracked.

use super::error::FenError;
use super::{Board, Piece, Position};

/// Placement field of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Parse a FEN piece-placement field.
    ///
    /// Returns an error if the field does not describe exactly 8 ranks of
    /// exactly 8 files, or contains an unknown piece character.
    pub fn try_from_fen_placement(placement: &str) -> Result<Self, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (rank, rank_str) in (1..=8u8).rev().zip(ranks) {
            let mut files = 0usize;
            for c in rank_str.chars() {
                if matches!(c, '1'..='8') {
                    files += (c as u8 - b'0') as usize;
                    continue;
                }
                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                files += 1;
                let pos = u8::try_from(files)
                    .ok()
                    .and_then(|file| Position::new(rank, file))
                    .ok_or(FenError::WrongFileCount { rank, files })?;
                board.place_piece(pos, Some(piece));
            }
            if files != 8 {
                return Err(FenError::WrongFileCount { rank, files });
            }
        }
        Ok(board)
    }

    /// Parse a FEN piece-placement field.
    ///
    /// # Panics
    /// Panics if the field is invalid. Use `try_from_fen_placement` for fallible parsing.
    #[must_use]
    pub fn from_fen_placement(placement: &str) -> Self {
        Self::try_from_fen_placement(placement).expect("Invalid FEN placement")
    }

    /// Write the board as a FEN piece-placement field.
    #[must_use]
    pub fn to_fen_placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (1..=8u8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 1..=8u8 {
                let piece = Position::new(rank, file).and_then(|pos| self.piece_at(pos));
                match piece {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, PieceType};

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_placement_matches_new() {
        assert_eq!(Board::from_fen_placement(STARTING_PLACEMENT), Board::new());
        assert_eq!(Board::new().to_fen_placement(), STARTING_PLACEMENT);
    }

    #[test]
    fn test_sparse_placement() {
        let board = Board::from_fen_placement("8/3P4/8/8/8/8/8/4K2r");
        assert_eq!(board.pieces().count(), 3);
        assert_eq!(
            board.piece_at(pos("d7")),
            Some(Piece::new(Color::White, PieceType::Pawn))
        );
        assert_eq!(
            board.piece_at(pos("h1")),
            Some(Piece::new(Color::Black, PieceType::Rook))
        );
        assert_eq!(board.to_fen_placement(), "8/3P4/8/8/8/8/8/4K2r");
    }

    #[test]
    fn test_rejects_wrong_rank_count() {
        assert_eq!(
            Board::try_from_fen_placement("8/8/8"),
            Err(FenError::WrongRankCount { found: 3 })
        );
    }

    #[test]
    fn test_rejects_wrong_file_count() {
        assert_eq!(
            Board::try_from_fen_placement("9/8/8/8/8/8/8/8"),
            Err(FenError::WrongFileCount { rank: 8, files: 9 })
        );
        assert_eq!(
            Board::try_from_fen_placement("8/8/8/8/8/8/8/7"),
            Err(FenError::WrongFileCount { rank: 1, files: 7 })
        );
        assert!(Board::try_from_fen_placement("8/8/8/8/8/8/8/8p").is_err());
    }

    #[test]
    fn test_rejects_bad_piece() {
        assert_eq!(
            Board::try_from_fen_placement("8/8/8/8/8/8/8/7x"),
            Err(FenError::InvalidPiece { char: 'x' })
        );
    }

    #[test]
    fn test_rejects_zero_skip() {
        assert_eq!(
            Board::try_from_fen_placement("08/8/8/8/8/8/8/8"),
            Err(FenError::InvalidPiece { char: '0' })
        );
        assert_eq!(
            Board::try_from_fen_placement("9/8/8/8/8/8/8/8"),
            Err(FenError::InvalidPiece { char: '9' })
        );
    }
}
