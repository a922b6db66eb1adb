use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Move, Piece, PieceType, Position};

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// An 8x8 grid of optional pieces.
///
/// The board performs no rule checking; legality lives in [`crate::Game`].
/// `Clone` produces a fully independent copy, which is what legality
/// simulation relies on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    /// Indexed `[rank - 1][file - 1]`.
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Board in the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// Board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Clear the board and set up the standard starting position.
    pub fn reset(&mut self) {
        self.squares = [[None; 8]; 8];
        for (file, &kind) in (1u8..).zip(BACK_RANK.iter()) {
            self.put(1, file, Piece::new(Color::White, kind));
            self.put(2, file, Piece::new(Color::White, PieceType::Pawn));
            self.put(7, file, Piece::new(Color::Black, PieceType::Pawn));
            self.put(8, file, Piece::new(Color::Black, kind));
        }
    }

    fn put(&mut self, rank: u8, file: u8, piece: Piece) {
        self.squares[(rank - 1) as usize][(file - 1) as usize] = Some(piece);
    }

    /// The piece on `pos`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.row_index()][pos.col_index()]
    }

    /// Put `piece` on `pos`, replacing whatever was there. `None` clears the square.
    #[inline]
    pub fn place_piece(&mut self, pos: Position, piece: Option<Piece>) {
        self.squares[pos.row_index()][pos.col_index()] = piece;
    }

    /// Take the piece off `pos`, returning it.
    #[inline]
    pub fn remove_piece(&mut self, pos: Position) -> Option<Piece> {
        self.squares[pos.row_index()][pos.col_index()].take()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    /// Occupied squares in rank-major order (a1, b1, ..., h8).
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    /// Occupied squares holding a piece of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    /// First square (rank-major) holding `color`'s king.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Position> {
        let king = Piece::new(color, PieceType::King);
        self.pieces()
            .find(|&(_, piece)| piece == king)
            .map(|(pos, _)| pos)
    }

    /// Apply `mv` without any rule checking.
    ///
    /// The mover lands on `end` (as the promotion kind, if one is given) and
    /// `start` is cleared. Returns whatever stood on `end` before. A move
    /// from an empty square leaves the board untouched.
    pub fn apply_move(&mut self, mv: &Move) -> Option<Piece> {
        let mover = self.piece_at(mv.start())?;
        let landed = match mv.promotion() {
            Some(kind) => Piece::new(mover.color(), kind),
            None => mover,
        };
        let captured = self.piece_at(mv.end());
        self.place_piece(mv.end(), Some(landed));
        self.place_piece(mv.start(), None);
        captured
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Rank 8 at the top, White uppercase, empty squares as '.'.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = self.squares[rank][file].map_or('.', Piece::to_fen_char);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position_layout() {
        let board = Board::new();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(
            board.piece_at(pos("e1")),
            Some(Piece::new(Color::White, PieceType::King))
        );
        assert_eq!(
            board.piece_at(pos("d8")),
            Some(Piece::new(Color::Black, PieceType::Queen))
        );
        assert_eq!(
            board.piece_at(pos("c7")),
            Some(Piece::new(Color::Black, PieceType::Pawn))
        );
        assert!(board.is_empty(pos("e4")));
    }

    #[test]
    fn test_place_none_clears() {
        let mut board = Board::new();
        board.place_piece(pos("a1"), None);
        assert!(board.is_empty(pos("a1")));
        assert_eq!(board.remove_piece(pos("b1")).map(Piece::piece_type), Some(PieceType::Knight));
        assert!(board.is_empty(pos("b1")));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Board::new();
        let mut copy = original.clone();
        copy.place_piece(pos("e2"), None);
        copy.place_piece(pos("e4"), Some(Piece::new(Color::White, PieceType::Pawn)));
        assert!(original.is_empty(pos("e4")));
        assert!(original.piece_at(pos("e2")).is_some());
        assert_ne!(original, copy);
    }

    #[test]
    fn test_find_king() {
        let board = Board::new();
        assert_eq!(board.find_king(Color::White), Some(pos("e1")));
        assert_eq!(board.find_king(Color::Black), Some(pos("e8")));
        assert_eq!(Board::empty().find_king(Color::White), None);
    }

    #[test]
    fn test_apply_move_substitutes_promotion() {
        let mut board = Board::empty();
        board.place_piece(pos("b7"), Some(Piece::new(Color::White, PieceType::Pawn)));
        board.place_piece(pos("a8"), Some(Piece::new(Color::Black, PieceType::Rook)));
        let captured =
            board.apply_move(&Move::with_promotion(pos("b7"), pos("a8"), PieceType::Knight));
        assert_eq!(captured, Some(Piece::new(Color::Black, PieceType::Rook)));
        assert_eq!(
            board.piece_at(pos("a8")),
            Some(Piece::new(Color::White, PieceType::Knight))
        );
        assert!(board.is_empty(pos("b7")));
    }

    #[test]
    fn test_display_diagram() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8 rnbqkbnr");
        assert_eq!(lines[7], "1 RNBQKBNR");
        assert_eq!(lines[8], "  abcdefgh");
    }
}
