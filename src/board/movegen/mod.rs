//! Pseudo-legal move generation and attack detection.
//!
//! Generation here is blind to self-check: a pinned piece still reports its
//! full movement pattern. [`crate::Game::valid_moves`] filters the result.

mod jumpers;
mod pawns;
mod sliders;

use super::{Board, Color, MoveList, Piece, PieceType, Position};

pub(crate) use sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

impl Piece {
    /// Every destination this piece could reach from `from` on `board`,
    /// ignoring whether the move leaves its own king attacked.
    ///
    /// Computed fresh on each call. `board` is only read; whether `from`
    /// actually holds this piece is not checked.
    #[must_use]
    pub fn pseudo_legal_moves(&self, board: &Board, from: Position) -> MoveList {
        let color = self.color();
        match self.piece_type() {
            PieceType::Rook => board.generate_sliding_moves(from, color, &ROOK_DIRECTIONS),
            PieceType::Bishop => board.generate_sliding_moves(from, color, &BISHOP_DIRECTIONS),
            PieceType::Queen => board.generate_sliding_moves(from, color, &QUEEN_DIRECTIONS),
            PieceType::Knight => board.generate_knight_moves(from, color),
            PieceType::King => board.generate_king_moves(from, color),
            PieceType::Pawn => board.generate_pawn_moves(from, color),
        }
    }
}

impl Board {
    /// Returns true if any piece of `side` has a pseudo-legal move ending on `target`.
    ///
    /// For an occupied `target` this is the usual attack test. For an empty one
    /// it also counts pawn pushes, since those end on the square too.
    #[must_use]
    pub fn is_reachable_by(&self, target: Position, side: Color) -> bool {
        self.pieces_of(side).any(|(from, piece)| {
            piece
                .pseudo_legal_moves(self, from)
                .iter()
                .any(|mv| mv.end() == target)
        })
    }

    /// Returns true if `color`'s king is attacked by any opposing piece.
    ///
    /// A board without a king for `color` is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king) => self.is_reachable_by(king, color.opponent()),
            None => {
                #[cfg(feature = "logging")]
                log::trace!("no {color} king on board; treating as not in check");
                false
            }
        }
    }
}
