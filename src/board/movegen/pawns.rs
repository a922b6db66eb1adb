use super::super::{Board, Color, Move, MoveList, PieceType, Position};

impl Board {
    /// Pushes (single, and double from the start rank when both squares are
    /// empty) plus diagonal captures. Anything landing on the last rank is
    /// expanded into one move per promotion choice.
    pub(crate) fn generate_pawn_moves(&self, from: Position, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                push_pawn_move(&mut moves, from, one, color);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            push_pawn_move(&mut moves, from, two, color);
                        }
                    }
                }
            }
        }

        for d_file in [-1, 1] {
            let Some(target) = from.offset(dir, d_file) else {
                continue;
            };
            if let Some(victim) = self.piece_at(target) {
                if victim.color() != color {
                    push_pawn_move(&mut moves, from, target, color);
                }
            }
        }

        moves
    }
}

fn push_pawn_move(moves: &mut MoveList, from: Position, to: Position, color: Color) {
    if to.rank() == color.pawn_promotion_rank() {
        for kind in PieceType::PROMOTIONS {
            moves.push(Move::with_promotion(from, to, kind));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_initial_double_step() {
        let board = Board::new();
        let moves = board.generate_pawn_moves(pos("e2"), Color::White);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::new(pos("e2"), pos("e3"))));
        assert!(moves.contains(&Move::new(pos("e2"), pos("e4"))));

        let moves = board.generate_pawn_moves(pos("d7"), Color::Black);
        assert!(moves.contains(&Move::new(pos("d7"), pos("d5"))));
    }

    #[test]
    fn test_blocked_first_square_suppresses_double_step() {
        let board = BoardBuilder::new()
            .piece(pos("c2"), Color::White, PieceType::Pawn)
            .piece(pos("c3"), Color::Black, PieceType::Knight)
            .build();
        assert!(board.generate_pawn_moves(pos("c2"), Color::White).is_empty());
    }

    #[test]
    fn test_blocked_second_square() {
        let board = BoardBuilder::new()
            .piece(pos("c7"), Color::Black, PieceType::Pawn)
            .piece(pos("c5"), Color::White, PieceType::Bishop)
            .build();
        let moves = board.generate_pawn_moves(pos("c7"), Color::Black);
        assert_eq!(moves.as_slice(), &[Move::new(pos("c7"), pos("c6"))]);
    }

    #[test]
    fn test_no_double_step_off_start_rank() {
        let board = BoardBuilder::new()
            .piece(pos("f3"), Color::White, PieceType::Pawn)
            .build();
        let moves = board.generate_pawn_moves(pos("f3"), Color::White);
        assert_eq!(moves.as_slice(), &[Move::new(pos("f3"), pos("f4"))]);
    }

    #[test]
    fn test_diagonals_only_capture_enemies() {
        let board = BoardBuilder::new()
            .piece(pos("d4"), Color::White, PieceType::Pawn)
            .piece(pos("c5"), Color::Black, PieceType::Rook)
            .piece(pos("e5"), Color::White, PieceType::Rook)
            .piece(pos("d5"), Color::Black, PieceType::Pawn)
            .build();
        let moves = board.generate_pawn_moves(pos("d4"), Color::White);
        assert_eq!(moves.as_slice(), &[Move::new(pos("d4"), pos("c5"))]);
    }

    #[test]
    fn test_promotion_expands_pushes_and_captures() {
        let board = BoardBuilder::new()
            .piece(pos("b2"), Color::Black, PieceType::Pawn)
            .piece(pos("a1"), Color::White, PieceType::Knight)
            .build();
        let moves = board.generate_pawn_moves(pos("b2"), Color::Black);
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|m| m.is_promotion()));
        for kind in PieceType::PROMOTIONS {
            assert!(moves.contains(&Move::with_promotion(pos("b2"), pos("b1"), kind)));
            assert!(moves.contains(&Move::with_promotion(pos("b2"), pos("a1"), kind)));
        }
        assert!(!moves.contains(&Move::new(pos("b2"), pos("b1"))));
    }
}
