use super::super::{Board, Color, Move, MoveList, Position};

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// Cast a ray along each direction until it leaves the board or hits a
    /// piece. An enemy piece ends the ray as a capture; a friendly one ends it
    /// without a move.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Position,
        color: Color,
        directions: &[(i8, i8)],
    ) -> MoveList {
        let mut moves = MoveList::new();
        for &(d_rank, d_file) in directions {
            let mut current = from;
            while let Some(to) = current.offset(d_rank, d_file) {
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(target) => {
                        if target.color() != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, PieceType};

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    fn ends(moves: &MoveList) -> Vec<String> {
        let mut ends: Vec<String> = moves.iter().map(|m| m.end().to_string()).collect();
        ends.sort();
        ends
    }

    #[test]
    fn test_rook_open_board() {
        let board = BoardBuilder::new()
            .piece(pos("d4"), Color::White, PieceType::Rook)
            .build();
        let moves = board.generate_sliding_moves(pos("d4"), Color::White, &ROOK_DIRECTIONS);
        assert_eq!(moves.len(), 14);
    }

    #[test]
    fn test_queen_in_corner() {
        let board = BoardBuilder::new()
            .piece(pos("a1"), Color::White, PieceType::Queen)
            .build();
        let moves = board.generate_sliding_moves(pos("a1"), Color::White, &QUEEN_DIRECTIONS);
        assert_eq!(moves.len(), 21);
    }

    #[test]
    fn test_ray_stops_at_first_piece() {
        let board = BoardBuilder::new()
            .piece(pos("a1"), Color::White, PieceType::Rook)
            .piece(pos("a4"), Color::Black, PieceType::Pawn)
            .piece(pos("c1"), Color::White, PieceType::Knight)
            .build();
        let moves = board.generate_sliding_moves(pos("a1"), Color::White, &ROOK_DIRECTIONS);
        assert_eq!(ends(&moves), vec!["a2", "a3", "a4", "b1"]);
    }

    #[test]
    fn test_bishop_boxed_in() {
        let board = BoardBuilder::starting_position().build();
        let moves = board.generate_sliding_moves(pos("c1"), Color::White, &BISHOP_DIRECTIONS);
        assert!(moves.is_empty());
    }
}
