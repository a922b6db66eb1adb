use super::super::{Board, Color, Move, MoveList, Position};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Position, color: Color) -> MoveList {
        self.generate_jump_moves(from, color, &KNIGHT_OFFSETS)
    }

    pub(crate) fn generate_king_moves(&self, from: Position, color: Color) -> MoveList {
        self.generate_jump_moves(from, color, &KING_OFFSETS)
    }

    /// Each offset is tried once; the destination must be on the board and
    /// free of friendly pieces.
    fn generate_jump_moves(&self, from: Position, color: Color, offsets: &[(i8, i8)]) -> MoveList {
        let mut moves = MoveList::new();
        for &(d_rank, d_file) in offsets {
            let Some(to) = from.offset(d_rank, d_file) else {
                continue;
            };
            match self.piece_at(to) {
                Some(target) if target.color() == color => {}
                _ => moves.push(Move::new(from, to)),
            }
        }
        moves
    }
}
