use crate::board::board::Board;
use crate::board::board_utils::{step_targets, Coordinate, NUMBER_OF_TILES};
use crate::board::piece::Piece;
use crate::move_generation::chess_move::Move;
use crate::moves::piece_moves::push_jump_targets;

pub const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const KING_TARGETS: [u64; NUMBER_OF_TILES] = generate_king_targets();

#[inline]
pub const fn king_targets(coordinate: Coordinate) -> u64 {
    KING_TARGETS[coordinate as usize]
}

const fn generate_king_targets() -> [u64; NUMBER_OF_TILES] {
    let mut table = [0u64; NUMBER_OF_TILES];
    let mut sq = 0usize;

    while sq < NUMBER_OF_TILES {
        table[sq] = step_targets(sq as Coordinate, &KING_STEPS);
        sq += 1;
    }

    table
}

/// One-square king steps. Castling is added by the player module once both
/// sides' standard moves are known.
pub fn generate_king_moves(piece: &Piece, board: &Board, out: &mut Vec<Move>) {
    push_jump_targets(piece, board, king_targets(piece.position), out);
}
