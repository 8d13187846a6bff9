use crate::board::board::Board;
use crate::board::board_utils::{step_targets, Coordinate, NUMBER_OF_TILES};
use crate::board::piece::Piece;
use crate::move_generation::chess_move::Move;
use crate::moves::piece_moves::push_jump_targets;

pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KNIGHT_TARGETS: [u64; NUMBER_OF_TILES] = generate_knight_targets();

#[inline]
pub const fn knight_targets(coordinate: Coordinate) -> u64 {
    KNIGHT_TARGETS[coordinate as usize]
}

const fn generate_knight_targets() -> [u64; NUMBER_OF_TILES] {
    let mut table = [0u64; NUMBER_OF_TILES];
    let mut sq = 0usize;

    while sq < NUMBER_OF_TILES {
        table[sq] = step_targets(sq as Coordinate, &KNIGHT_JUMPS);
        sq += 1;
    }

    table
}

pub fn generate_knight_moves(piece: &Piece, board: &Board, out: &mut Vec<Move>) {
    push_jump_targets(piece, board, knight_targets(piece.position), out);
}
