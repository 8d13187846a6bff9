use crate::board::board::Board;
use crate::board::board_utils::Coordinate;
use crate::move_generation::chess_move::Move;

/// Looks up a move by its endpoints among both sides' move lists.
///
/// Returns `Move::Null` when nothing connects `source` to `destination`.
/// Only the endpoints are compared, so the first listed match wins.
pub fn create_move(board: &Board, source: Coordinate, destination: Coordinate) -> Move {
    board
        .all_legal_moves()
        .find(|mv| mv.connects(source, destination))
        .copied()
        .unwrap_or(Move::Null)
}
