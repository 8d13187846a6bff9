//! Ray walkers for bishops, rooks and queens.
//!
//! Each ray is stepped in `(row, col)` space so that a step off an edge is
//! rejected before it can wrap onto the next row.

use crate::board::board::Board;
use crate::board::board_utils::offset;
use crate::board::piece::Piece;
use crate::move_generation::chess_move::Move;
use crate::moves::piece_moves::push_step;

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

pub fn generate_bishop_moves(piece: &Piece, board: &Board, out: &mut Vec<Move>) {
    slide(piece, board, &DIAGONAL_DIRECTIONS, out);
}

pub fn generate_rook_moves(piece: &Piece, board: &Board, out: &mut Vec<Move>) {
    slide(piece, board, &ORTHOGONAL_DIRECTIONS, out);
}

pub fn generate_queen_moves(piece: &Piece, board: &Board, out: &mut Vec<Move>) {
    slide(piece, board, &DIAGONAL_DIRECTIONS, out);
    slide(piece, board, &ORTHOGONAL_DIRECTIONS, out);
}

fn slide(piece: &Piece, board: &Board, directions: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(d_row, d_col) in directions {
        let mut current = piece.position;
        while let Some(next) = offset(current, d_row, d_col) {
            if !push_step(piece, board, next, out) {
                break;
            }
            current = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::alliance::Alliance;
    use crate::board::board::BoardBuilder;
    use crate::board::piece::PieceKind;

    fn board_with(pieces: &[Piece]) -> Board {
        let mut builder = BoardBuilder::new();
        builder
            .set_piece(Piece::new(PieceKind::King, Alliance::White, 63))
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, 56))
            .set_next_move_maker(Alliance::White);
        for piece in pieces {
            builder.set_piece(*piece);
        }
        builder.build().expect("position should build")
    }

    #[test]
    fn rook_on_open_board_reaches_fourteen_squares() {
        let rook = Piece::new(PieceKind::Rook, Alliance::White, 27);
        let board = board_with(&[rook]);
        let mut moves = Vec::new();
        generate_rook_moves(&rook, &board, &mut moves);
        assert_eq!(moves.len(), 14);
    }

    #[test]
    fn bishop_on_column_one_does_not_wrap() {
        let bishop = Piece::new(PieceKind::Bishop, Alliance::White, 24);
        let board = board_with(&[bishop]);
        let mut moves = Vec::new();
        generate_bishop_moves(&bishop, &board, &mut moves);
        // Row 4 column 1: three squares up-right, four squares down-right.
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|mv| mv.destination().map(|d| d % 8) != Some(7)));
    }

    #[test]
    fn rays_stop_at_the_first_occupied_square() {
        let queen = Piece::new(PieceKind::Queen, Alliance::White, 35);
        let blocker = Piece::new(PieceKind::Pawn, Alliance::White, 43);
        let target = Piece::new(PieceKind::Knight, Alliance::Black, 19);
        let board = board_with(&[queen, blocker, target]);
        let mut moves = Vec::new();
        generate_queen_moves(&queen, &board, &mut moves);

        assert!(!moves.iter().any(|mv| mv.destination() == Some(43)));
        assert!(!moves.iter().any(|mv| mv.destination() == Some(51)));
        assert!(moves.iter().any(|mv| mv.is_attack() && mv.destination() == Some(19)));
        assert!(!moves.iter().any(|mv| mv.destination() == Some(11)));
    }
}
