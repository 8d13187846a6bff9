//! Per-piece pseudo-legal move dispatch.
//!
//! Pseudo-legal means geometry and occupancy only: a move produced here may
//! still leave its own king in check. That is filtered when the move is made.

use crate::board::board::Board;
use crate::board::board_utils::Coordinate;
use crate::board::piece::{Piece, PieceKind};
use crate::move_generation::chess_move::Move;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::sliding_moves::{generate_bishop_moves, generate_queen_moves, generate_rook_moves};

/// Appends every pseudo-legal move of `piece` on `board` to `out`.
/// Castling is not produced here.
pub fn generate_piece_moves(piece: &Piece, board: &Board, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(piece, board, out),
        PieceKind::Knight => generate_knight_moves(piece, board, out),
        PieceKind::Bishop => generate_bishop_moves(piece, board, out),
        PieceKind::Rook => generate_rook_moves(piece, board, out),
        PieceKind::Queen => generate_queen_moves(piece, board, out),
        PieceKind::King => generate_king_moves(piece, board, out),
    }
}

/// Pushes a quiet move onto an empty destination or a capture onto an enemy
/// one. Returns `false` when the destination is occupied, so sliders know to
/// stop.
#[inline]
pub(crate) fn push_step(piece: &Piece, board: &Board, destination: Coordinate, out: &mut Vec<Move>) -> bool {
    match board.piece_at(destination) {
        None => {
            out.push(Move::Normal {
                piece: *piece,
                destination,
            });
            true
        }
        Some(occupant) => {
            if occupant.alliance != piece.alliance {
                out.push(Move::Attacking {
                    piece: *piece,
                    destination,
                    attacked: *occupant,
                });
            }
            false
        }
    }
}

/// Pushes a step for every set bit of a precomputed jump mask.
#[inline]
pub(crate) fn push_jump_targets(piece: &Piece, board: &Board, mut targets: u64, out: &mut Vec<Move>) {
    while targets != 0 {
        let destination = targets.trailing_zeros() as Coordinate;
        targets &= targets - 1;
        push_step(piece, board, destination, out);
    }
}
