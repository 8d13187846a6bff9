//! Pawn pushes, jumps, diagonal captures, en passant and promotion.
//!
//! White pawns travel towards row 1 and Black pawns towards row 8. A pawn that
//! lands on its promotion row always becomes a queen.

use crate::board::alliance::Alliance;
use crate::board::board::Board;
use crate::board::board_utils::{offset, row_col, Coordinate};
use crate::board::piece::{Piece, PieceKind};
use crate::move_generation::chess_move::Move;

pub const PAWN_CAPTURE_COLUMNS: [i8; 2] = [-1, 1];

pub fn generate_pawn_moves(piece: &Piece, board: &Board, out: &mut Vec<Move>) {
    let direction = piece.alliance.direction();
    let (row, _) = row_col(piece.position);

    if let Some(step) = offset(piece.position, direction, 0) {
        if board.piece_at(step).is_none() {
            push_pawn_advance(piece, step, None, out);

            if piece.first_move && row == piece.alliance.pawn_start_row() {
                if let Some(jump) = offset(step, direction, 0) {
                    if board.piece_at(jump).is_none() {
                        out.push(Move::PawnJump {
                            piece: *piece,
                            destination: jump,
                        });
                    }
                }
            }
        }
    }

    for d_col in PAWN_CAPTURE_COLUMNS {
        let Some(destination) = offset(piece.position, direction, d_col) else {
            continue;
        };
        match board.piece_at(destination) {
            Some(occupant) if occupant.alliance != piece.alliance => {
                push_pawn_advance(piece, destination, Some(*occupant), out);
            }
            Some(_) => {}
            None => {
                if let Some(victim) = en_passant_victim(piece, board, d_col) {
                    out.push(Move::PawnEnPassantAttack {
                        piece: *piece,
                        destination,
                        attacked: victim,
                    });
                }
            }
        }
    }
}

/// True when a pawn of `attacker` could capture diagonally onto `coordinate`.
/// Occupancy of `coordinate` is not considered.
pub fn pawn_attacks_tile(board: &Board, coordinate: Coordinate, attacker: Alliance) -> bool {
    let back = -attacker.direction();
    PAWN_CAPTURE_COLUMNS.iter().any(|&d_col| {
        offset(coordinate, back, d_col)
            .and_then(|source| board.piece_at(source))
            .is_some_and(|piece| piece.kind == PieceKind::Pawn && piece.alliance == attacker)
    })
}

fn push_pawn_advance(piece: &Piece, destination: Coordinate, attacked: Option<Piece>, out: &mut Vec<Move>) {
    let (row, _) = row_col(destination);
    if row == piece.alliance.promotion_row() {
        out.push(Move::PawnPromotion {
            piece: *piece,
            destination,
            attacked,
            promote_to: PieceKind::Queen,
        });
        return;
    }
    match attacked {
        Some(attacked) => out.push(Move::Attacking {
            piece: *piece,
            destination,
            attacked,
        }),
        None => out.push(Move::Normal {
            piece: *piece,
            destination,
        }),
    }
}

fn en_passant_victim(piece: &Piece, board: &Board, d_col: i8) -> Option<Piece> {
    let candidate = board.en_passant_pawn()?;
    let beside = offset(piece.position, 0, d_col)?;
    (candidate.alliance != piece.alliance && candidate.position == beside).then_some(*candidate)
}
