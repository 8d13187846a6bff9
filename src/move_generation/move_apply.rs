//! Materialising the board that results from a move.
//!
//! The source board is never touched: every untouched piece is copied into a
//! fresh `BoardBuilder` together with its move history, the mover is placed on
//! its destination and the opponent becomes the next move maker.

use crate::board::board::{Board, BoardBuilder};
use crate::board::piece::{Piece, PieceKind};
use crate::errors::BoardError;
use crate::move_generation::chess_move::Move;

impl Move {
    /// Builds the board after this move. Legality is not checked here.
    pub fn execute(&self, board: &Board) -> Result<Board, BoardError> {
        let Some(mover) = self.moving_piece().copied() else {
            return Err(BoardError::NullMoveExecuted);
        };
        let destination = self.destination().ok_or(BoardError::NullMoveExecuted)?;
        let attacked = self.attacked_piece().copied();
        let rook = match self {
            Move::Castle { rook, .. } => Some(*rook),
            _ => None,
        };

        let mut builder = BoardBuilder::new();
        for alliance in [mover.alliance, mover.alliance.opposite()] {
            for piece in board.active_pieces(alliance) {
                if *piece == mover || Some(*piece) == attacked || Some(*piece) == rook {
                    continue;
                }
                builder.set_piece(*piece);
            }
        }

        match *self {
            Move::PawnPromotion { promote_to, .. } => {
                builder.set_piece(Piece::moved(promote_to, mover.alliance, destination));
            }
            Move::Castle {
                rook,
                rook_destination,
                ..
            } => {
                let mut king = mover.moved_to(destination);
                king.castled = true;
                builder.set_piece(king).set_piece(rook.moved_to(rook_destination));
            }
            Move::PawnJump { .. } => {
                let pawn = mover.moved_to(destination);
                builder.set_piece(pawn).set_en_passant_pawn(pawn);
            }
            _ => {
                builder.set_piece(mover.moved_to(destination));
            }
        }

        builder.set_next_move_maker(mover.alliance.opposite());
        builder.build()
    }
}

/// True when the move would capture a king. Such moves are never made.
#[inline]
pub fn attacks_king(mv: &Move) -> bool {
    mv.attacked_piece()
        .is_some_and(|piece| piece.kind == PieceKind::King)
}
