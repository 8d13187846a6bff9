//! Single-ply transitions.
//!
//! A `Move` records the moving piece as it stood before the move, so the
//! source coordinate is always `moving_piece().position`. Executing a move is
//! implemented in `move_apply`.

use std::fmt;

use crate::board::board_utils::{square_name, Coordinate};
use crate::board::piece::{Piece, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Quiet move to an empty square.
    Normal { piece: Piece, destination: Coordinate },
    /// Capture of the piece standing on the destination.
    Attacking {
        piece: Piece,
        destination: Coordinate,
        attacked: Piece,
    },
    /// Pawn capture of an adjacent pawn that just double-stepped. The captured
    /// pawn does not stand on the destination.
    PawnEnPassantAttack {
        piece: Piece,
        destination: Coordinate,
        attacked: Piece,
    },
    /// Pawn double-step; the pawn becomes en-passant eligible for one ply.
    PawnJump { piece: Piece, destination: Coordinate },
    /// Pawn step or capture onto its promotion row.
    PawnPromotion {
        piece: Piece,
        destination: Coordinate,
        attacked: Option<Piece>,
        promote_to: PieceKind,
    },
    /// King and rook swap sides; `piece` is the king.
    Castle {
        piece: Piece,
        destination: Coordinate,
        rook: Piece,
        rook_destination: Coordinate,
    },
    /// Sentinel for "no matching move". Never executable.
    Null,
}

impl Move {
    pub fn moving_piece(&self) -> Option<&Piece> {
        match self {
            Move::Normal { piece, .. }
            | Move::Attacking { piece, .. }
            | Move::PawnEnPassantAttack { piece, .. }
            | Move::PawnJump { piece, .. }
            | Move::PawnPromotion { piece, .. }
            | Move::Castle { piece, .. } => Some(piece),
            Move::Null => None,
        }
    }

    pub fn source(&self) -> Option<Coordinate> {
        self.moving_piece().map(|piece| piece.position)
    }

    pub fn destination(&self) -> Option<Coordinate> {
        match self {
            Move::Normal { destination, .. }
            | Move::Attacking { destination, .. }
            | Move::PawnEnPassantAttack { destination, .. }
            | Move::PawnJump { destination, .. }
            | Move::PawnPromotion { destination, .. }
            | Move::Castle { destination, .. } => Some(*destination),
            Move::Null => None,
        }
    }

    /// The piece this move captures, if any.
    pub fn attacked_piece(&self) -> Option<&Piece> {
        match self {
            Move::Attacking { attacked, .. } | Move::PawnEnPassantAttack { attacked, .. } => {
                Some(attacked)
            }
            Move::PawnPromotion { attacked, .. } => attacked.as_ref(),
            _ => None,
        }
    }

    #[inline]
    pub fn is_attack(&self) -> bool {
        self.attacked_piece().is_some()
    }

    #[inline]
    pub fn is_castling(&self) -> bool {
        matches!(self, Move::Castle { .. })
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    /// True when `self` moves from `source` to `destination`.
    pub fn connects(&self, source: Coordinate, destination: Coordinate) -> bool {
        self.source() == Some(source) && self.destination() == Some(destination)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(source), Some(destination)) = (self.source(), self.destination()) else {
            return write!(f, "null");
        };
        write!(f, "{}{}", square_name(source), square_name(destination))?;
        if let Move::PawnPromotion { promote_to, .. } = self {
            write!(f, "{}", promote_to.letter())?;
        }
        Ok(())
    }
}
