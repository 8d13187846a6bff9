use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::alliance::Alliance;
use crate::board::board_utils::Coordinate;

/// Piece kind. Move generation dispatches on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value used by the evaluator.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10000,
        }
    }

    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// An immutable piece snapshot.
///
/// Identity is `(alliance, kind, position)`; the `first_move` and `castled`
/// flags are state carried along with the piece and do not take part in
/// equality.
#[derive(Debug, Clone, Copy)]
pub struct Piece {
    pub kind: PieceKind,
    pub alliance: Alliance,
    pub position: Coordinate,
    /// The piece has not moved since the game started.
    pub first_move: bool,
    /// Only ever set on a king that castled.
    pub castled: bool,
}

impl Piece {
    /// A piece that has not moved yet.
    pub const fn new(kind: PieceKind, alliance: Alliance, position: Coordinate) -> Self {
        Self {
            kind,
            alliance,
            position,
            first_move: true,
            castled: false,
        }
    }

    /// A piece that has already moved at least once.
    pub const fn moved(kind: PieceKind, alliance: Alliance, position: Coordinate) -> Self {
        Self {
            kind,
            alliance,
            position,
            first_move: false,
            castled: false,
        }
    }

    /// The piece re-created on `destination` after moving. A king that has
    /// castled stays castled.
    pub const fn moved_to(self, destination: Coordinate) -> Self {
        Self {
            position: destination,
            first_move: false,
            ..self
        }
    }

    #[inline]
    pub const fn value(&self) -> i32 {
        self.kind.value()
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    /// Display letter: upper case for White, lower case for Black.
    pub fn letter(&self) -> char {
        match self.alliance {
            Alliance::White => self.kind.letter().to_ascii_uppercase(),
            Alliance::Black => self.kind.letter(),
        }
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.alliance == other.alliance && self.kind == other.kind && self.position == other.position
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.alliance.hash(state);
        self.kind.hash(state);
        self.position.hash(state);
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_move_history() {
        let fresh = Piece::new(PieceKind::Pawn, Alliance::White, 52);
        let moved = Piece::moved(PieceKind::Pawn, Alliance::White, 52);
        assert_eq!(fresh, moved);
        assert_ne!(fresh, Piece::new(PieceKind::Pawn, Alliance::Black, 52));
        assert_ne!(fresh, Piece::new(PieceKind::Pawn, Alliance::White, 44));
    }

    #[test]
    fn moved_to_drops_first_move() {
        let rook = Piece::new(PieceKind::Rook, Alliance::Black, 0);
        let after = rook.moved_to(8);
        assert_eq!(after.position, 8);
        assert!(!after.first_move);
        assert_eq!(after.kind, PieceKind::Rook);
    }

    #[test]
    fn moved_to_keeps_castled() {
        let mut king = Piece::moved(PieceKind::King, Alliance::White, 62);
        king.castled = true;
        let after = king.moved_to(55);
        assert_eq!(after.position, 55);
        assert!(after.castled);
    }

    #[test]
    fn letters_are_cased_by_alliance() {
        assert_eq!(Piece::new(PieceKind::Knight, Alliance::White, 57).letter(), 'N');
        assert_eq!(Piece::new(PieceKind::Knight, Alliance::Black, 1).letter(), 'n');
    }
}
