use std::fmt;

/// The owning side of a piece or player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alliance {
    White,
    Black,
}

impl Alliance {
    pub const ALL: [Alliance; 2] = [Alliance::White, Alliance::Black];

    /// Row delta of a forward pawn step. Row 1 is Black's home row, so White
    /// advances toward lower rows.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        matches!(self, Alliance::White)
    }

    /// Row the alliance's pawns start on and may double-step from.
    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Alliance::White => 7,
            Alliance::Black => 2,
        }
    }

    /// Row on which a pawn of this alliance promotes.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Alliance::White => 1,
            Alliance::Black => 8,
        }
    }

    /// Home row of the king and rooks.
    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            Alliance::White => 8,
            Alliance::Black => 1,
        }
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alliance::White => write!(f, "white"),
            Alliance::Black => write!(f, "black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Alliance;

    #[test]
    fn pawns_advance_from_start_row_toward_promotion_row() {
        for alliance in Alliance::ALL {
            let travel = alliance.promotion_row() - alliance.pawn_start_row();
            assert_eq!(travel.signum(), alliance.direction());
            assert_eq!(travel.abs(), 6);
        }
    }

    #[test]
    fn opposite_is_an_involution() {
        assert_eq!(Alliance::White.opposite(), Alliance::Black);
        assert_eq!(Alliance::Black.opposite().opposite(), Alliance::Black);
    }
}
