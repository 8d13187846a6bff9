use std::fmt;

use crate::board::board_utils::{Coordinate, NUMBER_OF_TILES};
use crate::board::piece::Piece;

/// One board square. Empty tiles carry no state beyond their coordinate and
/// are handed out from `EMPTY_TILES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty { coordinate: Coordinate },
    Occupied { coordinate: Coordinate, piece: Piece },
}

pub const EMPTY_TILES: [Tile; NUMBER_OF_TILES] = generate_empty_tiles();

const fn generate_empty_tiles() -> [Tile; NUMBER_OF_TILES] {
    let mut table = [Tile::Empty { coordinate: 0 }; NUMBER_OF_TILES];
    let mut sq = 0usize;

    while sq < NUMBER_OF_TILES {
        table[sq] = Tile::Empty {
            coordinate: sq as Coordinate,
        };
        sq += 1;
    }

    table
}

impl Tile {
    /// Builds the tile for `coordinate`, reusing the cached empty tile when no
    /// piece is given.
    #[inline]
    pub fn create(coordinate: Coordinate, piece: Option<Piece>) -> Self {
        match piece {
            Some(piece) => Tile::Occupied { coordinate, piece },
            None => EMPTY_TILES[coordinate as usize],
        }
    }

    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        match self {
            Tile::Empty { coordinate } | Tile::Occupied { coordinate, .. } => *coordinate,
        }
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Tile::Occupied { .. })
    }

    #[inline]
    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Tile::Empty { .. } => None,
            Tile::Occupied { piece, .. } => Some(piece),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Empty { .. } => write!(f, "."),
            Tile::Occupied { piece, .. } => write!(f, "{piece}"),
        }
    }
}
