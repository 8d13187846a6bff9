//! Coordinate helpers shared by the board and move generation.
//!
//! A coordinate is a linear index in `0..64`, row-major, where index 0 is
//! row 1 column 1. Rows and columns are 1-based. All generation arithmetic is
//! done in `(row, col)` space and converted back only after the candidate is
//! known to be on the board.

pub const BOARD_ROWS: i8 = 8;
pub const BOARD_COLUMNS: i8 = 8;
pub const NUMBER_OF_TILES: usize = 64;

/// Linear board index in `0..64`.
pub type Coordinate = u8;

/// 1-based `(row, col)` pair.
pub type RowCol = (i8, i8);

#[inline]
pub const fn row_col(coordinate: Coordinate) -> RowCol {
    (
        (coordinate as i8) / BOARD_COLUMNS + 1,
        (coordinate as i8) % BOARD_COLUMNS + 1,
    )
}

/// Converts a `(row, col)` pair to a linear index. The pair must be valid.
#[inline]
pub const fn coordinate(row_col: RowCol) -> Coordinate {
    ((row_col.0 - 1) * BOARD_COLUMNS + row_col.1 - 1) as Coordinate
}

#[inline]
pub const fn is_valid_row_col(row_col: RowCol) -> bool {
    row_col.0 >= 1 && row_col.0 <= BOARD_ROWS && row_col.1 >= 1 && row_col.1 <= BOARD_COLUMNS
}

#[inline]
pub const fn is_valid_coordinate(coordinate: i32) -> bool {
    coordinate >= 0 && coordinate < NUMBER_OF_TILES as i32
}

/// Moves `from` by `(d_row, d_col)`, returning `None` when the result leaves
/// the board.
#[inline]
pub fn offset(from: Coordinate, d_row: i8, d_col: i8) -> Option<Coordinate> {
    let (row, col) = row_col(from);
    let candidate = (row + d_row, col + d_col);
    if is_valid_row_col(candidate) {
        Some(coordinate(candidate))
    } else {
        None
    }
}

/// Single-bit mask of `row_col`, or 0 when the pair is off the board.
#[inline]
pub const fn tile_bit(row_col: RowCol) -> u64 {
    if is_valid_row_col(row_col) {
        1u64 << coordinate(row_col)
    } else {
        0
    }
}

/// Mask of every on-board square reached from `from` by one of `steps`.
pub const fn step_targets(from: Coordinate, steps: &[(i8, i8)]) -> u64 {
    let (row, col) = row_col(from);
    let mut targets = 0u64;
    let mut i = 0usize;

    while i < steps.len() {
        targets |= tile_bit((row + steps[i].0, col + steps[i].1));
        i += 1;
    }

    targets
}

/// Algebraic square name, with row 1 rendered as rank 8.
pub fn square_name(coordinate: Coordinate) -> String {
    let (row, col) = row_col(coordinate);
    let file = (b'a' + (col - 1) as u8) as char;
    let rank = (b'0' + (BOARD_ROWS + 1 - row) as u8) as char;
    format!("{file}{rank}")
}
