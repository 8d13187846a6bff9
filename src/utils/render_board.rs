//! Plain-text board renderer used by `Display` and the self-play binary.

use crate::board::board::Board;
use crate::board::board_utils::{coordinate, BOARD_COLUMNS, BOARD_ROWS};

/// Renders row 1 at the top, so Black's home rows come first. Files and ranks
/// are labelled the algebraic way (row 1 is rank 8).
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 1..=BOARD_ROWS {
        let rank = char::from(b'0' + (BOARD_ROWS + 1 - row) as u8);
        out.push(rank);
        out.push(' ');

        for col in 1..=BOARD_COLUMNS {
            out.push_str(&board.tile(coordinate((row, col))).to_string());
            if col < BOARD_COLUMNS {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}
