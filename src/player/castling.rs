//! Castle-move derivation.
//!
//! Castles depend on which squares the opponent attacks, so they are computed
//! after both sides' standard moves exist and are appended to the legal list
//! only. They never contribute to check detection.

use crate::board::alliance::Alliance;
use crate::board::board::Board;
use crate::board::board_utils::{coordinate, Coordinate};
use crate::board::piece::{Piece, PieceKind};
use crate::move_generation::chess_move::Move;
use crate::moves::pawn_moves::pawn_attacks_tile;
use crate::player::player::is_tile_attacked;

const KING_COLUMN: i8 = 5;

struct CastleSide {
    rook_column: i8,
    must_be_empty: &'static [i8],
    must_be_safe: &'static [i8],
    king_destination: i8,
    rook_destination: i8,
}

const KING_SIDE: CastleSide = CastleSide {
    rook_column: 8,
    must_be_empty: &[6, 7],
    must_be_safe: &[6, 7],
    king_destination: 7,
    rook_destination: 6,
};

const QUEEN_SIDE: CastleSide = CastleSide {
    rook_column: 1,
    must_be_empty: &[2, 3, 4],
    must_be_safe: &[3, 4],
    king_destination: 3,
    rook_destination: 4,
};

/// Castle moves available to `alliance`, given the opponent's standard moves.
pub(crate) fn castle_moves(board: &Board, alliance: Alliance, opponent_moves: &[Move]) -> Vec<Move> {
    let mut castles = Vec::new();
    let king = board.player_state(alliance).king;
    let back_row = alliance.back_row();

    if !king.first_move
        || king.position != coordinate((back_row, KING_COLUMN))
        || is_tile_attacked(king.position, opponent_moves)
    {
        return castles;
    }

    for side in [&KING_SIDE, &QUEEN_SIDE] {
        if let Some(mv) = castle_for_side(board, &king, side, opponent_moves) {
            castles.push(mv);
        }
    }
    castles
}

fn castle_for_side(board: &Board, king: &Piece, side: &CastleSide, opponent_moves: &[Move]) -> Option<Move> {
    let back_row = king.alliance.back_row();
    let square = |col: i8| -> Coordinate { coordinate((back_row, col)) };

    let rook = board
        .piece_at(square(side.rook_column))
        .filter(|rook| rook.kind == PieceKind::Rook && rook.alliance == king.alliance && rook.first_move)?;

    if side
        .must_be_empty
        .iter()
        .any(|&col| board.piece_at(square(col)).is_some())
    {
        return None;
    }

    let opponent = king.alliance.opposite();
    if side.must_be_safe.iter().any(|&col| {
        let target = square(col);
        is_tile_attacked(target, opponent_moves) || pawn_attacks_tile(board, target, opponent)
    }) {
        return None;
    }

    Some(Move::Castle {
        piece: *king,
        destination: square(side.king_destination),
        rook: *rook,
        rook_destination: square(side.rook_destination),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board::BoardBuilder;

    fn castling_position(extra: &[Piece], next: Alliance) -> Board {
        let mut builder = BoardBuilder::new();
        builder
            .set_piece(Piece::new(PieceKind::King, Alliance::White, 60))
            .set_piece(Piece::new(PieceKind::Rook, Alliance::White, 56))
            .set_piece(Piece::new(PieceKind::Rook, Alliance::White, 63))
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, 4))
            .set_next_move_maker(next);
        for piece in extra {
            builder.set_piece(*piece);
        }
        builder.build().expect("position should build")
    }

    fn castles(board: &Board, alliance: Alliance) -> Vec<Move> {
        board
            .player(alliance)
            .legal_moves()
            .iter()
            .filter(|mv| mv.is_castling())
            .copied()
            .collect()
    }

    #[test]
    fn both_sides_available_on_an_open_back_row() {
        let board = castling_position(&[], Alliance::White);
        let moves = castles(&board, Alliance::White);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|mv| mv.destination() == Some(62)));
        assert!(moves.iter().any(|mv| mv.destination() == Some(58)));
        assert!(castles(&board, Alliance::Black).is_empty());
    }

    #[test]
    fn moved_rook_forbids_its_side() {
        let board = castling_position(&[Piece::moved(PieceKind::Rook, Alliance::White, 63)], Alliance::White);
        let moves = castles(&board, Alliance::White);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].destination(), Some(58));
    }

    #[test]
    fn attacked_crossing_square_forbids_castling() {
        // Black rook on column 6 covers the king's crossing square.
        let board = castling_position(&[Piece::new(PieceKind::Rook, Alliance::Black, 5)], Alliance::White);
        let moves = castles(&board, Alliance::White);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].destination(), Some(58));
    }

    #[test]
    fn pawn_diagonal_counts_as_an_attack() {
        // Black pawn on row 7 column 3 attacks column 4 of the back row.
        let board = castling_position(&[Piece::moved(PieceKind::Pawn, Alliance::Black, 50)], Alliance::White);
        let moves = castles(&board, Alliance::White);
        assert!(moves.iter().all(|mv| mv.destination() != Some(58)));
    }

    #[test]
    fn king_in_check_cannot_castle() {
        let board = castling_position(&[Piece::new(PieceKind::Rook, Alliance::Black, 12)], Alliance::White);
        assert!(board.white_player().is_in_check());
        assert!(castles(&board, Alliance::White).is_empty());
    }

    #[test]
    fn queen_side_needs_column_two_empty() {
        let board = castling_position(&[Piece::new(PieceKind::Knight, Alliance::White, 57)], Alliance::White);
        let moves = castles(&board, Alliance::White);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].destination(), Some(62));
    }
}
