//! Per-side legality state.
//!
//! The `Board` owns one `PlayerState` per alliance. `Player` is a borrowed
//! view pairing that state with the board it belongs to, so nothing points
//! back at the board by ownership.

use std::sync::OnceLock;

use tracing::{trace, warn};

use crate::board::alliance::Alliance;
use crate::board::board::Board;
use crate::board::board_utils::Coordinate;
use crate::board::piece::Piece;
use crate::move_generation::chess_move::Move;
use crate::move_generation::move_apply::attacks_king;
use crate::player::move_transition::{MoveStatus, MoveTransition};

#[derive(Debug, Clone)]
pub(crate) struct PlayerState {
    pub(crate) alliance: Alliance,
    pub(crate) king: Piece,
    pub(crate) legal_moves: Vec<Move>,
    pub(crate) in_check: bool,
    has_escape_moves: OnceLock<bool>,
}

impl PlayerState {
    pub(crate) fn new(alliance: Alliance, king: Piece) -> Self {
        Self {
            alliance,
            king,
            legal_moves: Vec::new(),
            in_check: false,
            has_escape_moves: OnceLock::new(),
        }
    }

    /// Installs the final move list and derives the check flag from the
    /// opponent's standard moves.
    pub(crate) fn settle(&mut self, standard_moves: Vec<Move>, castle_moves: Vec<Move>, opponent_moves: &[Move]) {
        self.in_check = is_tile_attacked(self.king.position, opponent_moves);
        self.legal_moves = standard_moves;
        self.legal_moves.extend(castle_moves);
    }
}

/// True when any of `moves` lands on `coordinate`.
pub(crate) fn is_tile_attacked(coordinate: Coordinate, moves: &[Move]) -> bool {
    moves.iter().any(|mv| mv.destination() == Some(coordinate))
}

#[derive(Debug, Clone, Copy)]
pub struct Player<'a> {
    board: &'a Board,
    state: &'a PlayerState,
}

impl<'a> Player<'a> {
    pub(crate) fn new(board: &'a Board, state: &'a PlayerState) -> Self {
        Self { board, state }
    }

    #[inline]
    pub fn alliance(&self) -> Alliance {
        self.state.alliance
    }

    /// Pseudo-legal moves, castles last.
    #[inline]
    pub fn legal_moves(&self) -> &'a [Move] {
        &self.state.legal_moves
    }

    #[inline]
    pub fn king(&self) -> &'a Piece {
        &self.state.king
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.state.in_check
    }

    pub fn active_pieces(&self) -> &'a [Piece] {
        self.board.active_pieces(self.state.alliance)
    }

    pub fn opponent(&self) -> Player<'a> {
        self.board.player(self.state.alliance.opposite())
    }

    pub fn is_castled(&self) -> bool {
        self.state.king.castled
    }

    pub fn is_legal_move(&self, mv: &Move) -> bool {
        self.state.legal_moves.contains(mv)
    }

    /// Attempts `mv` for this player. The original board is handed back
    /// unchanged whenever the move is rejected.
    pub fn make_move(&self, mv: &Move) -> MoveTransition<'a> {
        if !self.is_legal_move(mv) {
            trace!(alliance = %self.alliance(), %mv, "move is not in the legal list");
            return MoveTransition::rejected(self.board, *mv, MoveStatus::IllegalMove);
        }
        if attacks_king(mv) {
            trace!(alliance = %self.alliance(), %mv, "kings cannot be captured");
            return MoveTransition::rejected(self.board, *mv, MoveStatus::IllegalMove);
        }

        let candidate = match mv.execute(self.board) {
            Ok(board) => board,
            Err(err) => {
                warn!(alliance = %self.alliance(), %mv, error = %err, "listed move failed to execute");
                return MoveTransition::rejected(self.board, *mv, MoveStatus::IllegalMove);
            }
        };

        if candidate.player(self.alliance()).is_in_check() {
            trace!(alliance = %self.alliance(), %mv, "move leaves the king in check");
            return MoveTransition::rejected(self.board, *mv, MoveStatus::LeavePlayerInCheck);
        }

        MoveTransition::done(candidate, *mv)
    }

    pub fn is_in_check_mate(&self) -> bool {
        self.is_in_check() && !self.has_escape_moves()
    }

    pub fn is_in_stale_mate(&self) -> bool {
        !self.is_in_check() && !self.has_escape_moves()
    }

    fn has_escape_moves(&self) -> bool {
        *self.state.has_escape_moves.get_or_init(|| {
            self.state
                .legal_moves
                .iter()
                .any(|mv| self.make_move(mv).status().is_done())
        })
    }
}
