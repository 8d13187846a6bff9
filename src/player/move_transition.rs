use std::borrow::Cow;

use crate::board::board::Board;
use crate::move_generation::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    Done,
    IllegalMove,
    LeavePlayerInCheck,
}

impl MoveStatus {
    #[inline]
    pub fn is_done(self) -> bool {
        self == MoveStatus::Done
    }
}

/// Outcome of attempting a move. A rejected attempt carries the original board
/// back unchanged; an accepted one owns the new board.
#[derive(Debug, Clone)]
pub struct MoveTransition<'a> {
    board: Cow<'a, Board>,
    attempted_move: Move,
    status: MoveStatus,
}

impl<'a> MoveTransition<'a> {
    pub(crate) fn done(board: Board, attempted_move: Move) -> Self {
        Self {
            board: Cow::Owned(board),
            attempted_move,
            status: MoveStatus::Done,
        }
    }

    pub(crate) fn rejected(board: &'a Board, attempted_move: Move, status: MoveStatus) -> Self {
        Self {
            board: Cow::Borrowed(board),
            attempted_move,
            status,
        }
    }

    /// The board to continue from.
    pub fn transition_board(&self) -> &Board {
        &self.board
    }

    pub fn attempted_move(&self) -> &Move {
        &self.attempted_move
    }

    #[inline]
    pub fn status(&self) -> MoveStatus {
        self.status
    }

    /// Takes the board to continue from, cloning it if the move was rejected.
    pub fn into_board(self) -> Board {
        self.board.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_transition_hands_back_the_original_board() {
        let board = Board::standard();
        let transition = board.white_player().make_move(&Move::Null);
        assert_eq!(transition.status(), MoveStatus::IllegalMove);
        assert!(!transition.status().is_done());
        assert!(transition.attempted_move().is_null());
        assert!(std::ptr::eq(transition.transition_board(), &board));
        assert_eq!(transition.into_board().to_string(), board.to_string());
    }

    #[test]
    fn done_transition_owns_the_new_board() {
        let board = Board::standard();
        let white = board.white_player();
        let mv = white.legal_moves()[0];
        let transition = white.make_move(&mv);
        assert!(transition.status().is_done());
        assert_eq!(transition.attempted_move(), &mv);
        assert_eq!(transition.transition_board().next_move_maker(), board.next_move_maker().opposite());
    }
}
