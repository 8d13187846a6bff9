//! Engine abstraction consumed by a presentation layer or match runner.

use crate::board::board::Board;
use crate::errors::ChessResult;
use crate::move_generation::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Move,
    /// Search score from White's point of view, when the engine searches.
    pub score: Option<i32>,
    pub nodes: u64,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Chooses a move for the board's current mover. The returned move
    /// always reaches `Done` when made on `board`.
    fn choose_move(&mut self, board: &Board) -> ChessResult<EngineOutput>;
}
