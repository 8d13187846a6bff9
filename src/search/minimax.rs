//! Fixed-depth minimax over `make_move` transitions.
//!
//! White maximises and Black minimises. Only moves that reach `Done` are
//! searched. A node where no move reaches `Done` is terminal and is scored at
//! its remaining depth, so a mate found earlier scores higher. Ties keep the
//! first move encountered. Optional alpha-beta pruning never changes the
//! chosen move, because a root move only replaces the incumbent when its
//! exact value is strictly better.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::board::Board;
use crate::move_generation::chess_move::Move;
use crate::search::board_evaluator::BoardEvaluator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pruning {
    /// Exhaustive search.
    #[default]
    None,
    AlphaBeta,
}

#[derive(Debug, Clone, Default)]
pub struct SearchLimits {
    pub depth: u32,
    pub pruning: Pruning,
    /// Polled between root moves; once set the search returns the best move
    /// found so far.
    pub stop: Option<Arc<AtomicBool>>,
}

impl SearchLimits {
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_stop_flag(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = Some(stop);
        self
    }

    fn stop_requested(&self) -> bool {
        self.stop
            .as_ref()
            .is_some_and(|stop| stop.load(Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// `None` when the side to move has no move reaching `Done`, or when the
    /// search was stopped before any root move completed.
    pub best_move: Option<Move>,
    /// Meaningless when `stopped` is set and `best_move` is `None`.
    pub score: i32,
    pub nodes: u64,
    pub stopped: bool,
}

/// Picks the best move for the board's current mover.
pub fn search_best_move<E: BoardEvaluator + ?Sized>(
    board: &Board,
    evaluator: &E,
    limits: &SearchLimits,
) -> SearchOutcome {
    if limits.depth == 0 {
        return SearchOutcome {
            best_move: None,
            score: evaluator.evaluate(board, 0),
            nodes: 1,
            stopped: false,
        };
    }

    let player = board.current_player();
    let maximizing = player.alliance().is_white();
    let mut outcome = SearchOutcome {
        best_move: None,
        score: if maximizing { i32::MIN } else { i32::MAX },
        nodes: 1,
        stopped: false,
    };
    let mut alpha = i32::MIN;
    let mut beta = i32::MAX;

    for mv in player.legal_moves() {
        if limits.stop_requested() {
            outcome.stopped = true;
            break;
        }

        let transition = player.make_move(mv);
        if !transition.status().is_done() {
            continue;
        }

        let value = minimax(
            transition.transition_board(),
            evaluator,
            limits.depth - 1,
            !maximizing,
            alpha,
            beta,
            limits.pruning,
            &mut outcome.nodes,
        );
        debug!(%mv, value, "root move scored");

        let improves = if maximizing {
            value > outcome.score
        } else {
            value < outcome.score
        };
        if improves {
            outcome.score = value;
            outcome.best_move = Some(*mv);
        }
        if limits.pruning == Pruning::AlphaBeta {
            if maximizing {
                alpha = alpha.max(outcome.score);
            } else {
                beta = beta.min(outcome.score);
            }
        }
    }

    if outcome.best_move.is_none() && !outcome.stopped {
        outcome.score = evaluator.evaluate(board, limits.depth);
    }

    debug!(
        alliance = %player.alliance(),
        depth = limits.depth,
        nodes = outcome.nodes,
        score = outcome.score,
        best_move = %outcome.best_move.unwrap_or(Move::Null),
        stopped = outcome.stopped,
        "search finished"
    );
    outcome
}

#[allow(clippy::too_many_arguments)]
fn minimax<E: BoardEvaluator + ?Sized>(
    board: &Board,
    evaluator: &E,
    depth: u32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    pruning: Pruning,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return evaluator.evaluate(board, depth);
    }

    let player = board.current_player();
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    let mut searched_any = false;

    for mv in player.legal_moves() {
        let transition = player.make_move(mv);
        if !transition.status().is_done() {
            continue;
        }
        searched_any = true;

        let value = minimax(
            transition.transition_board(),
            evaluator,
            depth - 1,
            !maximizing,
            alpha,
            beta,
            pruning,
            nodes,
        );

        if maximizing {
            best = best.max(value);
            alpha = alpha.max(best);
        } else {
            best = best.min(value);
            beta = beta.min(best);
        }
        if pruning == Pruning::AlphaBeta && alpha >= beta {
            break;
        }
    }

    if !searched_any {
        return evaluator.evaluate(board, depth);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::alliance::Alliance;
    use crate::board::board::BoardBuilder;
    use crate::board::piece::{Piece, PieceKind};
    use crate::search::board_evaluator::StandardBoardEvaluator;

    fn knight_fork_position() -> Board {
        // White knight can take the undefended Black queen.
        let mut builder = BoardBuilder::new();
        builder
            .set_piece(Piece::new(PieceKind::King, Alliance::White, 63))
            .set_piece(Piece::moved(PieceKind::Knight, Alliance::White, 45))
            .set_piece(Piece::new(PieceKind::Pawn, Alliance::White, 48))
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, 4))
            .set_piece(Piece::moved(PieceKind::Queen, Alliance::Black, 28))
            .set_next_move_maker(Alliance::White);
        builder.build().expect("position should build")
    }

    #[test]
    fn depth_one_takes_the_free_queen() {
        let board = knight_fork_position();
        let outcome = search_best_move(&board, &StandardBoardEvaluator::default(), &SearchLimits::new(1));
        let best = outcome.best_move.expect("white has moves");
        assert!(best.connects(45, 28));
        assert!(best.is_attack());
        assert!(!outcome.stopped);
    }

    #[test]
    fn black_minimises() {
        let mut builder = BoardBuilder::new();
        builder
            .set_piece(Piece::new(PieceKind::King, Alliance::White, 63))
            .set_piece(Piece::moved(PieceKind::Rook, Alliance::White, 35))
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, 7))
            .set_piece(Piece::moved(PieceKind::Bishop, Alliance::Black, 17))
            .set_next_move_maker(Alliance::Black);
        let board = builder.build().expect("position should build");

        let outcome = search_best_move(&board, &StandardBoardEvaluator::default(), &SearchLimits::new(1));
        let best = outcome.best_move.expect("black has moves");
        assert!(best.connects(17, 35));
    }

    #[test]
    fn alpha_beta_agrees_with_exhaustive_search() {
        let evaluator = StandardBoardEvaluator::default();
        for board in [Board::standard(), knight_fork_position()] {
            for depth in 1..=3 {
                let exhaustive = search_best_move(&board, &evaluator, &SearchLimits::new(depth));
                let pruned = search_best_move(
                    &board,
                    &evaluator,
                    &SearchLimits::new(depth).with_pruning(Pruning::AlphaBeta),
                );
                assert_eq!(pruned.best_move, exhaustive.best_move, "depth {depth}");
                assert_eq!(pruned.score, exhaustive.score, "depth {depth}");
                assert!(pruned.nodes <= exhaustive.nodes);
            }
        }
    }

    #[test]
    fn finds_back_rank_mate_in_one() {
        let mut builder = BoardBuilder::new();
        builder
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, 6))
            .set_piece(Piece::new(PieceKind::Pawn, Alliance::Black, 13))
            .set_piece(Piece::new(PieceKind::Pawn, Alliance::Black, 14))
            .set_piece(Piece::new(PieceKind::Pawn, Alliance::Black, 15))
            .set_piece(Piece::moved(PieceKind::Rook, Alliance::White, 56))
            .set_piece(Piece::new(PieceKind::King, Alliance::White, 60))
            .set_next_move_maker(Alliance::White);
        let board = builder.build().expect("position should build");

        let outcome = search_best_move(&board, &StandardBoardEvaluator::default(), &SearchLimits::new(2));
        let best = outcome.best_move.expect("white has moves");
        assert!(best.connects(56, 0));
    }

    #[test]
    fn mated_side_has_no_best_move() {
        let mut builder = BoardBuilder::new();
        builder
            .set_piece(Piece::new(PieceKind::King, Alliance::Black, 6))
            .set_piece(Piece::new(PieceKind::Pawn, Alliance::Black, 13))
            .set_piece(Piece::new(PieceKind::Pawn, Alliance::Black, 14))
            .set_piece(Piece::new(PieceKind::Pawn, Alliance::Black, 15))
            .set_piece(Piece::moved(PieceKind::Rook, Alliance::White, 0))
            .set_piece(Piece::new(PieceKind::King, Alliance::White, 60))
            .set_next_move_maker(Alliance::Black);
        let board = builder.build().expect("position should build");

        let outcome = search_best_move(&board, &StandardBoardEvaluator::default(), &SearchLimits::new(2));
        assert!(outcome.best_move.is_none());
        assert!(outcome.score > 0);
    }

    #[test]
    fn preset_stop_flag_returns_immediately() {
        let stop = Arc::new(AtomicBool::new(true));
        let limits = SearchLimits::new(3).with_stop_flag(Arc::clone(&stop));
        let outcome = search_best_move(&Board::standard(), &StandardBoardEvaluator::default(), &limits);
        assert!(outcome.stopped);
        assert!(outcome.best_move.is_none());
        assert_eq!(outcome.nodes, 1);
    }

    #[test]
    fn zero_depth_only_evaluates() {
        let outcome = search_best_move(&Board::standard(), &StandardBoardEvaluator::default(), &SearchLimits::new(0));
        assert!(outcome.best_move.is_none());
        assert_eq!(outcome.score, 0);
    }
}
