use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use tracing::info;

use crate::board::board::Board;
use crate::config::EngineConfig;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{ChessError, ChessResult};
use crate::search::board_evaluator::StandardBoardEvaluator;
use crate::search::minimax::search_best_move;

/// Fixed-depth minimax with the standard evaluator.
pub struct MinimaxEngine {
    config: EngineConfig,
    evaluator: StandardBoardEvaluator,
    stop: Option<Arc<AtomicBool>>,
}

impl MinimaxEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            evaluator: StandardBoardEvaluator::new(config.evaluator),
            config,
            stop: None,
        }
    }

    /// Shares a flag that cancels the search between root moves.
    pub fn with_stop_flag(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Briar Minimax"
    }

    fn choose_move(&mut self, board: &Board) -> ChessResult<EngineOutput> {
        let mut limits = self.config.search.limits();
        limits.stop = self.stop.clone();

        let outcome = search_best_move(board, &self.evaluator, &limits);
        let best_move = match outcome.best_move {
            Some(best_move) => best_move,
            None if outcome.stopped => return Err(ChessError::SearchStopped(board.next_move_maker())),
            None => return Err(ChessError::NoLegalMoves(board.next_move_maker())),
        };

        info!(
            alliance = %board.next_move_maker(),
            %best_move,
            score = outcome.score,
            nodes = outcome.nodes,
            "minimax engine chose a move"
        );
        Ok(EngineOutput {
            best_move,
            score: Some(outcome.score),
            nodes: outcome.nodes,
        })
    }
}
