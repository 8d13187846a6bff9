//! Static position scoring.
//!
//! Search delegates leaf scoring to `BoardEvaluator`, so alternative heuristics
//! can be passed in without touching the search code.

use serde::{Deserialize, Serialize};

use crate::board::alliance::Alliance;
use crate::board::board::Board;

pub trait BoardEvaluator: Send + Sync {
    /// Score from White's point of view; positive favours White. `depth` is the
    /// remaining search depth at the scored node.
    fn evaluate(&self, board: &Board, depth: u32) -> i32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorWeights {
    pub check_bonus: i32,
    pub check_mate_bonus: i32,
    pub depth_bonus: i32,
    pub castle_bonus: i32,
}

impl Default for EvaluatorWeights {
    fn default() -> Self {
        Self {
            check_bonus: 50,
            check_mate_bonus: 10000,
            depth_bonus: 100,
            castle_bonus: 60,
        }
    }
}

/// Material, mobility, check, mate and castling terms per side, White minus
/// Black.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardBoardEvaluator {
    weights: EvaluatorWeights,
}

impl StandardBoardEvaluator {
    pub fn new(weights: EvaluatorWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &EvaluatorWeights {
        &self.weights
    }

    fn score_player(&self, board: &Board, alliance: Alliance, depth: u32) -> i32 {
        let player = board.player(alliance);
        let opponent = player.opponent();

        let material: i32 = player.active_pieces().iter().map(|piece| piece.value()).sum();
        let mobility = player.legal_moves().len() as i32;
        let check = if opponent.is_in_check() {
            self.weights.check_bonus
        } else {
            0
        };
        let check_mate = if opponent.is_in_check_mate() {
            self.weights.check_mate_bonus * self.depth_bonus(depth)
        } else {
            0
        };
        let castled = if player.is_castled() {
            self.weights.castle_bonus
        } else {
            0
        };

        material + mobility + check + check_mate + castled
    }

    #[inline]
    fn depth_bonus(&self, depth: u32) -> i32 {
        if depth == 0 {
            1
        } else {
            self.weights.depth_bonus * depth as i32
        }
    }
}

impl BoardEvaluator for StandardBoardEvaluator {
    fn evaluate(&self, board: &Board, depth: u32) -> i32 {
        self.score_player(board, Alliance::White, depth) - self.score_player(board, Alliance::Black, depth)
    }
}
