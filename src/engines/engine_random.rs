//! Random-move engine used for playouts and as a weak opponent.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::board::board::Board;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{ChessError, ChessResult};
use crate::move_generation::chess_move::Move;

/// Picks uniformly among the moves that reach `Done`.
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Briar Random"
    }

    fn choose_move(&mut self, board: &Board) -> ChessResult<EngineOutput> {
        let player = board.current_player();
        let playable: Vec<Move> = player
            .legal_moves()
            .iter()
            .filter(|mv| player.make_move(mv).status().is_done())
            .copied()
            .collect();

        let best_move = *playable
            .choose(&mut self.rng)
            .ok_or(ChessError::NoLegalMoves(player.alliance()))?;

        info!(
            alliance = %player.alliance(),
            %best_move,
            candidates = playable.len(),
            "random engine chose a move"
        );
        Ok(EngineOutput {
            best_move,
            score: None,
            nodes: playable.len() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_game() {
        let mut first = RandomEngine::with_seed(7);
        let mut second = RandomEngine::with_seed(7);
        let mut board_a = Board::standard();
        let mut board_b = Board::standard();

        for _ in 0..10 {
            let a = first.choose_move(&board_a).expect("moves available").best_move;
            let b = second.choose_move(&board_b).expect("moves available").best_move;
            assert_eq!(a, b);
            board_a = board_a.current_player().make_move(&a).into_board();
            board_b = board_b.current_player().make_move(&b).into_board();
        }
        assert_eq!(board_a.to_string(), board_b.to_string());
    }

    #[test]
    fn opening_move_is_one_of_twenty() {
        let board = Board::standard();
        let output = RandomEngine::with_seed(1).choose_move(&board).expect("moves available");
        assert_eq!(output.nodes, 20);
        assert!(board.white_player().is_legal_move(&output.best_move));
        assert!(output.score.is_none());
    }
}
