//! Move-path enumeration counts used as a move-generation correctness check.

use crate::board::board::Board;
use crate::move_generation::chess_move::Move;
use crate::player::move_transition::MoveStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Number of legal move paths of length `depth` from `board`.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let player = board.current_player();
    let mut nodes = 0u64;
    for mv in player.legal_moves() {
        let transition = player.make_move(mv);
        if transition.status() == MoveStatus::Done {
            nodes += perft(transition.transition_board(), depth - 1);
        }
    }
    nodes
}

/// Like `perft`, also classifying the leaf moves.
pub fn perft_detailed(board: &Board, depth: u32) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let player = board.current_player();
    let mut total = PerftCounts::default();
    for mv in player.legal_moves() {
        let transition = player.make_move(mv);
        if transition.status() != MoveStatus::Done {
            continue;
        }
        let next = transition.transition_board();

        if depth > 1 {
            total.merge(perft_detailed(next, depth - 1));
            continue;
        }

        total.nodes += 1;
        if mv.is_attack() {
            total.captures += 1;
        }
        if matches!(mv, Move::PawnEnPassantAttack { .. }) {
            total.en_passant += 1;
        }
        if mv.is_castling() {
            total.castles += 1;
        }
        if matches!(mv, Move::PawnPromotion { .. }) {
            total.promotions += 1;
        }
        let opponent = next.current_player();
        if opponent.is_in_check() {
            total.checks += 1;
            if opponent.is_in_check_mate() {
                total.checkmates += 1;
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_shallow_counts() {
        let board = Board::standard();
        assert_eq!(perft(&board, 0), 1);
        assert_eq!(perft(&board, 1), 20);
        assert_eq!(perft(&board, 2), 400);
    }

    #[test]
    fn start_position_depth_three() {
        let board = Board::standard();
        let counts = perft_detailed(&board, 3);
        assert_eq!(counts.nodes, 8902);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.checks, 12);
        assert_eq!(counts.checkmates, 0);
        assert_eq!(counts.castles, 0);
    }
}
