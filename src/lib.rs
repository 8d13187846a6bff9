//! Crate root module declarations for the Briar chess rules engine.
//!
//! Exposes the immutable board model, per-piece move generation, move
//! execution and legality, minimax search, engines and configuration so
//! binaries, benches and tests can import stable module paths.

pub mod board {
    pub mod alliance;
    pub mod board;
    pub mod board_utils;
    pub mod piece;
    pub mod tile;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod chess_move;
    pub mod move_apply;
    pub mod move_factory;
    pub mod perft;
}

pub mod player {
    pub mod castling;
    pub mod move_transition;
    pub mod player;
}

pub mod search {
    pub mod board_evaluator;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod render_board;
}

pub mod config;
pub mod errors;
