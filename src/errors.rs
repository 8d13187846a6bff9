//! Errors used throughout the rules engine.
//!
//! Board construction failures are invariant violations: they mean the caller
//! assembled an impossible position and are never part of normal game flow.
//! Illegal move attempts are not errors at all; they are reported through
//! `MoveTransition` statuses. Lookup misses resolve to the null move.

use std::path::PathBuf;

use crate::board::alliance::Alliance;
use crate::board::board_utils::Coordinate;

/// Fatal failures while materialising a `Board`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// `build` was called before a next mover was declared.
    #[error("next move maker must be set before building a board")]
    MissingNextMover,

    /// An alliance has zero or several kings among its active pieces.
    #[error("{alliance} must have exactly one king, found {count}")]
    KingCount { alliance: Alliance, count: usize },

    /// A piece was placed outside `0..64`.
    #[error("coordinate {0} is off the board")]
    InvalidCoordinate(Coordinate),

    /// The null-move sentinel was executed.
    #[error("the null move cannot be executed")]
    NullMoveExecuted,
}

/// Failures loading engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("search depth must be at least 1")]
    ZeroDepth,
}

/// Umbrella error for callers that drive the whole engine.
#[derive(Debug, thiserror::Error)]
pub enum ChessError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no legal move is available for {0}")]
    NoLegalMoves(Alliance),

    #[error("search for {0} was stopped before any move was scored")]
    SearchStopped(Alliance),
}

pub type ChessResult<T> = Result<T, ChessError>;
