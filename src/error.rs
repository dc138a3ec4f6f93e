//! Error types reported by the rules and the game controller.
//!
//! None of these are fatal: a rejected operation leaves the game untouched and
//! the caller can simply re-prompt.

use thiserror::Error;

/// Why a placement was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("({col}, {row}) is off the {size}x{size} board")]
    OutOfBounds { col: usize, row: usize, size: usize },
    #[error("({col}, {row}) is already occupied")]
    Occupied { col: usize, row: usize },
    #[error("({col}, {row}) would be suicide")]
    Suicide { col: usize, row: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move: {0}")]
    InvalidMove(#[from] InvalidMove),
    #[error("game is over")]
    AlreadyOver,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
