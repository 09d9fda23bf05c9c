//! Error types

use thiserror::Error;

use crate::board::Pos;

/// Reason a placement was rejected. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("Placement out of bounds: ({row}, {col}).")]
    OutOfBounds { row: i32, col: i32 },

    #[error("Square {0} is taken.")]
    SquareTaken(Pos),

    #[error("New disc at {0} must be adjacent to an existing one.")]
    NotAdjacent(Pos),

    #[error("Move at {0} won't flip any discs.")]
    NoCaptures(Pos),
}

/// Errors raised by the game session layers (players, orchestration, config)
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),

    #[error("Input error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse move {0:?}, expected \"row column\"")]
    BadInput(String),

    #[error("Input closed")]
    InputClosed,

    #[error("{0} has no legal move")]
    NoMove(crate::board::Player),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("GUI error: {0}")]
    Gui(String),
}
