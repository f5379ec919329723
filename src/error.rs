use thiserror::Error;

/// Errors raised by the maze core
///
/// Game outcomes (hitting a wall, reaching the goal, running out of time) are
/// not errors; they are reported through `StepStatus`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("grid must be at least 3x3, got {width}x{height}")]
    GridTooSmall { width: usize, height: usize },

    #[error("wall probability must be within [0, 1], got {0}")]
    InvalidWallProbability(f64),

    #[error("tick rate must be positive")]
    InvalidTickRate,

    #[error("time limit must be positive")]
    InvalidTimeLimit,

    #[error("maze has no open interior cell")]
    NoOpenCell,

    #[error("{role} position ({x}, {y}) is not an open cell")]
    BlockedPlacement { role: &'static str, x: i32, y: i32 },

    #[error("position ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i32, y: i32 },

    #[error("border cell ({x}, {y}) must stay a wall")]
    UnsealedBorder { x: i32, y: i32 },

    #[error("maze row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown maze cell character {0:?}")]
    UnknownCell(char),

    #[error("action vector must have 4 entries, got {0}")]
    ActionLength(usize),
}

pub type GameResult<T> = std::result::Result<T, GameError>;
