//! Engine errors: caller mistakes the engine rejects instead of clamping.

use thiserror::Error;

use crate::board::TileId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid board dimension: {0} rows (need at least 1)")]
    InvalidDimension(usize),
    #[error("row index {index} out of range for a board of {rows} rows")]
    IndexOutOfRange { index: usize, rows: usize },
    #[error("slot ({row}, {col}) is outside the board")]
    SlotOutOfRange { row: usize, col: usize },
    #[error("palette needs at least {min} distinct colours, got {got}")]
    InvalidPalette { got: usize, min: usize },
    #[error("minimum match length must be at least 3, got {0}")]
    InvalidMatchLength(usize),
    #[error("tile id '{0}' is already on the board")]
    DuplicateTileId(TileId),
    #[error("the game is over; no further slides are accepted")]
    GameOver,
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
