//! Row slide: circular shift of one row by one slot.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::{EngineError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub const BOTH: [Self; 2] = [Self::Left, Self::Right];

    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "l" | "left" => Ok(Self::Left),
            "r" | "right" => Ok(Self::Right),
            other => Err(format!("unknown direction '{other}'")),
        }
    }
}

/// Slide row `row_index` one slot in `direction`.
///
/// Clears `is_new`/`is_matched` on every tile of the board, since a slide starts
/// a new evaluation cycle. A one-slot row is left in place.
pub fn slide_row(board: &Board, row_index: usize, direction: Direction) -> Result<Board> {
    if row_index >= board.num_rows() {
        return Err(EngineError::IndexOutOfRange {
            index: row_index,
            rows: board.num_rows(),
        });
    }
    tracing::debug!(row = row_index, %direction, "slide row");
    Ok(shift_row(board, row_index, direction))
}

/// Infallible core of [`slide_row`]; `row_index` must be on the board.
pub(crate) fn shift_row(board: &Board, row_index: usize, direction: Direction) -> Board {
    let mut next = board.clone();
    next.clear_flags();

    let Some(slots) = next.row_slots_mut(row_index) else {
        return next;
    };
    if slots.len() <= 1 {
        return next;
    }
    match direction {
        Direction::Left => slots.rotate_left(1),
        Direction::Right => slots.rotate_right(1),
    }
    for (col, slot) in slots.iter_mut().enumerate() {
        if let Some(tile) = slot {
            tile.set_col(col);
        }
    }
    next
}
