//! Slide probes: hypothetical single slides used for hints and the game-over
//! decision. Probes never touch the caller's board.

use std::fmt;

use crate::board::Board;
use crate::matcher::{MIN_MATCH_LENGTH, has_any_match};
use crate::slide::{Direction, shift_row};

/// One row slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideMove {
    pub row: usize,
    pub direction: Direction,
}

impl fmt::Display for SlideMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {} {}", self.row, self.direction)
    }
}

/// Every slide that actually shifts something: rows of two or more slots, both
/// directions, apex first, left before right.
pub fn all_slides(board: &Board) -> impl Iterator<Item = SlideMove> {
    (1..board.num_rows()).flat_map(|row| {
        Direction::BOTH
            .into_iter()
            .map(move |direction| SlideMove { row, direction })
    })
}

/// First slide whose result contains a run of `min_len` or more.
pub fn find_matching_slide(board: &Board, min_len: usize) -> Option<SlideMove> {
    all_slides(board).find(|mv| has_any_match(&shift_row(board, mv.row, mv.direction), min_len))
}

/// Terminal check with the default run length.
pub fn check_game_over(board: &Board) -> bool {
    is_terminal(board, MIN_MATCH_LENGTH)
}

/// A board is terminal when it is full, holds no match, and no single slide of
/// any row in either direction would create one. Multi-slide sequences are not
/// considered. The apex row is not probed: sliding a one-slot row shifts
/// nothing.
pub fn is_terminal(board: &Board, min_len: usize) -> bool {
    if !board.is_full() {
        return false;
    }
    if has_any_match(board, min_len) {
        return false;
    }
    let over = find_matching_slide(board, min_len).is_none();
    if over {
        tracing::debug!(rows = board.num_rows(), "no slide produces a match");
    }
    over
}
