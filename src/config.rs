//! Game configuration: board size, opening tile count, palette, run length.

use rand::Rng;

use crate::board::Board;
use crate::error::{EngineError, Result};
use crate::gravity::apply_gravity_and_spawn_from;
use crate::matcher::{MIN_MATCH_LENGTH, MatchOutcome, mark_runs};
use crate::palette::Palette;
use crate::probe::{SlideMove, find_matching_slide, is_terminal};
use crate::spawn::spawn_tiles_from;

pub const DEFAULT_ROWS: usize = 7;

/// Palette and minimum run length, applied consistently by every engine call
/// a game makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    palette: Palette,
    min_match: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            palette: Palette::standard(),
            min_match: MIN_MATCH_LENGTH,
        }
    }
}

impl Rules {
    /// Runs shorter than [`MIN_MATCH_LENGTH`] are rejected.
    pub fn new(palette: Palette, min_match: usize) -> Result<Self> {
        if min_match < MIN_MATCH_LENGTH {
            return Err(EngineError::InvalidMatchLength(min_match));
        }
        Ok(Self { palette, min_match })
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn min_match(&self) -> usize {
        self.min_match
    }

    pub fn spawn_tiles<R: Rng>(&self, board: &Board, count: usize, rng: &mut R) -> Board {
        spawn_tiles_from(board, count, &self.palette, rng)
    }

    pub fn find_and_mark_matches(&self, board: &Board) -> MatchOutcome {
        mark_runs(board, self.min_match)
    }

    pub fn apply_gravity_and_spawn<R: Rng>(&self, board: &Board, rng: &mut R) -> Board {
        apply_gravity_and_spawn_from(board, &self.palette, rng)
    }

    pub fn check_game_over(&self, board: &Board) -> bool {
        is_terminal(board, self.min_match)
    }

    pub fn hint(&self, board: &Board) -> Option<SlideMove> {
        find_matching_slide(board, self.min_match)
    }
}

/// Everything needed to start a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    /// Tiles placed at the start; `None` fills the board.
    pub initial_tiles: Option<usize>,
    pub rules: Rules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            initial_tiles: None,
            rules: Rules::default(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(EngineError::InvalidDimension(self.rows));
        }
        Ok(())
    }

    /// Opening tile count, capped at the board's slot count.
    pub fn opening_tiles(&self) -> usize {
        let slots = self.rows * (self.rows + 1) / 2;
        self.initial_tiles.map_or(slots, |n| n.min(slots))
    }
}
