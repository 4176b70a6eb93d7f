//! Triangular board: row `r` holds `r + 1` slots, each empty or holding a tile.

use std::fmt;

use crate::error::{EngineError, Result};
use crate::palette::TileColor;

/// Opaque tile identity. Stable across slides and falls so a caller can follow
/// one tile between snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(String);

impl TileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TileId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TileId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One tile. `row`/`col` mirror the slot the tile sits in and are only written
/// by the board as it moves the tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    color: TileColor,
    row: usize,
    col: usize,
    is_new: bool,
    is_matched: bool,
}

impl Tile {
    /// Detached tile; its position is set when it is placed on a board.
    pub fn new(id: impl Into<TileId>, color: TileColor) -> Self {
        Self {
            id: id.into(),
            color,
            row: 0,
            col: 0,
            is_new: false,
            is_matched: false,
        }
    }

    pub(crate) fn spawned(id: TileId, color: TileColor) -> Self {
        Self {
            is_new: true,
            ..Self::new(id, color)
        }
    }

    pub fn id(&self) -> &TileId {
        &self.id
    }

    pub fn color(&self) -> TileColor {
        self.color
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// True for the step right after the tile was spawned.
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// True while the tile is flagged for removal by the current detection pass.
    pub fn is_matched(&self) -> bool {
        self.is_matched
    }

    pub(crate) fn set_col(&mut self, col: usize) {
        self.col = col;
    }

    pub(crate) fn set_matched(&mut self, matched: bool) {
        self.is_matched = matched;
    }

    pub(crate) fn clear_flags(&mut self) {
        self.is_new = false;
        self.is_matched = false;
    }
}

/// Board snapshot. Row lengths are fixed at creation; only slot contents change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// rows[r] has r + 1 slots. rows[0] is the apex.
    rows: Vec<Vec<Option<Tile>>>,
}

/// Empty board of `num_rows` rows.
pub fn create_board(num_rows: usize) -> Result<Board> {
    Board::new(num_rows)
}

impl Board {
    pub fn new(num_rows: usize) -> Result<Self> {
        if num_rows == 0 {
            return Err(EngineError::InvalidDimension(num_rows));
        }
        let rows = (0..num_rows).map(|r| vec![None; r + 1]).collect();
        Ok(Self { rows })
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Total slot count: n(n+1)/2.
    #[inline]
    pub fn slot_count(&self) -> usize {
        let n = self.num_rows();
        n * (n + 1) / 2
    }

    /// Slots of row `r`, or `None` past the last row.
    pub fn row(&self, r: usize) -> Option<&[Option<Tile>]> {
        self.rows.get(r).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<Tile>]> {
        self.rows.iter().map(Vec::as_slice)
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.num_rows() && col <= row
    }

    /// Tile at `(row, col)`; `None` when empty or outside the board.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        self.rows.get(row).and_then(|r| r.get(col)).and_then(Option::as_ref)
    }

    #[inline]
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.contains(row, col) && self.get(row, col).is_none()
    }

    /// Put `tile` in slot `(row, col)`, syncing its position fields. Returns
    /// whatever the slot held before.
    ///
    /// Fails with [`EngineError::DuplicateTileId`] when a tile with the same id
    /// sits in any other slot; replacing a tile with one of its own id is fine.
    pub fn place(&mut self, row: usize, col: usize, mut tile: Tile) -> Result<Option<Tile>> {
        if !self.contains(row, col) {
            return Err(EngineError::SlotOutOfRange { row, col });
        }
        if self
            .tiles()
            .any(|t| t.id == tile.id && (t.row, t.col) != (row, col))
        {
            return Err(EngineError::DuplicateTileId(tile.id));
        }
        let slot = self
            .rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(EngineError::SlotOutOfRange { row, col })?;
        tile.row = row;
        tile.col = col;
        Ok(slot.replace(tile))
    }

    /// Empty slot `(row, col)` and return its tile.
    pub fn take(&mut self, row: usize, col: usize) -> Option<Tile> {
        self.rows.get_mut(row).and_then(|r| r.get_mut(col)).and_then(Option::take)
    }

    /// Move the tile at `from` into the empty slot `to`. Both must be on the board.
    pub(crate) fn move_tile(&mut self, from: (usize, usize), to: (usize, usize)) -> bool {
        if !self.is_empty_at(to.0, to.1) {
            return false;
        }
        match self.take(from.0, from.1) {
            Some(tile) => self.place(to.0, to.1, tile).is_ok(),
            None => false,
        }
    }

    /// Mutable access to row `r`'s slots for in-crate transforms. Callers that
    /// reorder slots must resync each tile's column.
    pub(crate) fn row_slots_mut(&mut self, r: usize) -> Option<&mut Vec<Option<Tile>>> {
        self.rows.get_mut(r)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.rows.iter().flatten().flatten()
    }

    pub(crate) fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.rows.iter_mut().flatten().flatten()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    /// Every empty slot, row-major from the apex.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, slot)| slot.is_none())
                    .map(move |(c, _)| (r, c))
            })
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(Option::is_some)
    }

    pub fn contains_id(&self, id: &TileId) -> bool {
        self.tiles().any(|t| t.id() == id)
    }

    /// Reset `is_new` and `is_matched` on every tile.
    pub(crate) fn clear_flags(&mut self) {
        self.tiles_mut().for_each(Tile::clear_flags);
    }

    pub fn matched_count(&self) -> usize {
        self.tiles().filter(|t| t.is_matched()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render_plain(self))
    }
}
