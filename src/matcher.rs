//! Match detection over the three line families of the triangular lattice.
//!
//! A slot `(r, c)` has two children one row down, `(r + 1, c)` and
//! `(r + 1, c + 1)`. That gives three kinds of straight line:
//!
//! - horizontal: one row, left to right;
//! - left-leaning: `(r, c), (r + 1, c), (r + 2, c), ...` (fixed column);
//! - right-leaning: `(r, c), (r + 1, c + 1), ...` (fixed `r - c`).
//!
//! Every maximal run of one colour at least `min_len` long is marked in full.

use crate::board::Board;

/// Default minimum run length.
pub const MIN_MATCH_LENGTH: usize = 3;

/// Result of one detection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Snapshot with `is_matched` set on every tile in a qualifying run.
    pub board: Board,
    pub has_matches: bool,
    /// Distinct tiles marked; a tile on two crossing runs counts once.
    pub match_count: usize,
}

/// Mark runs of [`MIN_MATCH_LENGTH`] or more.
pub fn find_and_mark_matches(board: &Board) -> MatchOutcome {
    mark_runs(board, MIN_MATCH_LENGTH)
}

/// Mark runs of `min_len` or more. Clears stale marks first; removes nothing.
pub fn mark_runs(board: &Board, min_len: usize) -> MatchOutcome {
    let mut next = board.clone();
    for tile in next.tiles_mut() {
        tile.set_matched(false);
    }

    let mut match_count = 0usize;
    for line in lines(board.num_rows()) {
        for run in runs(&next, &line, min_len) {
            for &(r, c) in run {
                if let Some(tile) = next_tile_mut(&mut next, r, c) {
                    if !tile.is_matched() {
                        tile.set_matched(true);
                        match_count += 1;
                    }
                }
            }
        }
    }

    if match_count > 0 {
        tracing::debug!(match_count, min_len, "runs marked");
    }
    MatchOutcome {
        board: next,
        has_matches: match_count > 0,
        match_count,
    }
}

/// True if `board` holds any qualifying run. Leaves no marks behind.
pub fn has_any_match(board: &Board, min_len: usize) -> bool {
    lines(board.num_rows())
        .iter()
        .any(|line| !runs(board, line, min_len).is_empty())
}

fn next_tile_mut(board: &mut Board, r: usize, c: usize) -> Option<&mut crate::board::Tile> {
    board
        .row_slots_mut(r)
        .and_then(|row| row.get_mut(c))
        .and_then(Option::as_mut)
}

/// Every scan line of a board with `n` rows, each as an ordered list of slots.
/// Lines shorter than two slots are skipped.
fn lines(n: usize) -> Vec<Vec<(usize, usize)>> {
    let mut out = Vec::with_capacity(3 * n);
    // horizontal
    for r in 1..n {
        out.push((0..=r).map(|c| (r, c)).collect());
    }
    // left-leaning: column c runs from row c to the base
    for c in 0..n.saturating_sub(1) {
        out.push((c..n).map(|r| (r, c)).collect());
    }
    // right-leaning: offset d = r - c, starting at (d, 0)
    for d in 0..n.saturating_sub(1) {
        out.push((d..n).map(|r| (r, r - d)).collect());
    }
    out
}

/// Maximal same-colour runs along `line` of at least `min_len` slots.
fn runs<'a>(board: &Board, line: &'a [(usize, usize)], min_len: usize) -> Vec<&'a [(usize, usize)]> {
    let color_at = |i: usize| {
        let (r, c) = line[i];
        board.get(r, c).map(crate::board::Tile::color)
    };

    let mut found = Vec::new();
    let mut start = 0;
    while start < line.len() {
        let Some(color) = color_at(start) else {
            start += 1;
            continue;
        };
        let mut end = start + 1;
        while end < line.len() && color_at(end) == Some(color) {
            end += 1;
        }
        if end - start >= min_len {
            found.push(&line[start..end]);
        }
        start = end;
    }
    found
}
