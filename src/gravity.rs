//! Removal of matched tiles, settling under gravity, and top-up spawning.

use rand::Rng;

use crate::board::Board;
use crate::palette::Palette;
use crate::spawn::spawn_one;

/// Empty every slot whose tile is marked matched.
pub fn remove_matched_tiles(board: &Board) -> Board {
    let mut next = board.clone();
    let mut removed = 0usize;
    for r in 0..next.num_rows() {
        if let Some(row) = next.row_slots_mut(r) {
            for slot in row.iter_mut() {
                if slot.as_ref().is_some_and(|t| t.is_matched()) {
                    *slot = None;
                    removed += 1;
                }
            }
        }
    }
    tracing::debug!(removed, "matched tiles removed");
    next
}

/// Settle with the standard palette for refills.
pub fn apply_gravity_and_spawn<R: Rng>(board: &Board, rng: &mut R) -> Board {
    apply_gravity_and_spawn_from(board, &Palette::standard(), rng)
}

/// Clear transient flags, let every tile fall as far as it can, then fill every
/// remaining hole with a new tile. The result is always full.
pub fn apply_gravity_and_spawn_from<R: Rng>(board: &Board, palette: &Palette, rng: &mut R) -> Board {
    let mut next = board.clone();
    next.clear_flags();
    let moved = settle(&mut next);

    let mut spawned = 0usize;
    while spawn_one(&mut next, palette, rng) {
        spawned += 1;
    }
    tracing::debug!(moved, spawned, "board settled and refilled");
    next
}

/// Let tiles fall until none can move. Returns the number of single-level
/// falls performed.
///
/// A tile at `(r, c)` drops to `(r + 1, c)` if that slot is empty, otherwise to
/// `(r + 1, c + 1)` if that one is. Rows are processed from the base upwards and
/// each tile falls all the way before the next is considered: by the time row
/// `r` is visited everything below it is already at rest, and a tile leaving
/// row `r` only frees slots for row `r - 1`, so one sweep reaches the fixed
/// point.
pub fn settle(board: &mut Board) -> usize {
    let n = board.num_rows();
    let mut moves = 0usize;
    for r in (0..n.saturating_sub(1)).rev() {
        for c in 0..=r {
            let (mut row, mut col) = (r, c);
            while row + 1 < n && board.get(row, col).is_some() {
                let target = if board.is_empty_at(row + 1, col) {
                    (row + 1, col)
                } else if board.is_empty_at(row + 1, col + 1) {
                    (row + 1, col + 1)
                } else {
                    break;
                };
                if !board.move_tile((row, col), target) {
                    break;
                }
                tracing::trace!(from = ?(row, col), to = ?target, "tile fell");
                (row, col) = target;
                moves += 1;
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Tile, create_board};
    use crate::matcher::find_and_mark_matches;
    use crate::palette::TileColor;
    use crate::spawn::spawn_tiles;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// True if no tile could fall any further.
    fn is_settled(board: &Board) -> bool {
        let n = board.num_rows();
        board.tiles().all(|t| {
            t.row() + 1 >= n
                || (!board.is_empty_at(t.row() + 1, t.col())
                    && !board.is_empty_at(t.row() + 1, t.col() + 1))
        })
    }

    #[test]
    fn test_remove_matched_tiles() {
        let mut board = create_board(3).unwrap();
        for c in 0..3 {
            board.place(2, c, Tile::new(format!("r{c}"), TileColor::Red)).unwrap();
        }
        board.place(1, 0, Tile::new("b", TileColor::Blue)).unwrap();
        let outcome = find_and_mark_matches(&board);
        assert_eq!(outcome.match_count, 3);
        let cleared = remove_matched_tiles(&outcome.board);
        assert!(cleared.row(2).unwrap().iter().all(Option::is_none));
        assert_eq!(cleared.get(1, 0).unwrap().id().as_str(), "b");
    }

    #[test]
    fn test_settle_straight_down() {
        let mut board = create_board(4).unwrap();
        board.place(0, 0, Tile::new("a", TileColor::Red)).unwrap();
        let moves = settle(&mut board);
        assert_eq!(moves, 3);
        let tile = board.get(3, 0).unwrap();
        assert_eq!((tile.row(), tile.col()), (3, 0));
    }

    #[test]
    fn test_settle_diagonal_when_blocked() {
        let mut board = create_board(3).unwrap();
        board.place(2, 0, Tile::new("floor", TileColor::Blue)).unwrap();
        board.place(1, 0, Tile::new("a", TileColor::Red)).unwrap();
        settle(&mut board);
        assert_eq!(board.get(1, 0), None);
        assert_eq!(board.get(2, 1).unwrap().id().as_str(), "a");
    }

    #[test]
    fn test_settle_chains_fall_through() {
        let mut board = create_board(5).unwrap();
        // a column of tiles hanging above an empty base
        for r in 0..3 {
            board.place(r, 0, Tile::new(format!("t{r}"), TileColor::Green)).unwrap();
        }
        settle(&mut board);
        assert!(is_settled(&board));
        assert_eq!(board.tile_count(), 3);
        assert!(board.row(4).unwrap().iter().flatten().count() >= 1);
    }

    #[test]
    fn test_gravity_and_spawn_fills_board() {
        let mut rng = StdRng::seed_from_u64(21);
        let full = spawn_tiles(&create_board(6).unwrap(), 21, &mut rng);
        let mut holed = full.clone();
        holed.take(5, 2);
        holed.take(3, 1);
        holed.take(0, 0);
        let refilled = apply_gravity_and_spawn(&holed, &mut rng);
        assert!(refilled.is_full());
        assert_eq!(refilled.tile_count(), 21);
        assert_eq!(refilled.tiles().filter(|t| t.is_new()).count(), 3);
        for (r, row) in refilled.rows().enumerate() {
            for (c, slot) in row.iter().enumerate() {
                let tile = slot.as_ref().unwrap();
                assert_eq!((tile.row(), tile.col()), (r, c));
            }
        }
    }

    #[test]
    fn test_gravity_keeps_identity() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut board = create_board(3).unwrap();
        board.place(0, 0, Tile::new("apex", TileColor::Yellow)).unwrap();
        let refilled = apply_gravity_and_spawn(&board, &mut rng);
        let apex = refilled.tiles().find(|t| t.id().as_str() == "apex").unwrap();
        assert_eq!(apex.row(), 2);
        assert!(!apex.is_new());
    }

    #[test]
    fn test_gravity_on_full_board_is_identity_modulo_flags() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut full = spawn_tiles(&create_board(5).unwrap(), 15, &mut rng);
        full.clear_flags();
        let after = apply_gravity_and_spawn(&full, &mut rng);
        assert_eq!(after, full);
    }
}
