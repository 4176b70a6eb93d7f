//! Tile spawning: random empty slot, random palette colour, fresh id.
//!
//! The random source is always supplied by the caller so a seeded generator
//! reproduces a game exactly.

use rand::Rng;

use crate::board::{Board, Tile, TileId};
use crate::palette::Palette;

/// Uniformly pick one empty slot, or `None` if the board is full.
pub fn find_random_empty_cell<R: Rng>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }
    Some(empty[rng.random_range(0..empty.len())])
}

/// Spawn up to `count` tiles from the standard palette.
pub fn spawn_tiles<R: Rng>(board: &Board, count: usize, rng: &mut R) -> Board {
    spawn_tiles_from(board, count, &Palette::standard(), rng)
}

/// Spawn up to `count` tiles drawn from `palette`. Stops quietly once the board
/// is full, so fewer than `count` tiles may be placed.
pub fn spawn_tiles_from<R: Rng>(board: &Board, count: usize, palette: &Palette, rng: &mut R) -> Board {
    let mut next = board.clone();
    let mut placed = 0usize;
    for _ in 0..count {
        if !spawn_one(&mut next, palette, rng) {
            break;
        }
        placed += 1;
    }
    tracing::trace!(requested = count, placed, "spawned tiles");
    next
}

/// Place one new tile in a random empty slot. False when the board is full.
pub(crate) fn spawn_one<R: Rng>(board: &mut Board, palette: &Palette, rng: &mut R) -> bool {
    let Some((row, col)) = find_random_empty_cell(board, rng) else {
        return false;
    };
    let color = palette.color(rng.random_range(0..palette.len()));
    let id = fresh_id(board, rng);
    board.place(row, col, Tile::spawned(id, color)).is_ok()
}

/// Random id not already present on `board`.
fn fresh_id<R: Rng>(board: &Board, rng: &mut R) -> TileId {
    loop {
        let id = TileId::new(format!("tile-{:016x}", rng.random::<u64>()));
        if !board.contains_id(&id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::create_board;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_find_random_empty_cell_full_board() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = spawn_tiles(&create_board(4).unwrap(), 10, &mut rng);
        assert!(board.is_full());
        assert_eq!(find_random_empty_cell(&board, &mut rng), None);
    }

    #[test]
    fn test_find_random_empty_cell_single_hole() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = spawn_tiles(&create_board(3).unwrap(), 6, &mut rng);
        board.take(2, 1);
        for _ in 0..20 {
            assert_eq!(find_random_empty_cell(&board, &mut rng), Some((2, 1)));
        }
    }

    #[test]
    fn test_spawn_tiles_partial() {
        let mut rng = StdRng::seed_from_u64(42);
        let board = create_board(5).unwrap();
        let spawned = spawn_tiles(&board, 4, &mut rng);
        assert_eq!(spawned.tile_count(), 4);
        assert!(spawned.tiles().all(Tile::is_new));
        // input snapshot untouched
        assert_eq!(board.tile_count(), 0);
    }

    #[test]
    fn test_spawn_tiles_stops_when_full() {
        let mut rng = StdRng::seed_from_u64(3);
        let board = spawn_tiles(&create_board(3).unwrap(), 100, &mut rng);
        assert_eq!(board.tile_count(), 6);
        let again = spawn_tiles(&board, 5, &mut rng);
        assert_eq!(again, board);
    }

    #[test]
    fn test_spawned_ids_unique_and_positions_synced() {
        let mut rng = StdRng::seed_from_u64(99);
        let board = spawn_tiles(&create_board(8).unwrap(), 36, &mut rng);
        let ids: HashSet<_> = board.tiles().map(|t| t.id().clone()).collect();
        assert_eq!(ids.len(), 36);
        for (r, row) in board.rows().enumerate() {
            for (c, slot) in row.iter().enumerate() {
                let tile = slot.as_ref().unwrap();
                assert_eq!((tile.row(), tile.col()), (r, c));
            }
        }
    }

    #[test]
    fn test_spawn_is_reproducible() {
        let board = create_board(6).unwrap();
        let a = spawn_tiles(&board, 12, &mut StdRng::seed_from_u64(5));
        let b = spawn_tiles(&board, 12, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_spawn_uses_palette() {
        let mut rng = StdRng::seed_from_u64(11);
        let palette = Palette::high_color();
        let board = spawn_tiles_from(&create_board(10).unwrap(), 55, &palette, &mut rng);
        assert!(board.tiles().all(|t| palette.colors().contains(&t.color())));
    }
}
