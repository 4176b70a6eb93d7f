//! trislide — a sliding tile-matching puzzle on a triangular board.
//!
//! The engine is a set of pure functions over [`Board`] snapshots: every call
//! takes a board by reference and returns a new one. Randomness is always
//! passed in, so a seeded generator replays a game exactly.
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use trislide::{Direction, create_board, find_and_mark_matches, slide_row, spawn_tiles};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let board = spawn_tiles(&create_board(5).unwrap(), 15, &mut rng);
//! let slid = slide_row(&board, 4, Direction::Left).unwrap();
//! let outcome = find_and_mark_matches(&slid);
//! assert_eq!(outcome.has_matches, outcome.match_count > 0);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod gravity;
pub mod matcher;
pub mod palette;
pub mod probe;
pub mod render;
pub mod slide;
pub mod spawn;

pub use board::{Board, Tile, TileId, create_board};
pub use config::{GameConfig, Rules};
pub use error::{EngineError, Result};
pub use game::{Game, TurnReport};
pub use gravity::{apply_gravity_and_spawn, remove_matched_tiles};
pub use matcher::{MIN_MATCH_LENGTH, MatchOutcome, find_and_mark_matches};
pub use palette::{Palette, TileColor};
pub use probe::{SlideMove, check_game_over, find_matching_slide};
pub use slide::{Direction, slide_row};
pub use spawn::{find_random_empty_cell, spawn_tiles};
