//! trislide — slide rows of a triangular board to line up three of a colour.

mod app;
mod input;

use anyhow::{Context, Result};
use app::App;
use clap::{Parser, ValueEnum};
use tracing_subscriber::filter::LevelFilter;
use trislide::config::DEFAULT_ROWS;
use trislide::{EngineError, GameConfig, MIN_MATCH_LENGTH, Palette, Rules};

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = args.game_config().context("invalid game settings")?;
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut app = App::new(&args, &config, seed)?;
    app.run()?;
    Ok(())
}

/// Triangular sliding tile-matching puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "trislide",
    version,
    about = "Slide rows of a triangular board to line up runs of one colour.",
    long_about = "trislide is a tile-matching puzzle on a triangular board. Row r holds r + 1 tiles.\n\n\
        Sliding a row rotates it by one slot. Runs of three or more tiles of one colour, \
        horizontally or along either slant, are cleared; the tiles above fall in and new \
        tiles fill the gaps. The game ends when no single slide can make a match.\n\n\
        COMMANDS (play mode, one per line on stdin):\n  l <row>  slide left    r <row>  slide right\n  \
        hint     suggest a move    show     redraw    help     list commands    q  quit"
)]
pub struct Args {
    /// Play from stdin commands, or let a bot play.
    #[arg(short, long, default_value = "play")]
    pub mode: Mode,

    /// Number of rows in the triangle.
    #[arg(long, default_value_t = DEFAULT_ROWS, value_name = "ROWS")]
    pub rows: usize,

    /// Tiles placed at the start (defaults to a full board). The rest fall and refill.
    #[arg(long, value_name = "N")]
    pub initial_tiles: Option<usize>,

    /// Minimum run length that clears.
    #[arg(long, default_value_t = MIN_MATCH_LENGTH, value_name = "N")]
    pub min_match: usize,

    /// High color mode: use 6 colors (adds purple, orange) instead of 4.
    #[arg(long)]
    pub high_color: bool,

    /// Seed for the tile generator. Random when not set.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// In mode 'auto': stop after this many slides.
    #[arg(long, default_value = "500", value_name = "N")]
    pub max_moves: u32,

    /// Print the board without colour escapes.
    #[arg(long)]
    pub no_color: bool,

    /// Log level: off, error, warn, info, debug, trace.
    #[arg(long, default_value = "warn", value_parser = clap::value_parser!(LevelFilter))]
    pub log_level: LevelFilter,
}

impl Args {
    pub fn game_config(&self) -> Result<GameConfig, EngineError> {
        let palette = if self.high_color {
            Palette::high_color()
        } else {
            Palette::standard()
        };
        let config = GameConfig {
            rows: self.rows,
            initial_tiles: self.initial_tiles,
            rules: Rules::new(palette, self.min_match)?,
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    #[default]
    Play,
    #[value(alias = "bot")]
    Auto,
}
