//! Plain-text board dump: a centred triangle, one glyph per slot.
//!
//! Tiles print as their colour letter, lower-case while marked matched; empty
//! slots print as `.`. The coloured variant wraps each glyph in an RGB
//! foreground for terminals.

use std::fmt::Write as _;

use crossterm::style::{Color, Stylize};

use crate::board::{Board, Tile};

const EMPTY_GLYPH: char = '.';

fn glyph(slot: Option<&Tile>) -> char {
    match slot {
        Some(tile) if tile.is_matched() => tile.color().glyph().to_ascii_lowercase(),
        Some(tile) => tile.color().glyph(),
        None => EMPTY_GLYPH,
    }
}

/// Board without escape codes. Each line ends with `\n`.
pub fn render_plain(board: &Board) -> String {
    render_with(board, |slot| glyph(slot).to_string())
}

/// Board with ANSI colour for each tile.
pub fn render_colored(board: &Board) -> String {
    render_with(board, |slot| match slot {
        Some(tile) => {
            let (r, g, b) = tile.color().rgb();
            let styled = glyph(slot).to_string().with(Color::Rgb { r, g, b });
            if tile.is_new() {
                styled.bold().to_string()
            } else {
                styled.to_string()
            }
        }
        None => EMPTY_GLYPH.to_string().dark_grey().to_string(),
    })
}

fn render_with(board: &Board, cell: impl Fn(Option<&Tile>) -> String) -> String {
    let n = board.num_rows();
    let mut out = String::new();
    for (r, row) in board.rows().enumerate() {
        let _ = write!(out, "{:>2} ", r);
        out.push_str(&" ".repeat(n - 1 - r));
        let cells: Vec<String> = row.iter().map(|slot| cell(slot.as_ref())).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}
