//! Tile colours and the palette a game draws them from.

use std::fmt;

use crate::error::{EngineError, Result};

/// Smallest palette that still makes runs of three non-trivial.
pub const MIN_PALETTE_SIZE: usize = 3;

/// Every colour a tile can carry. Games use a subset through [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl TileColor {
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Purple,
        Self::Orange,
    ];

    /// Single-letter glyph used by the plain-text board dump.
    pub fn glyph(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Blue => 'B',
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Purple => 'P',
            Self::Orange => 'O',
        }
    }

    /// One Dark RGB triple for terminal output.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Red => (0xE0, 0x6C, 0x75),
            Self::Blue => (0x61, 0xAF, 0xEF),
            Self::Green => (0x98, 0xC3, 0x79),
            Self::Yellow => (0xE5, 0xC0, 0x7B),
            Self::Purple => (0xC6, 0x78, 0xDD),
            Self::Orange => (0xD1, 0x9A, 0x66),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Orange => "orange",
        }
    }
}

impl fmt::Display for TileColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered, duplicate-free set of colours that spawned tiles are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<TileColor>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

impl Palette {
    /// Four colours: red, blue, green, yellow.
    pub fn standard() -> Self {
        Self {
            colors: TileColor::ALL[..4].to_vec(),
        }
    }

    /// High-color mode: all six colours (adds purple and orange).
    pub fn high_color() -> Self {
        Self {
            colors: TileColor::ALL.to_vec(),
        }
    }

    /// Custom palette. Duplicates are dropped (first occurrence wins); fewer than
    /// [`MIN_PALETTE_SIZE`] distinct colours is rejected.
    pub fn new(colors: impl IntoIterator<Item = TileColor>) -> Result<Self> {
        let mut distinct: Vec<TileColor> = Vec::new();
        for color in colors {
            if !distinct.contains(&color) {
                distinct.push(color);
            }
        }
        if distinct.len() < MIN_PALETTE_SIZE {
            return Err(EngineError::InvalidPalette {
                got: distinct.len(),
                min: MIN_PALETTE_SIZE,
            });
        }
        Ok(Self { colors: distinct })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[TileColor] {
        &self.colors
    }

    /// Colour at `index`, wrapping past the end.
    #[inline]
    pub fn color(&self, index: usize) -> TileColor {
        self.colors[index % self.colors.len()]
    }
}
