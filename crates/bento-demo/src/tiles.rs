#![forbid(unsafe_code)]

//! Colored tiles: the demo's layout elements.

use bento_core::geometry::{Point, ProposedSize, Rect, Size};
use bento_layout::LayoutElement;
use serde::Serialize;

/// Palette cycled through when tiles are created.
pub const SAMPLE_COLORS: [&str; 5] = ["blue", "green", "yellow", "teal", "black"];

/// Size a tile reports along an unbounded dimension.
pub const IDEAL_TILE_SIZE: Size = Size::new(10, 4);

/// A solid block of color that fills whatever space it is offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub id: usize,
    pub color: &'static str,
    frame: Option<Rect>,
}

impl Tile {
    #[must_use]
    pub fn new(id: usize, color: &'static str) -> Self {
        Self {
            id,
            color,
            frame: None,
        }
    }

    /// Last placement, if the tile has been placed.
    #[must_use]
    pub fn frame(&self) -> Option<Rect> {
        self.frame
    }

    /// Placed with a non-empty frame.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.frame.is_some_and(|frame| !frame.is_empty())
    }

    /// Glyph used on the canvas: the first letter of the color, upper-cased
    /// for odd ids so repeated colors stay distinguishable.
    #[must_use]
    pub fn glyph(&self) -> char {
        let first = self.color.chars().next().unwrap_or('#');
        if self.id % 2 == 1 {
            first.to_ascii_uppercase()
        } else {
            first
        }
    }
}

impl LayoutElement for Tile {
    fn preferred_size(&self, proposal: ProposedSize) -> Size {
        proposal.unwrap_or(IDEAL_TILE_SIZE)
    }

    fn place(&mut self, origin: Point, proposal: ProposedSize) {
        self.frame = Some(Rect::from_origin_size(origin, proposal.unwrap_or(Size::ZERO)));
    }
}

/// `count` tiles with ids `0..count`, colors cycling through [`SAMPLE_COLORS`].
#[must_use]
pub fn sample_tiles(count: usize) -> Vec<Tile> {
    (0..count)
        .map(|id| Tile::new(id, SAMPLE_COLORS[id % SAMPLE_COLORS.len()]))
        .collect()
}

/// Drop every tile whose id is listed. Unknown ids are ignored.
pub fn remove_tiles(tiles: &mut Vec<Tile>, ids: &[usize]) -> usize {
    let before = tiles.len();
    tiles.retain(|tile| !ids.contains(&tile.id));
    before - tiles.len()
}

/// Serializable view of one tile after placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileReport {
    pub id: usize,
    pub color: &'static str,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub visible: bool,
}

impl From<&Tile> for TileReport {
    fn from(tile: &Tile) -> Self {
        let frame = tile.frame.unwrap_or_default();
        Self {
            id: tile.id,
            color: tile.color,
            x: frame.x,
            y: frame.y,
            width: frame.width,
            height: frame.height,
            visible: tile.is_visible(),
        }
    }
}
