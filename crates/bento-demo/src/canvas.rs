#![forbid(unsafe_code)]

//! Character canvas for printing placed tiles.

use bento_core::geometry::Size;

use crate::tiles::Tile;

/// Render visible tiles into `size.height` lines of `size.width` characters.
///
/// Cells outside every tile are `.`; collapsed tiles draw nothing. Later
/// tiles paint over earlier ones.
#[must_use]
pub fn render(tiles: &[Tile], size: Size) -> String {
    let width = usize::from(size.width);
    let height = usize::from(size.height);
    let mut cells = vec!['.'; width * height];

    for tile in tiles.iter().filter(|tile| tile.is_visible()) {
        let Some(frame) = tile.frame() else {
            continue;
        };
        let glyph = tile.glyph();
        let right = usize::from(frame.right()).min(width);
        let bottom = usize::from(frame.bottom()).min(height);
        for y in usize::from(frame.y)..bottom {
            for x in usize::from(frame.x)..right {
                cells[y * width + x] = glyph;
            }
        }
    }

    let mut out = String::with_capacity((width + 1) * height);
    for row in cells.chunks(width.max(1)).take(height) {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bento_core::geometry::{Point, ProposedSize};
    use bento_layout::LayoutElement;

    fn placed(id: usize, color: &'static str, x: u16, y: u16, w: u16, h: u16) -> Tile {
        let mut tile = Tile::new(id, color);
        tile.place(Point::new(x, y), ProposedSize::exact(Size::new(w, h)));
        tile
    }

    #[test]
    fn renders_tiles_and_gaps() {
        let tiles = [
            placed(0, "blue", 0, 0, 2, 1),
            placed(1, "green", 3, 0, 1, 2),
        ];
        assert_eq!(render(&tiles, Size::new(4, 2)), "bb.G\n...G\n");
    }

    #[test]
    fn clips_to_canvas() {
        let tiles = [placed(0, "teal", 1, 1, 10, 10)];
        assert_eq!(render(&tiles, Size::new(3, 2)), "...\n.tt\n");
    }

    #[test]
    fn collapsed_tiles_draw_nothing() {
        let mut tile = placed(0, "blue", 0, 0, 2, 2);
        tile.place(Point::ZERO, ProposedSize::ZERO);
        assert_eq!(render(&[tile], Size::new(2, 1)), "..\n");
    }

    #[test]
    fn empty_canvas() {
        assert_eq!(render(&[], Size::ZERO), "");
    }
}
