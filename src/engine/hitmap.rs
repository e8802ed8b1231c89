use log::trace;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::{
    renderer::{Renderer, Rgba, pack_color},
    world::{EMPTY, Map},
};

/// Fallback wall colour, also the colour of tag `'0'`.
pub const WALL_COLOR: Rgba = pack_color(0, 255, 255);

static WALL_COLORS: Lazy<HashMap<u8, Rgba>> = Lazy::new(|| {
    HashMap::from([
        (b'0', WALL_COLOR),
        (b'1', pack_color(255, 255, 0)),
        (b'2', pack_color(255, 0, 255)),
        (b'3', pack_color(0, 128, 255)),
    ])
});

/// Colour used to paint a wall tile tagged `tag`.
pub fn wall_color(tag: u8) -> Rgba {
    WALL_COLORS.get(&tag).copied().unwrap_or(WALL_COLOR)
}

/// Pixel-resolution occupancy grid; one cell per frame-buffer pixel.
///
/// A cell holds [`EMPTY`] over passable space and the wall's tag otherwise.
#[derive(Clone, Debug, Default)]
pub struct HitMap {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl HitMap {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![EMPTY; width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width && y < self.height, "cell ({x},{y}) out of bounds");
        self.cells[y * self.width + x]
    }

    #[inline]
    pub fn is_blocked(&self, x: usize, y: usize) -> bool {
        self.cell(x, y) != EMPTY
    }

    /// Mark one cell; mostly useful for hand-built test scenes.
    pub fn set(&mut self, x: usize, y: usize, tag: u8) {
        assert!(x < self.width && y < self.height, "cell ({x},{y}) out of bounds");
        self.cells[y * self.width + x] = tag;
    }

    /// Reset every cell to passable, resizing if needed.
    pub fn clear(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width * height, EMPTY);
    }

    fn stamp(&mut self, x: usize, y: usize, w: usize, h: usize, tag: u8) {
        for row in y..y + h {
            let base = row * self.width;
            self.cells[base + x..base + x + w].fill(tag);
        }
    }

    /// Rebuild from `map` and paint the wall blocks into `renderer`.
    ///
    /// Every occupied tile becomes a `tile.0 × tile.1` block in both the grid
    /// and the frame.  Must run after `begin_frame` and before any ray is
    /// cast.
    pub fn rasterize<R: Renderer + ?Sized>(&mut self, map: &Map, tile: (usize, usize), renderer: &mut R) {
        let (w, h) = renderer.size();
        assert!(
            map.width() * tile.0 <= w && map.height() * tile.1 <= h,
            "map of {}x{} tiles at {:?}px does not fit a {w}x{h} frame",
            map.width(),
            map.height(),
            tile
        );
        self.clear(w, h);

        let mut stamped = 0usize;
        for (tx, ty, tag) in map.walls() {
            let (x, y) = (tx * tile.0, ty * tile.1);
            renderer.fill_rect(x as i32, y as i32, tile.0, tile.1, wall_color(tag));
            self.stamp(x, y, tile.0, tile.1, tag);
            stamped += 1;
        }
        trace!("hit-map rebuilt: {stamped} wall tiles");
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::FrameBuffer;

    fn tiny_map() -> Map {
        // 4×2 tiles
        Map::new(4, 2, "1  2 3  ").unwrap()
    }

    #[test]
    fn rasterize_matches_tiles() {
        let map = tiny_map();
        let mut fb = FrameBuffer::default();
        fb.begin_frame(8, 4);
        let mut hits = HitMap::default();
        hits.rasterize(&map, (2, 2), &mut fb);

        assert_eq!(hits.size(), (8, 4));
        for y in 0..4 {
            for x in 0..8 {
                let tile = map.tile(x / 2, y / 2);
                assert_eq!(hits.cell(x, y), tile, "cell ({x},{y})");
                if tile == EMPTY {
                    assert_ne!(fb.pixel(x, y), wall_color(tile));
                } else {
                    assert_eq!(fb.pixel(x, y), wall_color(tile));
                }
            }
        }
    }

    #[test]
    fn rebuild_clears_stale_cells() {
        let mut fb = FrameBuffer::default();
        fb.begin_frame(4, 4);
        let mut hits = HitMap::new(4, 4);
        hits.set(1, 1, b'9');

        let empty = Map::new(2, 2, "    ").unwrap();
        hits.rasterize(&empty, (2, 2), &mut fb);
        assert!(!hits.is_blocked(1, 1));
    }

    #[test]
    fn unknown_tags_fall_back_to_default_colour() {
        assert_eq!(wall_color(b'#'), WALL_COLOR);
        assert_ne!(wall_color(b'1'), WALL_COLOR);
    }
}
