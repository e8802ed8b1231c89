use crate::error::MapError;

/// Tile value for passable space; every other byte is a wall.
pub const EMPTY: u8 = b' ';

/// Static top-down tile map (immutable after construction).
///
/// Tiles are stored row-major; the byte value of a wall doubles as its
/// wall-type tag for colouring.
#[derive(Clone, Debug)]
pub struct Map {
    w: usize,
    h: usize,
    tiles: Vec<u8>,
}

impl Map {
    /// Build a map from a row-major literal of exactly `w * h` ASCII
    /// characters.
    pub fn new(w: usize, h: usize, literal: &str) -> Result<Self, MapError> {
        if w == 0 || h == 0 {
            return Err(MapError::ZeroDimension);
        }
        if let Some((index, found)) = literal.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
            return Err(MapError::NonAscii { index, found });
        }
        let tiles = literal.as_bytes().to_vec();
        let expected = w * h;
        if tiles.len() != expected {
            return Err(MapError::SizeMismatch {
                expected,
                actual: tiles.len(),
            });
        }
        Ok(Self { w, h, tiles })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    /// Tile at column `x`, row `y`.
    #[inline]
    pub fn tile(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.w && y < self.h, "tile ({x},{y}) out of bounds");
        self.tiles[y * self.w + x]
    }

    #[inline]
    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        self.tile(x, y) != EMPTY
    }

    /// Iterate over every occupied tile as `(x, y, tag)`.
    pub fn walls(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t != EMPTY)
            .map(|(i, &t)| (i % self.w, i / self.w, t))
    }

    /// Pixel size of one tile on a `canvas_w × canvas_h` canvas.
    ///
    /// Fails unless both canvas dimensions are exact multiples of the map's.
    pub fn tile_size(&self, canvas_w: usize, canvas_h: usize) -> Result<(usize, usize), MapError> {
        if canvas_w == 0 || canvas_w % self.w != 0 {
            return Err(MapError::NotAMultiple {
                axis: "width",
                canvas: canvas_w,
                map: self.w,
            });
        }
        if canvas_h == 0 || canvas_h % self.h != 0 {
            return Err(MapError::NotAMultiple {
                axis: "height",
                canvas: canvas_h,
                map: self.h,
            });
        }
        Ok((canvas_w / self.w, canvas_h / self.h))
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::levels;

    #[test]
    fn reference_map_is_16_by_16() {
        let map = Map::new(16, 16, levels::REFERENCE).unwrap();
        assert_eq!(map.width(), 16);
        assert_eq!(map.height(), 16);
        assert!(map.is_wall(0, 0));
        assert!(!map.is_wall(1, 1));
        assert_eq!(map.tile(6, 5), b'3');
    }

    #[test]
    fn literal_of_wrong_length_is_rejected() {
        let short = &levels::REFERENCE[..255];
        assert_eq!(
            Map::new(16, 16, short).unwrap_err(),
            MapError::SizeMismatch {
                expected: 256,
                actual: 255
            }
        );

        let long = format!("{} ", levels::REFERENCE);
        assert!(matches!(
            Map::new(16, 16, &long),
            Err(MapError::SizeMismatch { actual: 257, .. })
        ));
    }

    #[test]
    fn non_ascii_tag_is_rejected_explicitly() {
        let literal = format!("{}é", &levels::REFERENCE[..255]);
        assert_eq!(literal.chars().count(), 256);
        assert_eq!(
            Map::new(16, 16, &literal).unwrap_err(),
            MapError::NonAscii {
                index: 255,
                found: 'é'
            }
        );
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(Map::new(0, 4, "").unwrap_err(), MapError::ZeroDimension);
    }

    #[test]
    fn walls_iterates_occupied_tiles_only() {
        let map = Map::new(3, 2, "1 2  3").unwrap();
        let walls: Vec<_> = map.walls().collect();
        assert_eq!(walls, vec![(0, 0, b'1'), (2, 0, b'2'), (2, 1, b'3')]);
    }

    #[test]
    fn tile_size_requires_exact_multiples() {
        let map = Map::new(16, 16, levels::REFERENCE).unwrap();
        assert_eq!(map.tile_size(512, 512).unwrap(), (32, 32));
        assert_eq!(map.tile_size(512, 256).unwrap(), (32, 16));
        assert!(matches!(
            map.tile_size(500, 512),
            Err(MapError::NotAMultiple { axis: "width", .. })
        ));
        assert!(matches!(
            map.tile_size(512, 0),
            Err(MapError::NotAMultiple { axis: "height", .. })
        ));
    }
}
