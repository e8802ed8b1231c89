//! Integer ray rasteriser.
//!
//! [`Line`] walks the pixels from the observer to a target with the classic
//! error-accumulation scheme: the axis with the larger extent is the primary
//! axis and advances one pixel per step, the other advances whenever twice
//! the accumulated error exceeds the primary extent.  [`cast_ray`] paints
//! those pixels until the first occupied hit-map cell.

use glam::IVec2;

use crate::{
    engine::hitmap::HitMap,
    renderer::{Renderer, Rgba},
    world::Pixel,
};

/// Pixels of the segment `from → to`, both ends included, in order.
#[derive(Clone, Debug)]
pub struct Line {
    steep: bool,
    pri: i32,
    sec: i32,
    pri_end: i32,
    pri_step: i32,
    sec_step: i32,
    pri_len: i32,
    sec_len: i32,
    err: i32,
    done: bool,
}

impl Line {
    pub fn new(from: Pixel, to: Pixel) -> Self {
        let d = to - from;
        let steep = d.y.abs() > d.x.abs();
        // transpose steep lines so the primary step is always one pixel
        let (from, to, d) = if steep {
            (flip(from), flip(to), flip(d))
        } else {
            (from, to, d)
        };
        Self {
            steep,
            pri: from.x,
            sec: from.y,
            pri_end: to.x,
            pri_step: d.x.signum(),
            sec_step: d.y.signum(),
            pri_len: d.x.abs(),
            sec_len: d.y.abs(),
            err: 0,
            done: false,
        }
    }
}

#[inline]
fn flip(p: IVec2) -> IVec2 {
    IVec2::new(p.y, p.x)
}

impl Iterator for Line {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        if self.done {
            return None;
        }
        let px = if self.steep {
            IVec2::new(self.sec, self.pri)
        } else {
            IVec2::new(self.pri, self.sec)
        };

        if self.pri == self.pri_end {
            self.done = true;
        } else {
            self.pri += self.pri_step;
            self.err += self.sec_len;
            if 2 * self.err > self.pri_len {
                self.sec += self.sec_step;
                self.err -= self.pri_len;
            }
        }
        Some(px)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = if self.done {
            0
        } else {
            (self.pri_end - self.pri).unsigned_abs() as usize + 1
        };
        (left, Some(left))
    }
}

impl ExactSizeIterator for Line {}

/// Paint the ray `from → to` with `col`, stopping **before** the first
/// blocked cell.  Returns the number of pixels drawn.
///
/// Both end points must lie inside the hit-map.
pub fn cast_ray<R: Renderer + ?Sized>(
    from: Pixel,
    to: Pixel,
    hits: &HitMap,
    renderer: &mut R,
    col: Rgba,
) -> usize {
    let (w, h) = hits.size();
    let inside = |p: Pixel| p.x >= 0 && p.y >= 0 && (p.x as usize) < w && (p.y as usize) < h;
    assert!(inside(from) && inside(to), "ray {from} → {to} leaves the {w}x{h} canvas");

    let mut drawn = 0;
    for p in Line::new(from, to) {
        let (x, y) = (p.x as usize, p.y as usize);
        if hits.is_blocked(x, y) {
            break;
        }
        renderer.put_pixel(x, y, col);
        drawn += 1;
    }
    drawn
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
