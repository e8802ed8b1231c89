//! ---------------------------------------------------------------------------
//! Software (CPU) frame-buffer
//!
//! * Owns a row-major `Vec<u32>` in **0xAARRGGBB** format, origin top-left.
//! * `begin_frame` overwrites every pixel with the background gradient, so no
//!   state leaks from one frame into the next.
//! ---------------------------------------------------------------------------

use crate::renderer::{Renderer, Rgba, pack_color};

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

#[derive(Default)]
pub struct FrameBuffer {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl FrameBuffer {
    /// Borrow the pixels of the current frame.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.scratch
    }

    /// Read back one pixel.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        assert!(x < self.width && y < self.height, "pixel ({x},{y}) out of frame");
        self.scratch[y * self.width + x]
    }

    /// Background: red ramps top→bottom, green ramps left→right.
    fn fill_gradient(&mut self) {
        let (w, h) = (self.width, self.height);
        for (y, row) in self.scratch.chunks_exact_mut(w).enumerate() {
            let r = (255 * y / h) as u8;
            for (x, px) in row.iter_mut().enumerate() {
                *px = pack_color(r, (255 * x / w) as u8, 0);
            }
        }
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for FrameBuffer {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }
        if w * h > 0 {
            self.fill_gradient();
        }
    }

    #[inline]
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    fn put_pixel(&mut self, x: usize, y: usize, col: Rgba) {
        assert!(x < self.width && y < self.height, "pixel ({x},{y}) out of frame");
        self.scratch[y * self.width + x] = col;
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: usize, h: usize, col: Rgba) {
        let x0 = x.max(0) as usize;
        let y0 = y.max(0) as usize;
        let x1 = (x + w as i32).clamp(0, self.width as i32) as usize;
        let y1 = (y + h as i32).clamp(0, self.height as i32) as usize;
        if x0 >= x1 {
            return;
        }
        for row in y0..y1 {
            let base = row * self.width;
            self.scratch[base + x0..base + x1].fill(col);
        }
    }

    fn end_frame<F, T>(&mut self, submit: F) -> T
    where
        F: FnOnce(&[Rgba], usize, usize) -> T,
    {
        submit(&self.scratch, self.width, self.height)
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_frame_paints_gradient() {
        let mut fb = FrameBuffer::default();
        fb.begin_frame(4, 4);
        assert_eq!(fb.pixels().len(), 16);
        assert_eq!(fb.pixel(0, 0), pack_color(0, 0, 0));
        // x = 2 of 4 → g = 127, y = 3 of 4 → r = 191
        assert_eq!(fb.pixel(2, 3), pack_color(191, 127, 0));
    }

    #[test]
    fn begin_frame_overwrites_previous_contents() {
        let mut fb = FrameBuffer::default();
        fb.begin_frame(8, 8);
        fb.put_pixel(3, 3, 0xFF_FFFFFF);
        fb.begin_frame(8, 8);
        assert_ne!(fb.pixel(3, 3), 0xFF_FFFFFF);
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut fb = FrameBuffer::default();
        fb.begin_frame(8, 8);
        fb.fill_rect(-2, 6, 5, 5, 0xFF_FF0000);
        let red = fb.pixels().iter().filter(|&&p| p == 0xFF_FF0000).count();
        // columns 0..3, rows 6..8
        assert_eq!(red, 3 * 2);
        assert_eq!(fb.pixel(2, 7), 0xFF_FF0000);
        assert_ne!(fb.pixel(3, 7), 0xFF_FF0000);
    }

    #[test]
    fn end_frame_loans_buffer() {
        let mut fb = FrameBuffer::default();
        fb.begin_frame(3, 2);
        let (len, w, h) = fb.end_frame(|px, w, h| (px.len(), w, h));
        assert_eq!((len, w, h), (6, 3, 2));
    }

    #[test]
    #[should_panic(expected = "out of frame")]
    fn put_pixel_outside_frame_panics() {
        let mut fb = FrameBuffer::default();
        fb.begin_frame(2, 2);
        fb.put_pixel(2, 0, 0);
    }
}
