//! Rendering abstraction layer.
//!
//! The visibility engine never owns a pixel buffer: it draws through a type
//! implementing [`Renderer`] and the finished frame is **loaned** to a
//! caller-supplied closure by [`Renderer::end_frame`].  The PPM writer and the
//! preview window are both just such closures.

pub mod ppm;
pub mod software;

pub use software::FrameBuffer;

/// Pixel format of the software frame-buffer (0xAARRGGBB).
pub type Rgba = u32;

/// Pack an opaque colour.
#[inline]
pub const fn pack_color(r: u8, g: u8, b: u8) -> Rgba {
    pack_rgba(r, g, b, 255)
}

#[inline]
pub const fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Split a packed colour into `(r, g, b, a)`.
#[inline]
pub const fn unpack_color(c: Rgba) -> (u8, u8, u8, u8) {
    ((c >> 16) as u8, (c >> 8) as u8, c as u8, (c >> 24) as u8)
}

/// Colour of an illuminated ray pixel.
pub const RAY_COLOR: Rgba = pack_color(255, 255, 255);

/// Colour of the observer marker.
pub const OBSERVER_COLOR: Rgba = pack_color(255, 0, 0);

/// A renderer that owns an internal scratch buffer for the whole frame.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and paint
    /// the background over every pixel.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Current `(width, height)`.
    fn size(&self) -> (usize, usize);

    /// Write one pixel.  Coordinates must lie inside the frame.
    fn put_pixel(&mut self, x: usize, y: usize, col: Rgba);

    /// Fill an axis-aligned rectangle clipped to the frame.
    fn fill_rect(&mut self, x: i32, y: i32, w: usize, h: usize, col: Rgba);

    /// Finish the frame and loan the finished buffer to `submit`.
    ///
    /// `submit(&[Rgba], w, h)` runs exactly once per frame and its result is
    /// handed back to the caller.
    fn end_frame<F, T>(&mut self, submit: F) -> T
    where
        F: FnOnce(&[Rgba], usize, usize) -> T;
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
