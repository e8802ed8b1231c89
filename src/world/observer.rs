use glam::{IVec2, Vec2};
use std::f32::consts::TAU;

use super::geometry::Pixel;
use crate::error::ObserverError;

/// The single view-point of a render.
///
/// * `pos` is in **tile** units; [`Observer::pixel_position`] scales it to the
///   canvas.
/// * `gaze` is periodic with period 2π (0 = east, clockwise on screen).
/// * `view_width` always lies strictly inside `(0, 2π)`.
#[derive(Clone, Copy, Debug)]
pub struct Observer {
    pos: Vec2,
    gaze: f32,
    view_width: f32,
}

impl Observer {
    /// Create an observer at `pos` (tiles) looking along `gaze` with an
    /// angular field of `view_width` radians.
    pub fn new(pos: Vec2, gaze: f32, view_width: f32) -> Result<Self, ObserverError> {
        if !pos.is_finite() || !gaze.is_finite() {
            return Err(ObserverError::NonFinite);
        }
        if !(view_width > 0.0 && view_width < TAU) {
            return Err(ObserverError::ViewWidth(view_width));
        }
        Ok(Self {
            pos,
            gaze,
            view_width,
        })
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn gaze(&self) -> f32 {
        self.gaze
    }

    #[inline]
    pub fn view_width(&self) -> f32 {
        self.view_width
    }

    /// First cone edge, `gaze - view_width/2` (not normalised).
    #[inline]
    pub fn lower_bound(&self) -> f32 {
        self.gaze - self.view_width * 0.5
    }

    /// Second cone edge, `gaze + view_width/2` (not normalised).
    #[inline]
    pub fn upper_bound(&self) -> f32 {
        self.gaze + self.view_width * 0.5
    }

    /// Rotate the gaze by `delta` radians (positive = clockwise on screen).
    pub fn turn(&mut self, delta: f32) {
        self.gaze = (self.gaze + delta).rem_euclid(TAU);
    }

    /// Observer position in canvas pixels for tiles of `tile` pixels.
    ///
    /// The result is clamped strictly inside a `canvas` sized image so the
    /// observer never sits on the boundary rows/columns where the corner
    /// ordering would be ambiguous.
    pub fn pixel_position(&self, tile: (usize, usize), canvas: (usize, usize)) -> Pixel {
        let px = (self.pos.x * tile.0 as f32).floor() as i32;
        let py = (self.pos.y * tile.1 as f32).floor() as i32;
        let max_x = canvas.0 as i32 - 1;
        let max_y = canvas.1 as i32 - 1;
        IVec2::new(px.clamp(max_x.min(1), max_x), py.clamp(max_y.min(1), max_y))
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
