//! Angle helpers shared by the boundary solver and the visibility builder.
//!
//! Canvas space has its origin in the top-left corner with `y` growing
//! downwards, so increasing angles sweep **clockwise** on screen
//! (0 = east, π/2 = south).

use glam::{IVec2, Vec2};
use std::f32::consts::TAU;

/// Floating-point position in canvas (pixel) space.
pub type Point = Vec2;

/// Exact grid cell in canvas space.
pub type Pixel = IVec2;

/// Map `angle` onto its representative in `[0, 2π)`.
///
/// Non-finite input has no representative and comes back as NaN.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid may round up to exactly TAU for tiny negative inputs
    if a >= TAU { 0.0 } else { a }
}

/// Angle of the vector `origin → point`, normalised to `[0, 2π)`.
#[inline]
pub fn angle_to(point: Point, origin: Point) -> f32 {
    let d = point - origin;
    normalize_angle(d.y.atan2(d.x))
}

/// Is the direction from `origin` to `point` inside the closed angular range
/// `[lower_bound, upper_bound]`?
///
/// Both bounds are normalised first; a range whose lower bound ends up above
/// its upper bound wraps through 0.
pub fn angle_in_view(point: Point, origin: Point, lower_bound: f32, upper_bound: f32) -> bool {
    let angle = angle_to(point, origin);
    let lo = normalize_angle(lower_bound);
    let hi = normalize_angle(upper_bound);

    if lo <= hi {
        angle >= lo && angle <= hi
    } else {
        angle >= lo || angle <= hi
    }
}

/// Clockwise angular distance from `from` to `to`, in `[0, 2π)`.
#[inline]
pub fn angular_offset(from: f32, to: f32) -> f32 {
    normalize_angle(to - from)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn deg(d: f32) -> f32 {
        d.to_radians()
    }

    /// Point at `deg` degrees from the origin, 10 px away.
    fn at(d: f32) -> Point {
        let (s, c) = deg(d).sin_cos();
        Vec2::new(c, s) * 10.0
    }

    #[test]
    fn normalize_lands_in_range() {
        for a in [-1000.0, -TAU, -PI, -1e-9, 0.0, 1.0, TAU, 3.0 * TAU + 0.5, 1e7] {
            let n = normalize_angle(a);
            assert!((0.0..TAU).contains(&n), "{a} -> {n}");
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        for a in [-7.3, -0.25, 0.0, 2.0, 6.5, 42.0, -123.456] {
            let once = normalize_angle(a);
            assert_eq!(normalize_angle(once), once);
        }
    }

    #[test]
    fn normalize_huge_input_terminates() {
        let n = normalize_angle(1e30);
        assert!((0.0..TAU).contains(&n));
    }

    #[test]
    fn normalize_known_values() {
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-5);
        assert!((normalize_angle(TAU + 1.0) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn gaze_direction_is_in_view() {
        let origin = Vec2::ZERO;
        for gaze in [0.0, 45.0, 155.8, 270.0, 359.0] {
            let half = deg(30.0);
            assert!(angle_in_view(at(gaze), origin, deg(gaze) - half, deg(gaze) + half));
        }
    }

    #[test]
    fn cone_straddling_zero_wraps() {
        let origin = Vec2::ZERO;
        let (lo, hi) = (deg(350.0), deg(10.0));
        assert!(angle_in_view(at(0.0), origin, lo, hi));
        assert!(angle_in_view(at(5.0), origin, lo, hi));
        assert!(angle_in_view(at(355.0), origin, lo, hi));
        assert!(!angle_in_view(at(180.0), origin, lo, hi));
        assert!(!angle_in_view(at(20.0), origin, lo, hi));
    }

    #[test]
    fn unnormalised_bounds_are_accepted() {
        // same cone as above, expressed as (-10°, 10°)
        let origin = Vec2::new(100.0, 100.0);
        assert!(angle_in_view(origin + at(0.0), origin, deg(-10.0), deg(10.0)));
        assert!(!angle_in_view(origin + at(90.0), origin, deg(-10.0), deg(10.0)));
    }

    #[test]
    fn screen_angles_grow_clockwise() {
        // +y is down, so a point straight below sits at π/2
        let a = angle_to(Vec2::new(0.0, 5.0), Vec2::ZERO);
        assert!((a - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn offset_wraps() {
        assert!((angular_offset(deg(350.0), deg(10.0)) - deg(20.0)).abs() < 1e-5);
        assert!((angular_offset(deg(10.0), deg(350.0)) - deg(340.0)).abs() < 1e-5);
    }
}
