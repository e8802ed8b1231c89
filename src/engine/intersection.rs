//! Where does a ray leave the canvas?
//!
//! Given the observer's pixel position and a direction `theta`, find the
//! point at which the ray crosses the rectangle `[0, max_w] × [0, max_h]`.
//! Steep rays are solved in transposed space so the working slope stays in
//! `[-1, 1]`; which of the two candidate edges is struck first is decided by
//! comparing that slope against the slope towards the corner of the quadrant
//! the ray points into.

use glam::Vec2;
use log::debug;

use crate::world::Point;

/// Direction components smaller than this are treated as exactly zero.
pub const DIR_EPSILON: f32 = 1e-6;

/// Which edge, in (possibly transposed) solver space, the ray leaves through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Exit {
    /// The edge at `x = 0` or `x = max_w`.
    Vertical,
    /// The edge at `y = 0` or `y = max_h`.
    Horizontal,
}

/// Boundary point hit by the ray from `(px, py)` in direction `theta`.
///
/// The result always has one coordinate equal to `0` or the corresponding
/// maximum and the other inside `[0, max]`, as long as the observer is inside
/// the canvas.
pub fn find_intersection(theta: f32, px: f32, py: f32, max_w: f32, max_h: f32) -> Point {
    let hit = solve(theta, px, py, max_w, max_h);
    debug!(
        "intersection for {:.2}° is ({:.2}, {:.2})",
        theta.to_degrees(),
        hit.x,
        hit.y
    );
    hit
}

fn solve(theta: f32, px: f32, py: f32, max_w: f32, max_h: f32) -> Point {
    let (s, c) = theta.sin_cos();
    let dx = snap(c);
    let dy = snap(s);

    /*----------- degenerate directions ----------------------------------*/
    match (dx == 0.0, dy == 0.0) {
        (true, true) => return Vec2::new(px, py),
        (true, false) => return Vec2::new(px, if dy > 0.0 { max_h } else { 0.0 }),
        (false, true) => return Vec2::new(if dx > 0.0 { max_w } else { 0.0 }, py),
        (false, false) => {}
    }

    /*----------- transpose steep rays -----------------------------------*/
    let steep = dy.abs() > dx.abs();
    let (px, py, max_w, max_h, dx, dy) = if steep {
        (py, px, max_h, max_w, dy, dx)
    } else {
        (px, py, max_w, max_h, dx, dy)
    };

    // point-slope form through the observer; |slope| <= 1 here
    let slope = dy / dx;

    /*----------- pick the exit edge by quadrant -------------------------*/
    // In every quadrant tan() grows with the angle, so comparing the ray's
    // slope with the slope towards that quadrant's corner tells which edge
    // is reached first.
    let exit = match (dx > 0.0, dy > 0.0) {
        // towards (max_w, max_h)
        (true, true) => match corner_slope(max_w - px, max_h - py) {
            Some(k) if slope > k => Exit::Horizontal,
            _ => Exit::Vertical,
        },
        // towards (0, max_h)
        (false, true) => match corner_slope(-px, max_h - py) {
            Some(k) if slope < k => Exit::Horizontal,
            _ => Exit::Vertical,
        },
        // towards (0, 0)
        (false, false) => match corner_slope(-px, -py) {
            Some(k) if slope > k => Exit::Horizontal,
            _ => Exit::Vertical,
        },
        // towards (max_w, 0)
        (true, false) => match corner_slope(max_w - px, -py) {
            Some(k) if slope < k => Exit::Horizontal,
            _ => Exit::Vertical,
        },
    };

    let hit = match exit {
        Exit::Horizontal => {
            let y = if dy > 0.0 { max_h } else { 0.0 };
            Vec2::new((px + (y - py) / slope).clamp(0.0, max_w), y)
        }
        Exit::Vertical => {
            let x = if dx > 0.0 { max_w } else { 0.0 };
            Vec2::new(x, (py + slope * (x - px)).clamp(0.0, max_h))
        }
    };

    if steep { Vec2::new(hit.y, hit.x) } else { hit }
}

/// Slope of the segment observer → corner; `None` when the observer already
/// sits on the corner's vertical edge, i.e. the ray leaves immediately.
#[inline]
fn corner_slope(run: f32, rise: f32) -> Option<f32> {
    (run != 0.0).then(|| rise / run)
}

#[inline]
fn snap(v: f32) -> f32 {
    if v.abs() < DIR_EPSILON { 0.0 } else { v }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const W: f32 = 512.0;
    const H: f32 = 512.0;

    fn on_boundary(p: Point, w: f32, h: f32) -> bool {
        let on_x = p.x == 0.0 || p.x == w;
        let on_y = p.y == 0.0 || p.y == h;
        (on_x && (0.0..=h).contains(&p.y)) || (on_y && (0.0..=w).contains(&p.x))
    }

    fn close(a: Point, b: Point) -> bool {
        (a - b).length() < 1e-2
    }

    #[test]
    fn axis_aligned_rays() {
        assert_eq!(find_intersection(0.0, 100.0, 200.0, W, H), Vec2::new(W, 200.0));
        assert_eq!(find_intersection(PI, 100.0, 200.0, W, H), Vec2::new(0.0, 200.0));
        assert_eq!(find_intersection(FRAC_PI_2, 100.0, 200.0, W, H), Vec2::new(100.0, H));
        assert_eq!(find_intersection(-FRAC_PI_2, 100.0, 200.0, W, H), Vec2::new(100.0, 0.0));
    }

    #[test]
    fn diagonals_hit_corners_from_centre() {
        let (c, q) = (256.0, std::f32::consts::FRAC_PI_4);
        assert!(close(find_intersection(q, c, c, W, H), Vec2::new(W, H)));
        assert!(close(find_intersection(3.0 * q, c, c, W, H), Vec2::new(0.0, H)));
        assert!(close(find_intersection(5.0 * q, c, c, W, H), Vec2::ZERO));
        assert!(close(find_intersection(7.0 * q, c, c, W, H), Vec2::new(W, 0.0)));
    }

    #[test]
    fn shallow_ray_exits_vertical_edge() {
        // 10° right-down from (100, 100): y = 100 + tan(10°)·412
        let hit = find_intersection(10_f32.to_radians(), 100.0, 100.0, W, H);
        assert_eq!(hit.x, W);
        assert!((hit.y - (100.0 + 10_f32.to_radians().tan() * 412.0)).abs() < 1e-2);
    }

    #[test]
    fn steep_ray_exits_horizontal_edge() {
        // 80° from (100, 100): nearly straight down
        let hit = find_intersection(80_f32.to_radians(), 100.0, 100.0, W, H);
        assert_eq!(hit.y, H);
        assert!((hit.x - (100.0 + 412.0 / 80_f32.to_radians().tan())).abs() < 1e-2);
    }

    #[test]
    fn corner_comparison_in_every_quadrant() {
        // observer off-centre so corner slopes differ from ±1
        let (px, py) = (400.0, 100.0);
        // Q1: corner (512,512) is steep (slope 412/112), 60° is shallower.
        let q1 = find_intersection(60_f32.to_radians(), px, py, W, H);
        assert_eq!(q1.x, W);
        // Q2: towards (0,512), 120° leaves through the bottom.
        let q2 = find_intersection(120_f32.to_radians(), px, py, W, H);
        assert_eq!(q2.y, H);
        // Q3: towards (0,0), 190° leaves through the left edge …
        let q3 = find_intersection(190_f32.to_radians(), px, py, W, H);
        assert_eq!(q3.x, 0.0);
        // … while 200° is steeper than the corner and reaches the top first.
        let q3_top = find_intersection(200_f32.to_radians(), px, py, W, H);
        assert_eq!(q3_top.y, 0.0);
        // Q4: towards (512,0), 300° leaves through the top.
        let q4 = find_intersection(300_f32.to_radians(), px, py, W, H);
        assert_eq!(q4.y, 0.0);
    }

    #[test]
    fn every_angle_lands_on_boundary() {
        for (px, py) in [(256.0, 256.0), (1.0, 1.0), (215.0, 166.0), (511.0, 3.0)] {
            for step in 0..720 {
                let theta = step as f32 * 0.5_f32.to_radians() - PI;
                let hit = find_intersection(theta, px, py, W, H);
                assert!(on_boundary(hit, W, H), "θ={theta} from ({px},{py}) → {hit}");
            }
        }
    }

    #[test]
    fn rectangular_canvas() {
        let hit = find_intersection(70_f32.to_radians(), 50.0, 20.0, 640.0, 100.0);
        assert!(on_boundary(hit, 640.0, 100.0));
        assert_eq!(hit.y, 100.0);
    }

    #[test]
    fn observer_on_far_edge_does_not_divide_by_zero() {
        let hit = find_intersection(30_f32.to_radians(), W, 100.0, W, H);
        assert_eq!(hit, Vec2::new(W, 100.0));
        let corner = find_intersection(45_f32.to_radians(), W, H, W, H);
        assert!(on_boundary(corner, W, H));
    }

    #[test]
    fn reference_cone_edges() {
        let lo = find_intersection(20.8_f32.to_radians(), 215.0, 166.0, W, H);
        let hi = find_intersection(290.8_f32.to_radians(), 215.0, 166.0, W, H);
        assert!(on_boundary(lo, W, H));
        assert!(on_boundary(hi, W, H));
        assert_eq!(lo.x, W);
        assert_eq!(hi.y, 0.0);
    }
}
