//! Visibility polygon: which stretch of the canvas boundary the observer can
//! see, and the rays that light it.
//!
//! ```text
//!   C(0,0) ───────────── D(w,0)
//!     │                    │
//!     │                    │      screen angles grow clockwise,
//!     │                    │      so the walk is A → B → C → D
//!   B(0,h) ───────────── A(w,h)
//! ```
//!
//! The polygon is `entry, <corners inside the cone>, exit`, where entry/exit
//! are the boundary points of the two cone edges.  Every consecutive pair that
//! lies on one canvas edge is filled by casting a ray to each pixel between
//! them.

use glam::{IVec2, Vec2};
use log::{debug, trace};
use smallvec::SmallVec;
use std::{
    cmp::Ordering::{Greater, Less},
    f32::consts::PI,
};

use crate::{
    engine::{hitmap::HitMap, intersection::find_intersection, raycast::cast_ray},
    renderer::{Renderer, Rgba},
    world::{Observer, Pixel, Point, angle_in_view, angle_to, angular_offset},
};

/// At most entry + 4 corners + exit.
pub type Polygon = SmallVec<[Pixel; 6]>;

/// Canvas corners in clockwise order starting at the bottom-right one.
pub fn canvas_corners(w: f32, h: f32) -> [Point; 4] {
    [
        Vec2::new(w, h),
        Vec2::new(0.0, h),
        Vec2::new(0.0, 0.0),
        Vec2::new(w, 0.0),
    ]
}

/// The view cone of one frame in canvas space.
#[derive(Clone, Copy, Debug)]
pub struct ViewCone {
    pub origin: Point,
    pub lower: f32,
    pub upper: f32,
}

impl ViewCone {
    /// Cone of `observer` standing at pixel `origin`.
    pub fn of(observer: &Observer, origin: Pixel) -> Self {
        Self {
            origin: origin.as_vec2(),
            lower: observer.lower_bound(),
            upper: observer.upper_bound(),
        }
    }

    /// Angular width, recovered from the (unnormalised) bounds.
    #[inline]
    fn width(&self) -> f32 {
        self.upper - self.lower
    }
}

/// Outcome of lighting one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Visibility {
    /// Ordered boundary pixels: entry, contained corners, exit.
    pub polygon: Polygon,
    /// Rays cast towards boundary pixels (cone edges excluded).
    pub edge_rays: usize,
    /// Pixels painted by all rays, cone edges included.
    pub lit: usize,
}

/// Index into [`canvas_corners`] of the first corner met when sweeping
/// clockwise from `entry`, judged by which quadrant `entry` lies in as seen
/// from `origin`.
pub fn first_corner(entry: Point, origin: Point) -> usize {
    let d = entry - origin;
    match (d.x.partial_cmp(&0.0), d.y.partial_cmp(&0.0)) {
        (Some(Greater), Some(Greater)) => 0,
        (_, Some(Greater)) => 1,
        (Some(Less), _) => 2,
        (_, Some(Less)) => 3,
        // due east (or no offset at all): A comes next
        _ => 0,
    }
}

/// Corners inside `cone`, in the order the sweep from the lower edge meets
/// them.
///
/// The walk starts at [`first_corner`]. When that corner lies in the entry's
/// quadrant but behind `entry`, it is only in view if the cone wraps almost all
/// the way round, so the walk starts one corner later and meets it last.
pub fn visible_corners(cone: &ViewCone, entry: Point, w: f32, h: f32) -> SmallVec<[Point; 4]> {
    let corners = canvas_corners(w, h);
    let mut start = first_corner(entry, cone.origin);
    if angular_offset(cone.lower, angle_to(corners[start], cone.origin)) > PI {
        start = (start + 1) % 4;
    }

    (0..4)
        .map(|m| corners[(start + m) % 4])
        .filter(|&c| angle_in_view(c, cone.origin, cone.lower, cone.upper))
        .collect()
}

/// Snap a boundary point onto the last addressable pixel row/column.
#[inline]
fn to_pixel(p: Point, w: usize, h: usize) -> Pixel {
    IVec2::new(
        (p.x.floor() as i32).clamp(0, w as i32 - 1),
        (p.y.floor() as i32).clamp(0, h as i32 - 1),
    )
}

/// Build the visibility polygon of `cone` on a `w × h` canvas.
pub fn build_polygon(cone: &ViewCone, w: usize, h: usize) -> Polygon {
    let (wf, hf) = (w as f32, h as f32);
    let entry = find_intersection(cone.lower, cone.origin.x, cone.origin.y, wf, hf);
    let exit = find_intersection(cone.upper, cone.origin.x, cone.origin.y, wf, hf);

    let mut poly = Polygon::new();
    poly.push(to_pixel(entry, w, h));
    poly.extend(
        visible_corners(cone, entry, wf, hf)
            .into_iter()
            .map(|c| to_pixel(c, w, h)),
    );
    poly.push(to_pixel(exit, w, h));
    debug!(
        "visibility polygon ({:.1}° wide): {:?}",
        cone.width().to_degrees(),
        poly.as_slice()
    );
    poly
}

/// Light everything the observer at `cone.origin` sees.
///
/// Casts one ray per boundary pixel along every polygon segment that follows
/// a canvas edge, then the two cone-edge rays themselves.
pub fn light_cone<R: Renderer + ?Sized>(
    cone: &ViewCone,
    hits: &HitMap,
    renderer: &mut R,
    col: Rgba,
) -> Visibility {
    let (w, h) = hits.size();
    let origin = cone.origin.as_ivec2();
    let polygon = build_polygon(cone, w, h);

    let mut edge_rays = 0;
    let mut lit = 0;
    for pair in polygon.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a.x == b.x {
            for y in a.y.min(b.y)..=a.y.max(b.y) {
                lit += cast_ray(origin, IVec2::new(a.x, y), hits, renderer, col);
                edge_rays += 1;
            }
        } else if a.y == b.y {
            for x in a.x.min(b.x)..=a.x.max(b.x) {
                lit += cast_ray(origin, IVec2::new(x, a.y), hits, renderer, col);
                edge_rays += 1;
            }
        } else {
            trace!("no shared edge between {a} and {b}, left unfilled");
        }
    }

    // the gaze boundary itself
    if let (Some(&entry), Some(&exit)) = (polygon.first(), polygon.last()) {
        lit += cast_ray(origin, entry, hits, renderer, col);
        lit += cast_ray(origin, exit, hits, renderer, col);
    }

    Visibility {
        polygon,
        edge_rays,
        lit,
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
