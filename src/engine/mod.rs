//! The visibility engine: boundary solver, hit-map, ray caster, polygon
//! builder and the per-frame render loop that drives them.

#[allow(clippy::module_inception)]
mod engine;
pub mod hitmap;
pub mod intersection;
pub mod raycast;
pub mod visibility;

pub use engine::Engine;
pub use hitmap::{HitMap, WALL_COLOR, wall_color};
pub use intersection::find_intersection;
pub use raycast::{Line, cast_ray};
pub use visibility::{Polygon, ViewCone, Visibility, build_polygon, light_cone};
