mod geometry;
pub mod levels;
mod map;
mod observer;

pub use geometry::{Pixel, Point, angle_in_view, angle_to, angular_offset, normalize_angle};

pub use map::{EMPTY, Map};

pub use observer::Observer;
