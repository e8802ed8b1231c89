//! Top-down view-cone renderer.
//!
//! An [`Observer`](world::Observer) stands on a static tile [`Map`](world::Map)
//! and every frame lights exactly what falls inside its angular field of
//! view: the two cone edges are intersected with the canvas boundary, the
//! boundary stretch between them is walked pixel by pixel and a ray is cast
//! towards each of those pixels, stopping at the first wall.

pub mod config;
pub mod engine;
pub mod error;
pub mod renderer;
pub mod world;
