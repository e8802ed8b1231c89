//! Error taxonomy.
//!
//! Everything here is a precondition violation or an I/O failure: degenerate
//! ray directions are ordinary algorithmic cases and never surface as errors.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Problems with a map literal or with how it tiles the canvas.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MapError {
    /// The literal does not hold exactly `w * h` tiles.
    #[error("map literal holds {actual} tiles, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Tiles are single bytes; a multi-byte character cannot be one.
    #[error("map literal has non-ASCII tile {found:?} at index {index}")]
    NonAscii { index: usize, found: char },

    /// Width or height is zero.
    #[error("map dimensions must be non-zero")]
    ZeroDimension,

    /// The canvas cannot be split into whole tiles along `axis`.
    #[error("canvas {axis} of {canvas}px is not a multiple of map {axis} {map}")]
    NotAMultiple {
        axis: &'static str,
        canvas: usize,
        map: usize,
    },
}

/// Invalid observer parameters.
#[derive(Error, Debug, PartialEq)]
pub enum ObserverError {
    /// View width must lie strictly inside `(0, 2π)`.
    #[error("view width {0} rad is outside (0, 2π)")]
    ViewWidth(f32),

    /// Position or gaze contains NaN / infinity.
    #[error("observer position and gaze must be finite")]
    NonFinite,
}

/// Anything that can abort a render run.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Observer(#[from] ObserverError),

    /// Writing an output image failed – the engine itself stays usable.
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
