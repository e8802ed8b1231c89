//! Render configuration, shared by both binaries.

use clap::Parser;
use glam::Vec2;
use std::path::PathBuf;

use crate::{
    engine::Engine,
    error::RenderError,
    renderer::FrameBuffer,
    world::{Map, Observer, levels},
};

/// Render a tile map as seen through an observer's view cone.
///
/// CLI options handled via `clap` derive; angles are in degrees.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about)]
pub struct RenderConfig {
    /// Number of images to render
    #[arg(long, default_value_t = 25)]
    pub frames: usize,

    /// Degrees added to the gaze after every frame
    #[arg(long, default_value_t = 15.0, allow_negative_numbers = true)]
    pub angle_step: f32,

    /// Initial gaze direction in degrees (0 = east, clockwise)
    #[arg(long, default_value_t = 155.8, allow_negative_numbers = true)]
    pub gaze: f32,

    /// Angular width of the view cone in degrees, strictly inside (0, 360)
    #[arg(long, default_value_t = 270.0)]
    pub view_width: f32,

    /// Observer x position in tiles
    #[arg(long, default_value_t = 13.456)]
    pub pos_x: f32,

    /// Observer y position in tiles
    #[arg(long, default_value_t = 5.345)]
    pub pos_y: f32,

    /// Canvas width in pixels (multiple of the map width)
    #[arg(long, default_value_t = 512)]
    pub width: usize,

    /// Canvas height in pixels (multiple of the map height)
    #[arg(long, default_value_t = 512)]
    pub height: usize,

    /// Render the walled-in empty room instead of the reference level
    #[arg(long)]
    pub empty: bool,

    /// Directory receiving `out_<k>.ppm`
    #[arg(long, value_name = "DIR", default_value = "output")]
    pub out_dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::parse_from(["conecast"])
    }
}

impl RenderConfig {
    /// Gaze increment in radians.
    #[inline]
    pub fn angle_step_rad(&self) -> f32 {
        self.angle_step.to_radians()
    }

    /// The built-in 16×16 map selected by `--empty`.
    pub fn map(&self) -> Result<Map, RenderError> {
        let literal = if self.empty {
            levels::EMPTY
        } else {
            levels::REFERENCE
        };
        Ok(Map::new(16, 16, literal)?)
    }

    pub fn observer(&self) -> Result<Observer, RenderError> {
        Ok(Observer::new(
            Vec2::new(self.pos_x, self.pos_y),
            self.gaze.to_radians(),
            self.view_width.to_radians(),
        )?)
    }

    /// Validate everything and assemble a software engine.
    pub fn build_engine(&self) -> Result<Engine<FrameBuffer>, RenderError> {
        Engine::new(
            FrameBuffer::default(),
            self.map()?,
            self.observer()?,
            self.width,
            self.height,
        )
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
