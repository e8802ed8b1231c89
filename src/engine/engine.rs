use log::info;
use std::path::{Path, PathBuf};

use crate::{
    engine::{
        hitmap::HitMap,
        visibility::{ViewCone, Visibility, light_cone},
    },
    error::RenderError,
    renderer::{OBSERVER_COLOR, RAY_COLOR, Renderer, Rgba, ppm},
    world::{Map, Observer, Pixel},
};

/// Side of the square marking the observer.
const MARKER_SIZE: usize = 5;

/// Owns everything one render pass touches.
///
/// The frame-buffer lives inside `renderer`, the hit-map next to it; both are
/// rebuilt from scratch by [`Engine::reset`] at the start of every frame.
pub struct Engine<R: Renderer> {
    pub renderer: R,
    map: Map,
    observer: Observer,
    hits: HitMap,
    tile: (usize, usize),
    width: usize,
    height: usize,
}

impl<R: Renderer> Engine<R> {
    /// Fails if the canvas cannot be split into whole tiles.
    pub fn new(
        renderer: R,
        map: Map,
        observer: Observer,
        w: usize,
        h: usize,
    ) -> Result<Self, RenderError> {
        let tile = map.tile_size(w, h)?;
        Ok(Self {
            renderer,
            map,
            observer,
            hits: HitMap::new(w, h),
            tile,
            width: w,
            height: h,
        })
    }

    #[inline]
    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    #[inline]
    pub fn observer_mut(&mut self) -> &mut Observer {
        &mut self.observer
    }

    #[inline]
    pub fn map(&self) -> &Map {
        &self.map
    }

    #[inline]
    pub fn hit_map(&self) -> &HitMap {
        &self.hits
    }

    /// Pixel size of one map tile.
    #[inline]
    pub fn tile_size(&self) -> (usize, usize) {
        self.tile
    }

    /// Observer position on the canvas.
    pub fn observer_pixel(&self) -> Pixel {
        self.observer
            .pixel_position(self.tile, (self.width, self.height))
    }

    /// Clear the frame to the background and rebuild the hit-map.
    pub fn reset(&mut self) {
        self.renderer.begin_frame(self.width, self.height);
        self.hits.rasterize(&self.map, self.tile, &mut self.renderer);
    }

    /// Draw one complete frame into the renderer's buffer.
    pub fn draw_frame(&mut self) -> Visibility {
        self.reset();

        let origin = self.observer_pixel();
        let cone = ViewCone::of(&self.observer, origin);
        let vis = light_cone(&cone, &self.hits, &mut self.renderer, RAY_COLOR);

        let half = (MARKER_SIZE / 2) as i32;
        self.renderer.fill_rect(
            origin.x - half,
            origin.y - half,
            MARKER_SIZE,
            MARKER_SIZE,
            OBSERVER_COLOR,
        );
        vis
    }

    /// Draw one frame and loan it to `submit`.
    pub fn render_frame<F, T>(&mut self, submit: F) -> T
    where
        F: FnOnce(&[Rgba], usize, usize) -> T,
    {
        self.draw_frame();
        self.renderer.end_frame(submit)
    }

    /// Render `frames` images into `out_dir` as `out_<k>.ppm`, turning the
    /// gaze by `angle_step` after each one.
    ///
    /// Stops at the first file that cannot be written; the engine stays
    /// usable since every frame starts from a clean slate.
    pub fn run(
        &mut self,
        frames: usize,
        angle_step: f32,
        out_dir: &Path,
    ) -> Result<Vec<PathBuf>, RenderError> {
        let mut written = Vec::with_capacity(frames);
        for k in 0..frames {
            let path = out_dir.join(format!("out_{k}.ppm"));
            info!(
                "frame {k}: gaze {:.1}°, saving to {}",
                self.observer.gaze().to_degrees(),
                path.display()
            );
            self.render_frame(|fb, w, h| ppm::save_ppm(&path, fb, w, h))
                .map_err(|source| RenderError::Io {
                    path: path.clone(),
                    source,
                })?;
            written.push(path);
            self.observer.turn(angle_step);
        }
        info!("rendered {frames} frames into {}", out_dir.display());
        Ok(written)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
