//! Render the view cone of a rotating observer into PPM frames.
//!
//! ```bash
//! cargo run --release -- --frames 25 --angle-step 15 --out-dir output
//! ```

use anyhow::Context;
use clap::Parser;

use conecast::config::RenderConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = RenderConfig::parse();
    log::debug!("{cfg:?}");

    let mut engine = cfg.build_engine().context("invalid render configuration")?;
    let origin = engine.observer_pixel();
    log::info!(
        "observer at pixel ({}, {}), {}x{} canvas, {}x{} px tiles",
        origin.x,
        origin.y,
        cfg.width,
        cfg.height,
        engine.tile_size().0,
        engine.tile_size().1
    );

    let written = engine.run(cfg.frames, cfg.angle_step_rad(), &cfg.out_dir)?;
    log::info!("done, {} files written", written.len());
    Ok(())
}
