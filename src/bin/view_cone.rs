//! Live preview: the observer keeps turning by `--angle-step` every refresh.
//!
//! ```bash
//! cargo run --release --bin view_cone -- --angle-step 2 --view-width 90
//! ```

use clap::Parser;
use minifb::{Key, Window, WindowOptions};
use std::time::{Duration, Instant};

use conecast::{config::RenderConfig, renderer::Renderer};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = RenderConfig::parse();
    let mut engine = cfg.build_engine()?;
    let step = cfg.angle_step_rad();

    let mut win = Window::new(
        "conecast – view cone",
        cfg.width,
        cfg.height,
        WindowOptions::default(),
    )?;
    win.set_target_fps(30);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let t0 = Instant::now();
        let vis = engine.draw_frame();
        acc_time += t0.elapsed();
        acc_frames += 1;

        engine
            .renderer
            .end_frame(|fb, w, h| win.update_with_buffer(fb, w, h))?;
        engine.observer_mut().turn(step);

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            log::info!(
                "avg render: {avg_ms:.2} ms, {} boundary rays, {} lit pixels",
                vis.edge_rays,
                vis.lit
            );
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
