//! Renders a paced tile-grid animation to PNG files.
//!
//! Usage: `tilekit-demo [config.toml]`

mod scene;
mod settings;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tilekit_engine::grid::TileGrid;
use tilekit_engine::logging::{init_logging, LoggingConfig};
use tilekit_engine::render::ImageTarget;
use tilekit_engine::time::FrameTimer;

use crate::scene::Scene;
use crate::settings::DemoConfig;

fn main() -> Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = DemoConfig::load(config_path.as_deref())?;

    let mut logging = LoggingConfig::default().timestamps(true);
    if let Some(filter) = &config.log_filter {
        logging = logging.filter(filter.clone());
    }
    init_logging(logging);

    run(&config)
}

fn run(config: &DemoConfig) -> Result<()> {
    let mut target = ImageTarget::new(config.surface.x, config.surface.y, config.background);
    let grid = TileGrid::new(&target, config.shape, config.grid_options())
        .context("invalid tile grid configuration")?;
    let scene = Scene::new(grid, config.palette(), config.trail_len);
    log::info!(
        "{} grid of {:.1} px tiles on a {} surface",
        scene.grid().shape(),
        scene.grid().tile_size().min(),
        scene.grid().surface_size()
    );

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("failed to create {}", config.output_dir.display()))?;
    let mut timer = FrameTimer::from_fps(config.fps);
    timer.reset();

    let started = Instant::now();
    let mut slept = Duration::ZERO;
    for frame in 0..config.frames {
        scene.draw(&mut target, frame);
        if config.save_every > 0 && frame % config.save_every == 0 {
            target.save(config.output_dir.join(format!("frame_{frame:04}.png")))?;
        }
        slept += timer.wait();
    }

    let final_path = config.output_dir.join("final.png");
    target.save(&final_path)?;

    log::info!(
        "rendered {} frames in {:.2?} ({:.2?} paced sleep); final frame at {}",
        config.frames,
        started.elapsed(),
        slept,
        final_path.display()
    );
    Ok(())
}
