//! glint - an offline sphere path tracer.
//!
//! Loads render settings, populates the demo scene, renders it across a
//! worker pool, and writes the image to disk.

mod scene;
mod settings;

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use glint_render::{render, save_png, save_ppm, Camera, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

use settings::Settings;

fn main() -> Result<()> {
    env_logger::init();

    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.json"));
    let settings = Settings::load(&config_path);

    let camera = Camera::new(
        settings.camera_position(),
        settings.camera_looking_at(),
        settings.camera_up(),
        settings.image_aspect_ratio,
        settings.focal_length,
        settings.vertical_fov,
        settings.aperture_size,
        settings.focus_distance(),
    )
    .context("invalid camera settings")?;

    let mut rng = StdRng::seed_from_u64(settings.seed);
    let build_start = Instant::now();
    let world = scene::build_scene(&mut rng);
    log::info!(
        "scene built: {} objects in {:.2?}",
        world.len(),
        build_start.elapsed()
    );

    let config = RenderConfig {
        image_width: settings.image_width,
        image_height: settings.image_height(),
        samples_per_pixel: settings.rays_per_pixel,
        max_depth: settings.max_depth,
        threads: settings.threads,
        seed: settings.seed,
    };

    log::info!(
        "rendering {}x{} at {} rays per pixel",
        config.image_width,
        config.image_height,
        config.samples_per_pixel
    );
    let render_start = Instant::now();
    let frame = render(&camera, &world, &config)?;
    log::info!("rendered in {:.2?}", render_start.elapsed());

    match settings.output.extension().and_then(|ext| ext.to_str()) {
        Some("png") => save_png(&frame, &settings.output)
            .with_context(|| format!("failed to write {}", settings.output.display()))?,
        _ => save_ppm(&frame, &settings.output)
            .with_context(|| format!("failed to write {}", settings.output.display()))?,
    }
    log::info!("wrote {}", settings.output.display());

    Ok(())
}
