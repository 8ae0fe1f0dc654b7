//! Parallel per-pixel sampling and aggregation.
//!
//! Work is partitioned by row: each worker owns one row slice of the
//! framebuffer exclusively, so no synchronization is needed on pixel writes.
//! Every row also derives its own seeded generator, keeping random state out
//! of shared memory entirely.

use crate::{ray_color, Camera, Color, World};
use glint_math::gen_f64;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use thiserror::Error;

/// Render-time failure.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The configured worker pool could not be created.
    #[error("failed to build the worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output width in pixels.
    pub image_width: usize,
    /// Output height in pixels.
    pub image_height: usize,
    /// Jittered rays fired per pixel.
    pub samples_per_pixel: u32,
    /// Maximum scatter depth before a path is cut off.
    pub max_depth: u32,
    /// Worker threads; 0 lets the pool size itself to the hardware.
    pub threads: usize,
    /// Base seed; row r renders with generator seed `seed + r`.
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 400,
            image_height: 225,
            samples_per_pixel: 100,
            max_depth: 50,
            threads: 0,
            seed: 0,
        }
    }
}

/// Flat row-major framebuffer of linear colors, top row first.
pub struct Framebuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width * height],
        }
    }

    /// Get the pixel at (x, y), with y = 0 at the top of the image.
    pub fn get(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }
}

/// Render the scene into a framebuffer using the configured worker pool.
///
/// Rows are distributed across the pool in arbitrary order; placement in the
/// buffer is by coordinate, so completion order never matters. A panic in a
/// worker aborts the whole render rather than producing a partial image.
pub fn render(
    camera: &Camera,
    world: &World,
    config: &RenderConfig,
) -> Result<Framebuffer, RenderError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    log::debug!(
        "rendering {}x{} at {} spp on {} workers",
        config.image_width,
        config.image_height,
        config.samples_per_pixel,
        pool.current_num_threads()
    );

    let mut frame = Framebuffer::new(config.image_width, config.image_height);
    pool.install(|| {
        frame
            .pixels
            .par_chunks_mut(config.image_width)
            .enumerate()
            .for_each(|(row, out)| {
                let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(row as u64));
                for (x, pixel) in out.iter_mut().enumerate() {
                    *pixel = render_pixel(camera, world, x, row, config, &mut rng);
                }
            });
    });

    Ok(frame)
}

/// Average `samples_per_pixel` jittered rays through pixel (x, row).
///
/// `row` counts from the top of the image; the viewport's t coordinate runs
/// bottom-up, so the row index is flipped before sampling.
pub fn render_pixel(
    camera: &Camera,
    world: &World,
    x: usize,
    row: usize,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let j = config.image_height - 1 - row;
    let mut sum = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let s = (x as f64 + gen_f64(rng)) / (config.image_width - 1) as f64;
        let t = (j as f64 + gen_f64(rng)) / (config.image_height - 1) as f64;
        let ray = camera.ray(s, t, rng);
        sum += ray_color(&ray, world, config.max_depth, rng);
    }

    sum / config.samples_per_pixel as f64
}
