//! Render settings loaded from an optional JSON file.
//!
//! Loading is all-or-nothing: any read or parse failure falls back wholesale
//! to the defaults, so a half-readable file can never mix stale and fresh
//! values.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

/// All tunable parameters for one render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Image settings
    pub image_aspect_ratio: f64,
    pub image_width: usize,

    // Sampling settings
    pub rays_per_pixel: u32,
    pub max_depth: u32,

    // Camera settings
    pub camera_position: [f64; 3],
    pub camera_looking_at: [f64; 3],
    pub camera_up: [f64; 3],
    pub focal_length: f64,
    pub vertical_fov: f64,
    pub aperture_size: f64,

    // Execution settings
    pub threads: usize,
    pub seed: u64,
    pub output: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            image_aspect_ratio: 16.0 / 9.0,
            image_width: 400,
            rays_per_pixel: 100,
            max_depth: 50,
            camera_position: [8.0, 2.0, 3.0],
            camera_looking_at: [0.0, 0.0, 0.0],
            camera_up: [0.0, 1.0, 0.0],
            focal_length: 1.0,
            vertical_fov: 60.0,
            aperture_size: 0.1,
            threads: 0,
            seed: 0,
            output: PathBuf::from("output_image.ppm"),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to the defaults as a whole if
    /// the file is missing or malformed.
    pub fn load(path: &Path) -> Self {
        let loaded = fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|text| Ok(serde_json::from_str::<Settings>(&text)?));

        match loaded {
            Ok(settings) => {
                log::info!("loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(err) => {
                log::warn!(
                    "could not read settings from {}: {err}; using defaults",
                    path.display()
                );
                Settings::default().sanitized()
            }
        }
    }

    /// Clamp out-of-range values before they reach the render core.
    fn sanitized(mut self) -> Self {
        if !(self.image_aspect_ratio.is_finite() && self.image_aspect_ratio > 0.0) {
            self.image_aspect_ratio = Settings::default().image_aspect_ratio;
        }
        // Two pixels per axis is the minimum the jitter math can address.
        self.image_width = self.image_width.max(2);
        self.rays_per_pixel = self.rays_per_pixel.max(1);
        self.max_depth = self.max_depth.max(1);
        self.aperture_size = self.aperture_size.max(0.0);

        let available = thread::available_parallelism().map_or(1, |n| n.get());
        if self.threads > available {
            log::warn!(
                "requested {} threads but only {available} available; clamping",
                self.threads
            );
            self.threads = available;
        }
        self
    }

    /// Output height derived from the width and aspect ratio.
    pub fn image_height(&self) -> usize {
        ((self.image_width as f64 / self.image_aspect_ratio) as usize).max(2)
    }

    pub fn camera_position(&self) -> Vec3 {
        Vec3::from_array(self.camera_position)
    }

    pub fn camera_looking_at(&self) -> Vec3 {
        Vec3::from_array(self.camera_looking_at)
    }

    pub fn camera_up(&self) -> Vec3 {
        Vec3::from_array(self.camera_up)
    }

    /// Focus falls exactly on the look-at point.
    pub fn focus_distance(&self) -> f64 {
        (self.camera_looking_at() - self.camera_position()).length()
    }
}
