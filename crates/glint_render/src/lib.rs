//! glint render core - CPU path tracing.
//!
//! Fires sampled rays from a thin-lens camera through a pixel grid,
//! recursively follows reflection, refraction and diffuse scattering to a
//! bounded depth, and aggregates per-pixel radiance across a worker pool.

mod camera;
mod hittable;
mod integrator;
mod material;
mod output;
mod ray;
mod renderer;
mod sphere;

pub use camera::{Camera, CameraError};
pub use hittable::{HitRecord, Primitive, World};
pub use integrator::{ray_color, sky_gradient};
pub use material::{Color, Dielectric, Lambertian, Material, Metal, Scatter};
pub use output::{encode_rgb, save_png, save_ppm, write_ppm};
pub use ray::Ray;
pub use renderer::{render, render_pixel, Framebuffer, RenderConfig, RenderError};
pub use sphere::Sphere;

/// Re-export the math types used across the public API.
pub use glint_math::{Interval, Vec3};
