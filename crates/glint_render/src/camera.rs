//! Thin-lens camera for primary ray generation.

use crate::Ray;
use glint_math::{random_in_unit_disk, Vec3};
use rand::RngCore;
use thiserror::Error;

/// Camera construction failure.
#[derive(Debug, Error)]
pub enum CameraError {
    /// Position and look-at coincide, so no view basis exists. Failing here
    /// keeps NaN out of every downstream ray.
    #[error("camera position coincides with its look-at target")]
    DegenerateView,
}

/// Camera state derived once at construction and never mutated.
///
/// The viewport is a rectangle one focal length along the view axis, scaled
/// out to the focus distance so that objects at that distance are in perfect
/// focus. Rays originate on a lens disk of radius `aperture / 2`.
pub struct Camera {
    origin: Vec3,
    lower_left: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    // Orthonormal basis: u points screen-right, v screen-up.
    u: Vec3,
    v: Vec3,
    lens_radius: f64,
}

impl Camera {
    /// Build a camera from its eight parameters.
    ///
    /// `vertical_fov` is in degrees. Returns an error if `look_from` and
    /// `look_at` coincide.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        look_from: Vec3,
        look_at: Vec3,
        vup: Vec3,
        aspect_ratio: f64,
        focal_length: f64,
        vertical_fov: f64,
        aperture: f64,
        focus_distance: f64,
    ) -> Result<Self, CameraError> {
        let view = look_from - look_at;
        if view.length_squared() < 1e-24 {
            return Err(CameraError::DegenerateView);
        }

        let theta = vertical_fov.to_radians();
        let h = focal_length * (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = viewport_height * aspect_ratio;

        // w looks backward along the view axis; u and v span the viewport.
        let w = view.normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        let horizontal = focus_distance * viewport_width * u;
        let vertical = focus_distance * viewport_height * v;
        let lower_left =
            look_from - horizontal / 2.0 - vertical / 2.0 - focus_distance * focal_length * w;

        Ok(Self {
            origin: look_from,
            lower_left,
            horizontal,
            vertical,
            u,
            v,
            lens_radius: aperture / 2.0,
        })
    }

    /// Primary ray through normalized viewport coordinates (s, t) in [0, 1]².
    ///
    /// With a nonzero aperture the origin is jittered on the lens disk; the
    /// target point on the focus plane stays fixed, which is what produces
    /// depth-of-field blur. A zero aperture consumes no randomness.
    pub fn ray(&self, s: f64, t: f64, rng: &mut dyn RngCore) -> Ray {
        let offset = if self.lens_radius > 0.0 {
            let rd = self.lens_radius * random_in_unit_disk(rng);
            self.u * rd.x + self.v * rd.y
        } else {
            Vec3::ZERO
        };

        Ray::new(
            self.origin + offset,
            self.lower_left + s * self.horizontal + t * self.vertical - self.origin - offset,
        )
    }
}
