//! Randomized sampling helpers shared by the camera and the materials.
//!
//! Every helper draws from a caller-supplied generator so worker threads can
//! keep their own seeded state instead of sharing one global source.

use crate::Vec3;
use rand::{Rng, RngCore};

/// Draw a uniform f64 in [0, 1).
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen()
}

/// A vector with each component drawn uniformly from [min, max).
pub fn random_range(rng: &mut dyn RngCore, min: f64, max: f64) -> Vec3 {
    let span = max - min;
    Vec3::new(
        min + span * gen_f64(rng),
        min + span * gen_f64(rng),
        min + span * gen_f64(rng),
    )
}

/// A point strictly inside the unit sphere, by rejection sampling the
/// enclosing cube.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_f64(rng) * 2.0 - 1.0,
            gen_f64(rng) * 2.0 - 1.0,
            gen_f64(rng) * 2.0 - 1.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// A uniformly distributed point on the unit sphere surface.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_f64(rng) * 2.0 - 1.0,
            gen_f64(rng) * 2.0 - 1.0,
            gen_f64(rng) * 2.0 - 1.0,
        );
        let len_sq = p.length_squared();
        // Discard points too close to the origin before normalizing.
        if len_sq > 1e-12 && len_sq <= 1.0 {
            return p / len_sq.sqrt();
        }
    }
}

/// A point strictly inside the unit disk in the z = 0 plane. Used to jitter
/// ray origins across a thin-lens aperture.
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(gen_f64(rng) * 2.0 - 1.0, gen_f64(rng) * 2.0 - 1.0, 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
