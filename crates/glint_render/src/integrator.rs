//! Recursive light-transport integration.

use crate::{Color, Ray, World};
use glint_math::Interval;
use rand::RngCore;

/// Lower ray bound. Scattered rays start on the surface they just left;
/// without this epsilon, rounding error makes them re-hit it (shadow acne).
const T_MIN: f64 = 0.001;

/// Radiance seen along `ray`, following scatters until absorption, escape to
/// the background, or an exhausted depth budget.
///
/// Depth exhaustion is not an error: it returns black, modeling the energy
/// lost after too many bounces. The recursion strictly decreases `depth`.
pub fn ray_color(ray: &Ray, world: &World, depth: u32, rng: &mut dyn RngCore) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    match world.hit(ray, Interval::new(T_MIN, f64::INFINITY)) {
        Some(rec) => match rec.material.scatter(ray, &rec, rng) {
            Some(scatter) => {
                scatter.attenuation * ray_color(&scatter.ray, world, depth - 1, rng)
            }
            None => Color::ZERO,
        },
        None => sky_gradient(ray),
    }
}

/// Background radiance: a vertical gradient from white at the horizon to sky
/// blue straight up, keyed on the ray direction's y component.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    (1.0 - t) * Color::ONE + t * Color::new(0.5, 0.7, 1.0)
}
