//! Demo scene: five fixed spheres plus a field of random small ones.

use std::sync::Arc;

use glint_math::{gen_f64, random_range, Vec3};
use glint_render::{Color, Material, Primitive, Sphere, World};
use rand::RngCore;

/// How many random spheres to attempt to place.
const RANDOM_SPHERE_COUNT: usize = 250;

/// Placement attempts per sphere before the scene is considered saturated.
const PLACEMENT_ATTEMPTS: usize = 50;

/// Build the demo world.
///
/// Five fixed spheres showcase each material; the rest are placed randomly
/// on the ground plane, rejecting any position that would clip an existing
/// object.
pub fn build_scene(rng: &mut dyn RngCore) -> World {
    let mut world = World::new();

    let ground = Arc::new(Material::lambertian(Color::new(0.5, 0.5, 0.5)));
    let red_diffuse = Arc::new(Material::lambertian(Color::new(0.9, 0.1, 0.1)));
    let polished_metal = Arc::new(Material::metal(Color::new(0.8, 0.8, 0.8), 0.0));
    let fuzzy_metal = Arc::new(Material::metal(Color::new(0.8, 0.8, 0.8), 0.8));
    let glass = Arc::new(Material::dielectric(1.5));

    world.add(Primitive::Sphere(Sphere::new(
        Vec3::new(2.0, 1.0, 4.0),
        1.0,
        red_diffuse,
    )));
    // One very large sphere acts as the ground.
    world.add(Primitive::Sphere(Sphere::new(
        Vec3::new(0.0, -1000.0, -1.0),
        1000.0,
        ground,
    )));
    world.add(Primitive::Sphere(Sphere::new(
        Vec3::new(0.0, 1.0, 2.0),
        1.0,
        glass,
    )));
    world.add(Primitive::Sphere(Sphere::new(
        Vec3::new(0.0, 1.0, -2.0),
        1.0,
        fuzzy_metal,
    )));
    world.add(Primitive::Sphere(Sphere::new(
        Vec3::new(2.0, 1.0, -6.0),
        1.0,
        polished_metal,
    )));

    for placed in 0..RANDOM_SPHERE_COUNT {
        let radius = 0.1 + 0.3 * gen_f64(rng);

        let Some(center) = place_sphere(&world, radius, rng) else {
            // No room left; stop generating early.
            log::debug!("scene saturated after {placed} random spheres");
            break;
        };

        world.add(Primitive::Sphere(Sphere::new(
            center,
            radius,
            random_material(rng),
        )));
    }

    world
}

/// Find a spot on the ground where a sphere of `radius` fits without
/// clipping any existing object. Candidates rest on the ground plane
/// (center height = radius).
fn place_sphere(world: &World, radius: f64, rng: &mut dyn RngCore) -> Option<Vec3> {
    for _ in 0..PLACEMENT_ATTEMPTS {
        let center = Vec3::new(
            20.0 * gen_f64(rng) - 10.0,
            radius,
            20.0 * gen_f64(rng) - 10.0,
        );

        let clipped = world.iter().any(|object| {
            (center - object.center()).length() < radius + object.min_separation()
        });
        if !clipped {
            return Some(center);
        }
    }
    None
}

/// Mostly diffuse, about 30% metallic, 10% glass.
fn random_material(rng: &mut dyn RngCore) -> Arc<Material> {
    let roll = gen_f64(rng);
    if roll < 0.6 {
        Arc::new(Material::lambertian(random_range(rng, 0.0, 1.0)))
    } else if roll < 0.9 {
        let albedo = random_range(rng, 0.6, 1.0);
        let fuzz = gen_f64(rng) / 2.0;
        Arc::new(Material::metal(albedo, fuzz))
    } else {
        Arc::new(Material::dielectric(1.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scene_has_fixed_spheres_and_random_field() {
        let mut rng = StdRng::seed_from_u64(42);
        let world = build_scene(&mut rng);

        assert!(world.len() >= 5);
        assert!(world.len() <= 5 + RANDOM_SPHERE_COUNT);

        // The ground sphere is present.
        assert!(world
            .iter()
            .any(|object| (object.center() - Vec3::new(0.0, -1000.0, -1.0)).length() < 1e-12));
    }

    #[test]
    fn test_random_spheres_do_not_clip() {
        let mut rng = StdRng::seed_from_u64(7);
        let world = build_scene(&mut rng);

        // Every random sphere (index >= 5) keeps its clearance from every
        // earlier object.
        for i in 5..world.len() {
            let sphere = world.get(i).unwrap();
            for j in 0..i {
                let other = world.get(j).unwrap();
                let distance = (sphere.center() - other.center()).length();
                assert!(
                    distance >= sphere.min_separation() + other.min_separation() - 1e-9,
                    "spheres {i} and {j} clip: distance {distance}"
                );
            }
        }
    }

    #[test]
    fn test_random_spheres_rest_on_ground() {
        let mut rng = StdRng::seed_from_u64(3);
        let world = build_scene(&mut rng);

        for i in 5..world.len() {
            let sphere = world.get(i).unwrap();
            assert!((sphere.center().y - sphere.min_separation()).abs() < 1e-12);
        }
    }
}
