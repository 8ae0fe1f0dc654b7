//! Surface scattering over the closed set of materials.

use crate::{hittable::HitRecord, Ray};
use glint_math::{gen_f64, random_in_unit_sphere, random_unit_vector, Vec3};
use rand::RngCore;

/// Color type alias (RGB values in [0, 1]).
pub type Color = Vec3;

/// Outcome of a successful scatter: the bounced ray and the per-channel
/// factor applied to whatever it goes on to see.
#[derive(Debug, Clone, Copy)]
pub struct Scatter {
    pub attenuation: Color,
    pub ray: Ray,
}

/// The closed set of surface materials.
///
/// `None` from [`Material::scatter`] means the ray was absorbed and
/// contributes black.
pub enum Material {
    Lambertian(Lambertian),
    Metal(Metal),
    Dielectric(Dielectric),
}

impl Material {
    /// A diffuse material with the given albedo.
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian(Lambertian { albedo })
    }

    /// A reflective material. `fuzz` is surface roughness, clamped to [0, 1]:
    /// 0 is a perfect mirror, 1 is very rough.
    pub fn metal(albedo: Color, fuzz: f64) -> Self {
        Material::Metal(Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        })
    }

    /// A clear refractive material (1.0 = air, 1.5 = glass, 2.4 = diamond).
    pub fn dielectric(refractive_index: f64) -> Self {
        Material::Dielectric(Dielectric { refractive_index })
    }

    /// Scatter an incoming ray off a surface hit.
    pub fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<Scatter> {
        match self {
            Material::Lambertian(m) => m.scatter(rec, rng),
            Material::Metal(m) => m.scatter(ray_in, rec, rng),
            Material::Dielectric(m) => m.scatter(ray_in, rec, rng),
        }
    }
}

/// Lambertian (diffuse) material.
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    fn scatter(&self, rec: &HitRecord<'_>, rng: &mut dyn RngCore) -> Option<Scatter> {
        // Normal plus a unit-sphere-surface sample biases the bounce toward
        // the normal hemisphere, approximating a cosine-weighted distribution.
        let mut scatter_direction = rec.normal + random_unit_vector(rng);

        // The sample can nearly cancel the normal; fall back to the normal
        // itself rather than emit a zero-length ray.
        if scatter_direction.length_squared() < 1e-16 {
            scatter_direction = rec.normal;
        }

        Some(Scatter {
            attenuation: self.albedo,
            ray: Ray::new(rec.point, scatter_direction),
        })
    }
}

/// Metal (specular) material with optional roughness.
pub struct Metal {
    albedo: Color,
    fuzz: f64,
}

impl Metal {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<Scatter> {
        let reflected = reflect(ray_in.direction().normalize(), rec.normal);
        let scattered_direction = reflected + self.fuzz * random_in_unit_sphere(rng);

        // A fuzzed ray that dips below the surface would travel backward
        // through the material; absorb it instead.
        if scattered_direction.dot(rec.normal) > 0.0 {
            Some(Scatter {
                attenuation: self.albedo,
                ray: Ray::new(rec.point, scattered_direction),
            })
        } else {
            None
        }
    }
}

/// Dielectric (clear refractive) material.
pub struct Dielectric {
    refractive_index: f64,
}

impl Dielectric {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<Scatter> {
        // No absorption in clear glass.
        let attenuation = Color::ONE;
        // The surrounding medium is assumed to have index 1.
        let refraction_ratio = if rec.front_face {
            1.0 / self.refractive_index
        } else {
            self.refractive_index
        };

        let unit_direction = ray_in.direction().normalize();
        let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        // Snell's law has no real solution past the critical angle: total
        // internal reflection.
        let cannot_refract = refraction_ratio * sin_theta > 1.0;

        let direction =
            if cannot_refract || reflectance(cos_theta, refraction_ratio) > gen_f64(rng) {
                reflect(unit_direction, rec.normal)
            } else {
                refract(unit_direction, rec.normal, refraction_ratio)
            };

        Some(Scatter {
            attenuation,
            ray: Ray::new(rec.point, direction),
        })
    }
}

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface with the given index ratio,
/// split into components perpendicular and parallel to the normal.
#[inline]
fn refract(uv: Vec3, n: Vec3, etai_over_etat: f64) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

/// Schlick's approximation of the Fresnel reflectance.
#[inline]
fn reflectance(cosine: f64, refractive_index: f64) -> f64 {
    let r0 = ((1.0 - refractive_index) / (1.0 + refractive_index)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn head_on_record(material: &Material) -> HitRecord<'_> {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        HitRecord::new(
            &ray,
            0.5,
            Vec3::new(0.0, 0.0, -0.5),
            Vec3::new(0.0, 0.0, 1.0),
            material,
        )
    }

    #[test]
    fn test_reflect_preserves_incidence_angle() {
        let n = Vec3::new(0.0, 1.0, 0.0);
        for d in [
            Vec3::new(1.0, -1.0, 0.0).normalize(),
            Vec3::new(0.3, -0.8, 0.5).normalize(),
            Vec3::new(0.0, -1.0, 0.0),
        ] {
            let r = reflect(d, n);
            assert!((r.dot(n) + d.dot(n)).abs() < 1e-12);
            assert!((r.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_reflectance_at_normal_incidence() {
        // R0 for glass: ((1 - 1.5) / (1 + 1.5))^2 = 0.04.
        assert!((reflectance(1.0, 1.5) - 0.04).abs() < 1e-12);
        // Symmetric in the index ratio.
        assert!((reflectance(1.0, 1.0 / 1.5) - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_lambertian_always_scatters_with_albedo() {
        let material = Material::lambertian(Color::new(0.9, 0.1, 0.1));
        let rec = head_on_record(&material);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let scatter = material
                .scatter(&Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0)), &rec, &mut rng)
                .expect("diffuse scatter always succeeds");
            assert_eq!(scatter.attenuation, Color::new(0.9, 0.1, 0.1));
            // Bounce starts at the surface and stays in the normal hemisphere.
            assert_eq!(scatter.ray.origin(), rec.point);
            assert!(scatter.ray.direction().dot(rec.normal) > 0.0);
        }
    }

    #[test]
    fn test_metal_fuzz_zero_is_deterministic() {
        let material = Material::metal(Color::new(0.8, 0.8, 0.8), 0.0);
        let rec = head_on_record(&material);
        let incoming = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, -1.0).normalize());

        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(99);
        let a = material.scatter(&incoming, &rec, &mut rng_a).unwrap();
        let b = material.scatter(&incoming, &rec, &mut rng_b).unwrap();

        // With no fuzz the reflection ignores the generator entirely.
        assert_eq!(a.ray.direction(), b.ray.direction());
        let expected = reflect(incoming.direction(), rec.normal);
        assert!((a.ray.direction() - expected).length() < 1e-12);
    }

    #[test]
    fn test_metal_absorbs_rays_scattered_into_surface() {
        let material = Material::metal(Color::new(0.8, 0.8, 0.8), 1.0);
        let rec = head_on_record(&material);
        // Grazing incidence with full fuzz dips below the horizon often.
        let incoming = Ray::new(
            Vec3::new(-10.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, -1e-4).normalize(),
        );

        let mut rng = StdRng::seed_from_u64(42);
        let absorbed = (0..200)
            .filter(|_| material.scatter(&incoming, &rec, &mut rng).is_none())
            .count();
        assert!(absorbed > 0, "full fuzz at grazing incidence must reject some rays");
    }

    #[test]
    fn test_dielectric_always_scatters_white() {
        let material = Material::dielectric(1.5);
        let rec = head_on_record(&material);
        let incoming = Ray::new(Vec3::ZERO, Vec3::new(0.6, 0.0, -0.8));
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let scatter = material
                .scatter(&incoming, &rec, &mut rng)
                .expect("glass always reflects or refracts");
            assert_eq!(scatter.attenuation, Color::ONE);
        }
    }

    #[test]
    fn test_dielectric_total_internal_reflection() {
        let material = Material::dielectric(1.5);
        // Ray leaving the glass at a shallow angle: back face, ratio 1.5,
        // sin(theta) large enough that refraction is impossible.
        let incoming = Ray::new(Vec3::ZERO, Vec3::new(0.9, 0.0, 0.436).normalize());
        let inside_ray = Ray::new(Vec3::ZERO, incoming.direction());
        let rec = HitRecord::new(
            &inside_ray,
            1.0,
            incoming.direction(),
            // Outward normal along +z; the ray exits from inside.
            Vec3::new(0.0, 0.0, 1.0),
            &material,
        );
        assert!(!rec.front_face);

        let mut rng = StdRng::seed_from_u64(42);
        let unit = incoming.direction();
        let expected = reflect(unit, rec.normal);
        for _ in 0..20 {
            let scatter = material.scatter(&incoming, &rec, &mut rng).unwrap();
            assert!(
                (scatter.ray.direction() - expected).length() < 1e-12,
                "past the critical angle every sample must reflect"
            );
        }
    }

    #[test]
    fn test_metal_fuzz_is_clamped() {
        let material = Material::metal(Color::ONE, 7.5);
        let Material::Metal(metal) = &material else {
            panic!("constructor must produce a metal");
        };
        assert_eq!(metal.fuzz, 1.0);
    }
}
