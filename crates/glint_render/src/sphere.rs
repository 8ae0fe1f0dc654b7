//! Sphere primitive for ray tracing.

use crate::{hittable::HitRecord, Material, Ray};
use glint_math::{Interval, Vec3};
use std::sync::Arc;

/// A sphere primitive.
///
/// Materials are shared: many spheres may reference the same [`Material`]
/// instance, which is never mutated after construction.
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f64, material: Arc<Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    /// The sphere's center.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// The sphere's radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Clearance other objects must keep from the center to avoid clipping.
    /// Every surface point is exactly one radius away.
    pub fn min_separation(&self) -> f64 {
        self.radius
    }

    /// Analytic ray-sphere intersection.
    ///
    /// Solves |O + tD - C|^2 = r^2 with the half-coefficient substitution
    /// h = D.(C - O), so the quadratic's factors of two cancel.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Prefer the nearer root; when a ray both enters and exits, the near
        // intersection is the visible surface.
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let point = ray.at(root);
        let outward_normal = (point - self.center) / self.radius;
        Some(HitRecord::new(ray, root, point, outward_normal, &self.material))
    }
}
