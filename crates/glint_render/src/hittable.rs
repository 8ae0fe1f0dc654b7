//! Hit records and nearest-hit traversal over the closed set of primitives.

use crate::{Material, Ray, Sphere};
use glint_math::{Interval, Vec3};

/// Record of a ray-surface intersection.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// World-space intersection point.
    pub point: Vec3,
    /// Unit surface normal, always oriented against the incoming ray.
    pub normal: Vec3,
    /// Material of the surface that was hit.
    pub material: &'a Material,
    /// Ray parameter at the intersection.
    pub t: f64,
    /// True when the ray arrived from outside the surface.
    pub front_face: bool,
}

impl<'a> HitRecord<'a> {
    /// Build a record from an outward normal, flipping it to oppose the ray.
    pub fn new(
        ray: &Ray,
        t: f64,
        point: Vec3,
        outward_normal: Vec3,
        material: &'a Material,
    ) -> Self {
        let front_face = ray.direction().dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        Self {
            point,
            normal,
            material,
            t,
            front_face,
        }
    }
}

/// The closed set of surfaces a ray can intersect.
pub enum Primitive {
    Sphere(Sphere),
}

impl Primitive {
    /// Test the ray against this surface within the given parameter range.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(ray, ray_t),
        }
    }

    /// World-space center, consulted when placing new objects.
    pub fn center(&self) -> Vec3 {
        match self {
            Primitive::Sphere(sphere) => sphere.center(),
        }
    }

    /// Clearance other objects must keep from this one's center.
    pub fn min_separation(&self) -> f64 {
        match self {
            Primitive::Sphere(sphere) => sphere.min_separation(),
        }
    }
}

/// The scene: an append-only collection of primitives, read-only once
/// rendering starts.
#[derive(Default)]
pub struct World {
    objects: Vec<Primitive>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the world.
    pub fn add(&mut self, object: Primitive) {
        self.objects.push(object);
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the world is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Get the object at `index`.
    pub fn get(&self, index: usize) -> Option<&Primitive> {
        self.objects.get(index)
    }

    /// Iterate over all objects.
    pub fn iter(&self) -> std::slice::Iter<'_, Primitive> {
        self.objects.iter()
    }

    /// Find the nearest intersection along the ray.
    ///
    /// Linear scan, shrinking the upper bound to the closest confirmed hit so
    /// later candidates are only accepted if strictly closer.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest_so_far = ray_t.max;
        let mut nearest = None;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                nearest = Some(rec);
            }
        }

        nearest
    }
}
