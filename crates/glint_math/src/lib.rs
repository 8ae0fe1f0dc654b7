//! Math primitives for the glint renderer.
//!
//! Points, directions and colors all share one value type: `glam`'s f64
//! vector, re-exported here as [`Vec3`]. Callers track which interpretation
//! applies; the type enforces no domain constraint.

pub use glam::DVec3 as Vec3;

mod interval;
mod sample;

pub use interval::Interval;
pub use sample::{gen_f64, random_in_unit_disk, random_in_unit_sphere, random_range, random_unit_vector};
