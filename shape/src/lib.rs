mod interaction;
mod mesh;
mod simple;

use geometry::ray::Ray;

pub use interaction::Interaction;
pub use mesh::*;
pub use simple::*;

/// Represents the characteristics of a shape that can interact with a ray.
/// - See `simple.rs` for the standalone `IsolatedTriangle` and the intersection routine itself.
/// - See `mesh.rs` for the indexed `TriangleMesh`.
///
/// `margin` is the self-intersection guard: candidate hits whose position lies within `margin`
/// of the ray origin on every axis are discarded.
pub trait Shape {
    fn summary(&self) -> String;
    /// Returns the nearest accepted hit within the ray's extent.
    fn intersect(&self, r: &Ray, margin: f32) -> Option<Interaction>;
    /// Returns true on the first accepted hit within the ray's extent.
    fn occludes(&self, r: &Ray, margin: f32) -> bool;
}
