/// Defines useful functions for common math operations, tools and constants:
/// - `Angle` to represent angles unambiguously,
/// - `Float` extension trait with checked division,
/// - Barycentric interpolation on not only primitive types,
/// - Macros to check if two math quantities are less than / greater than (or equal to) each other.
pub mod float;

/// Homogeneous-coordinate maths module.
/// - Types: 2D and 3D vectors, 3D points, 3x3 matrices.
/// - Function `normalize()` to build a normalized `Vec3`.
/// - Method `Vec3::mirror()` to reflect a direction about a surface normal.
pub mod hcm;

pub use float::Angle;
pub fn new_rad(rad: f32) -> float::Angle {
    float::Angle::new_rad(rad)
}
pub fn new_deg(deg: f32) -> float::Angle {
    float::Angle::new_deg(deg)
}
