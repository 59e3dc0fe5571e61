//! Math type aliases and helper functions.

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// Convert a vector from the authoring axis convention (right-handed, Z up)
/// to the container's convention: `(x, y, z)` becomes `(x, z, -y)`.
///
/// Applies to positions and normals alike. The container records no axis
/// metadata; this convention is fixed.
pub fn convert_axes(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.z, -v.y)
}
