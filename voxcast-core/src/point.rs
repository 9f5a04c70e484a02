//! Point types and small scalar helpers

use nalgebra::{Point2, Point3, Vector2, Vector3};

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// A 2D point with double precision coordinates
pub type Point2d = Point2<f64>;

/// A 2D vector with double precision components
pub type Vector2d = Vector2<f64>;

/// A point on the 3D integer lattice
pub type LatticePoint = Point3<i64>;

/// A point on the 2D integer lattice (one diagram layer)
pub type LatticePoint2 = Point2<i64>;

/// An integer offset between lattice points
pub type LatticeVector = Vector3<i64>;

/// The real-valued position of a 3D lattice point.
pub fn to_real(point: &LatticePoint) -> Point3d {
    Point3d::new(point.x as f64, point.y as f64, point.z as f64)
}

/// The real-valued position of a 2D lattice point.
pub fn to_real2(point: &LatticePoint2) -> Point2d {
    Point2d::new(point.x as f64, point.y as f64)
}

/// Linear interpolation between `low` and `high`, exact at both endpoints.
///
/// # Example
///
/// ```
/// use voxcast_core::point::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
/// ```
pub fn lerp(low: f64, high: f64, t: f64) -> f64 {
    low * (1.0 - t) + high * t
}

/// The clockwise perpendicular of a 2D vector.
///
/// Walking along `v`, the returned vector points to the right-hand side.
pub fn perp_clockwise(v: &Vector2d) -> Vector2d {
    Vector2d::new(v.y, -v.x)
}
