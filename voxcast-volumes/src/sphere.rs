//! Sphere volume

use voxcast_core::{Bounds, Point3d, Vector3d};

/// A solid ball given by center and radius.
///
/// Membership is strict, so points exactly on the surface are outside, and is
/// decided on squared distances to avoid the square root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point3d,
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere from center and radius
    pub fn new(center: Point3d, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Whether `point` lies strictly inside the surface.
    pub fn contains(&self, point: &Point3d) -> bool {
        (point - self.center).norm_squared() < self.radius * self.radius
    }

    /// The cube `center ± radius`, widened to integer corners.
    pub fn bounds(&self) -> Bounds {
        let extent = Vector3d::repeat(self.radius);
        Bounds::new(self.center - extent, self.center + extent).snapped()
    }

    /// A copy of this sphere moved by `offset`.
    pub fn shifted(&self, offset: &Vector3d) -> Sphere {
        Sphere::new(self.center + offset, self.radius)
    }
}
