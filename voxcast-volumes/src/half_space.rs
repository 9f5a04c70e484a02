//! Half-space volume

use voxcast_core::{Bounds, Point3d, Vector3d};

/// The half of space on the normal's side of a plane, clipped for rendering
/// by borrowed bounds.
///
/// A half-space is infinite, so it cannot infer bounds of its own; the caller
/// supplies the region of interest (typically the bounds of the volumes it is
/// composed with). Membership is inclusive: points on the plane belong to the
/// half-space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfSpace {
    pub center: Point3d,
    pub normal: Vector3d,
    bounds: Bounds,
}

impl HalfSpace {
    /// Create a half-space through `center` facing `normal`, rendered
    /// within `bounds`
    pub fn new(center: Point3d, normal: Vector3d, bounds: Bounds) -> Self {
        Self {
            center,
            normal,
            bounds,
        }
    }

    /// Whether `point` is on or in front of the plane.
    pub fn contains(&self, point: &Point3d) -> bool {
        (point - self.center).dot(&self.normal) >= 0.0
    }

    /// The borrowed region of interest.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}
