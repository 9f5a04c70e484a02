//! Axis-aligned box volume

use voxcast_core::{Bounds, Point3d};

/// An axis-aligned box with a strictly interior membership test.
///
/// Points on any face are outside, so adjacent boxes sharing a face never
/// claim the same lattice points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    bounds: Bounds,
}

impl Cuboid {
    /// Create a cuboid occupying the given bounds
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    /// Whether `point` lies strictly inside the box on every axis.
    pub fn contains(&self, point: &Point3d) -> bool {
        let lo = &self.bounds.mins;
        let hi = &self.bounds.maxs;
        lo.x < point.x
            && point.x < hi.x
            && lo.y < point.y
            && point.y < hi.y
            && lo.z < point.z
            && point.z < hi.z
    }

    /// The bounds this box was constructed with.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}
