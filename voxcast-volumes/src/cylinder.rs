//! Capped cylinder volume (not implemented yet)

use voxcast_core::Point3d;

/// A capped cylinder between two endpoints.
///
/// Construction works so the variant can participate in volume lists, but
/// neither bounds nor membership is implemented; both report
/// `Error::Unsupported` through `Volume`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub a: Point3d,
    pub b: Point3d,
    pub radius: f64,
}

impl Cylinder {
    /// Create a cylinder of the given radius between endpoints `a` and `b`
    pub fn new(a: Point3d, b: Point3d, radius: f64) -> Self {
        // TODO: derive bounds from the extrema of the two endcap circles
        // along each axis, then implement membership by projecting onto the
        // axis segment.
        Self { a, b, radius }
    }
}
