//! Convex polyhedron volume (not implemented yet)

use voxcast_core::Point3d;

/// A convex polyhedron described by its vertices.
///
/// Construction works so the variant can participate in volume lists, but
/// neither bounds nor membership is implemented; both report
/// `Error::Unsupported` through `Volume`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyhedron {
    pub vertices: Vec<Point3d>,
}

impl Polyhedron {
    /// Create a polyhedron from its vertex list
    pub fn new(vertices: Vec<Point3d>) -> Self {
        // TODO: take the convex hull, reject concave input, and build
        // membership from the half-spaces of the hull faces.
        Self { vertices }
    }
}
