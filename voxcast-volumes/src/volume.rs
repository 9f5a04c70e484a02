//! The closed set of volume shapes and the lattice sampler

use log::debug;
use rayon::prelude::*;
use voxcast_core::{
    to_real, Bounds, Error, LatticePoint, LatticePointIter, Point3d, PointSet, Result, Vector3d,
};

use crate::cuboid::Cuboid;
use crate::cylinder::Cylinder;
use crate::half_space::HalfSpace;
use crate::path::SweptPath;
use crate::polyhedron::Polyhedron;
use crate::sphere::Sphere;

/// The closed set of volume shapes.
///
/// Every variant answers the same two questions, an enclosing bounding box
/// and real-valued point membership, and all rasterization funnels through
/// [`Volume::render`]. `Cylinder` and `Polyhedron` are placeholders whose
/// queries fail with [`Error::Unsupported`].
///
/// Volumes are immutable once constructed, so they can be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub enum Volume {
    Cuboid(Cuboid),
    Sphere(Sphere),
    HalfSpace(HalfSpace),
    Path(SweptPath),
    Cylinder(Cylinder),
    Polyhedron(Polyhedron),
}

impl Volume {
    /// Create an axis-aligned box volume
    pub fn cuboid(bounds: Bounds) -> Self {
        Volume::Cuboid(Cuboid::new(bounds))
    }

    /// Create a sphere volume
    pub fn sphere(center: Point3d, radius: f64) -> Self {
        Volume::Sphere(Sphere::new(center, radius))
    }

    /// Create a half-space volume rendered within `bounds`
    pub fn half_space(center: Point3d, normal: Vector3d, bounds: Bounds) -> Self {
        Volume::HalfSpace(HalfSpace::new(center, normal, bounds))
    }

    /// Axis-aligned bounds enclosing the volume.
    pub fn bounds(&self) -> Result<Bounds> {
        match self {
            Volume::Cuboid(cuboid) => Ok(cuboid.bounds()),
            Volume::Sphere(sphere) => Ok(sphere.bounds()),
            Volume::HalfSpace(half_space) => Ok(half_space.bounds()),
            Volume::Path(path) => Ok(path.bounds()),
            Volume::Cylinder(_) => Err(Error::Unsupported("cylinder bounds".to_string())),
            Volume::Polyhedron(_) => Err(Error::Unsupported("polyhedron bounds".to_string())),
        }
    }

    /// Whether the real-valued `point` lies inside the volume.
    pub fn contains(&self, point: &Point3d) -> Result<bool> {
        match self {
            Volume::Cuboid(cuboid) => Ok(cuboid.contains(point)),
            Volume::Sphere(sphere) => Ok(sphere.contains(point)),
            Volume::HalfSpace(half_space) => Ok(half_space.contains(point)),
            Volume::Path(path) => Ok(path.contains(point)),
            Volume::Cylinder(_) => Err(Error::Unsupported("cylinder membership".to_string())),
            Volume::Polyhedron(_) => Err(Error::Unsupported("polyhedron membership".to_string())),
        }
    }

    /// Rasterize the volume onto the integer lattice.
    ///
    /// Enumerates every lattice point within the volume's integer bounds and
    /// keeps those whose real-valued position passes the membership test. The
    /// iterator is lazy, finite and restartable: each call starts a fresh
    /// enumeration over the immutable volume, so repeated renders yield the
    /// same points.
    pub fn render(&self) -> Result<RenderPoints<'_>> {
        let lattice = self.bounds()?.to_lattice();
        debug!("rendering over {} candidate lattice points", lattice.num_points());
        Ok(RenderPoints {
            volume: self,
            candidates: lattice.points(),
        })
    }

    // Membership for the sampler. Placeholder variants never get here
    // because `render` rejects them while computing bounds.
    fn is_inside(&self, point: &Point3d) -> bool {
        match self {
            Volume::Cuboid(cuboid) => cuboid.contains(point),
            Volume::Sphere(sphere) => sphere.contains(point),
            Volume::HalfSpace(half_space) => half_space.contains(point),
            Volume::Path(path) => path.contains(point),
            Volume::Cylinder(_) | Volume::Polyhedron(_) => false,
        }
    }
}

impl From<Cuboid> for Volume {
    fn from(cuboid: Cuboid) -> Self {
        Volume::Cuboid(cuboid)
    }
}

impl From<Sphere> for Volume {
    fn from(sphere: Sphere) -> Self {
        Volume::Sphere(sphere)
    }
}

impl From<HalfSpace> for Volume {
    fn from(half_space: HalfSpace) -> Self {
        Volume::HalfSpace(half_space)
    }
}

impl From<SweptPath> for Volume {
    fn from(path: SweptPath) -> Self {
        Volume::Path(path)
    }
}

impl From<Cylinder> for Volume {
    fn from(cylinder: Cylinder) -> Self {
        Volume::Cylinder(cylinder)
    }
}

impl From<Polyhedron> for Volume {
    fn from(polyhedron: Polyhedron) -> Self {
        Volume::Polyhedron(polyhedron)
    }
}

/// Lazy lattice rasterization of one volume, created by [`Volume::render`].
#[derive(Debug, Clone)]
pub struct RenderPoints<'a> {
    volume: &'a Volume,
    candidates: LatticePointIter,
}

impl Iterator for RenderPoints<'_> {
    type Item = LatticePoint;

    fn next(&mut self) -> Option<LatticePoint> {
        loop {
            let candidate = self.candidates.next()?;
            if self.volume.is_inside(&to_real(&candidate)) {
                return Some(candidate);
            }
        }
    }
}

/// The smallest bounds containing every volume in the slice.
///
/// Fails with [`Error::EmptyInput`] when the slice is empty and propagates
/// the failure of any member that cannot report bounds.
pub fn bounds_of_volumes(volumes: &[Volume]) -> Result<Bounds> {
    let (first, rest) = volumes
        .split_first()
        .ok_or_else(|| Error::EmptyInput("bounds of zero volumes".to_string()))?;
    let mut bounds = first.bounds()?;
    for volume in rest {
        bounds = bounds.union(&volume.bounds()?);
    }
    Ok(bounds)
}

/// Render every volume into a materialized point set, in parallel.
///
/// Volumes are immutable, so they fan out across the rayon pool; any
/// member's failure fails the whole call.
pub fn render_all(volumes: &[Volume]) -> Result<Vec<PointSet>> {
    volumes
        .par_iter()
        .map(|volume| Ok(volume.render()?.collect()))
        .collect()
}
