//! # Voxcast Volumes
//!
//! Implicit volume shapes and the lattice sampler.
//!
//! This crate provides the closed set of volume shapes (boxes, spheres,
//! half-spaces and swept parametric paths), the bounded scalar minimizer the
//! swept paths are built on, and the sampler that rasterizes any volume onto
//! the 3D integer lattice.

pub mod cuboid;
pub mod cylinder;
pub mod half_space;
pub mod minimize;
pub mod path;
pub mod polyhedron;
pub mod sphere;
pub mod volume;

// Re-export commonly used items
pub use cuboid::*;
pub use cylinder::*;
pub use half_space::*;
pub use minimize::*;
pub use path::*;
pub use polyhedron::*;
pub use sphere::*;
pub use volume::*;
