//! Core data structures for voxcast
//!
//! This crate provides the fundamental types for sampling implicit volumes
//! onto the integer lattice: points, axis-aligned bounds (real-valued and
//! integer-valued), lattice point sets, and the shared error type.

pub mod bounds;
pub mod error;
pub mod point;
pub mod point_set;

pub use bounds::*;
pub use error::*;
pub use point::*;
pub use point_set::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point2, Point3, Vector2, Vector3};
