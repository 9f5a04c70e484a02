//! # Voxcast Diagram
//!
//! 2D lattice rasterizers and layered ASCII diagrams.
//!
//! This crate turns lattice point sets into printable diagrams: flat
//! rasterizers for circles, rings, slices and polygons, a grid formatter
//! with configurable glyphs, and the layer compositor that slices rendered
//! 3D volumes into one diagram per z plane.

pub mod grid;
pub mod layers;
pub mod shapes;

// Re-export commonly used items
pub use grid::*;
pub use layers::*;
pub use shapes::*;
