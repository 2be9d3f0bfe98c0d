//! Placement engine for packing axis-aligned boxes into a single 3D container.

/// Entities to model the 3D container loading problem
pub mod entities;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
