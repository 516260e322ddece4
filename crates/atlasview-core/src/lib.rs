//! Core types for atlasview.
//!
//! This crate provides the data model shared by the grid file loader and the
//! code that hands its results to a renderer:
//! - [`ParsedGrid`], the result of loading a legacy grid file
//! - [`Topology`] and [`PointAttributes`] for the optional file sections
//! - [`BoundingBox`] and [`BoundingSphere`] computed over the vertices
//! - Scalar normalization and vertex normal computation
//! - Error types and parser options

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Render buffers are f32; vertices are f64
#![allow(clippy::cast_possible_truncation)]

pub mod bounds;
pub mod error;
pub mod grid;
pub mod normals;
pub mod options;
pub mod scalar;

pub use bounds::{BoundingBox, BoundingSphere};
pub use error::{AtlasError, GridParseError, Result};
pub use grid::{ParsedGrid, PointAttributes, Topology, TriangleSurface};
pub use normals::compute_vertex_normals;
pub use options::{ParseOptions, PointDataPolicy};
pub use scalar::{normalize_scalar, size_factor, ScalarType};

// Re-export glam types for convenience
pub use glam::{DVec3, Vec3};
