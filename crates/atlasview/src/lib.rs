//! atlasview: loads anatomy and gene-expression models into renderer-ready geometry.
//!
//! Models are legacy VTK grid files holding either a triangulated anatomy
//! surface or a point cloud whose per-point scalar (e.g. expression strength)
//! becomes a greyscale color, an opacity and a point size.
//!
//! # Quick Start
//!
//! ```no_run
//! use atlasview::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let grid = load_grid_file("models/embryo.vtk")?;
//!     let positions = grid.position_buffer();
//!     if let Some(indices) = grid.index_buffer() {
//!         println!("surface: {} floats, {} indices", positions.len(), indices.len());
//!     }
//!
//!     // Load a whole scene, skipping models that fail
//!     for model in load_manifest("models/scene.json")? {
//!         println!("{}: radius {}", model.name, model.grid.bounding_sphere().radius);
//!     }
//!     Ok(())
//! }
//! ```

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod format;
mod load;
mod manifest;

// Re-export core types
pub use atlasview_core::{
    bounds::{BoundingBox, BoundingSphere},
    error::{AtlasError, GridParseError, Result},
    grid::{ParsedGrid, PointAttributes, Topology, TriangleSurface},
    options::{ParseOptions, PointDataPolicy},
    scalar::{normalize_scalar, size_factor, ScalarType},
    DVec3, Vec3,
};

// Re-export the grid file reader and writer
pub use atlasview_vtk::{parse_grid_file, write_grid_file, GridParser, GridWriter};

pub use format::ModelFormat;
pub use load::{load_grid_file, load_grid_file_with};
pub use manifest::{load_manifest, LoadedModel, ModelEntry, ModelManifest};

/// Initializes logging from the `RUST_LOG` environment variable.
///
/// Safe to call more than once; later calls do nothing.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
