//! Legacy VTK grid file support for atlasview.
//!
//! Reads ASCII `DATASET POLYDATA` files holding either a triangle/quad surface
//! or a point cloud with an optional per-point scalar, and writes them back.
//!
//! ```
//! use atlasview_vtk::{parse_grid_file, write_grid_file};
//!
//! let text = "# vtk DataFile Version 1.0\npoints\nASCII\nDATASET POLYDATA\n\
//!             POINTS 2 float\n0 0 0\n1 2 3\n\
//!             POINT_DATA 2\nSCALARS s char\nLOOKUP_TABLE default\n0 255\n";
//! let grid = parse_grid_file(text).unwrap();
//! assert!(grid.is_point_cloud());
//! assert_eq!(grid.opacity_buffer(), Some(vec![0.0, 1.0]));
//!
//! let again = parse_grid_file(&write_grid_file(&grid)).unwrap();
//! assert_eq!(again.vertices(), grid.vertices());
//! ```

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod cursor;
pub mod parser;
pub mod writer;

pub use parser::{parse_grid_file, GridParser};
pub use writer::{write_grid_file, GridWriter};

pub use atlasview_core::{GridParseError, ParseOptions, ParsedGrid, PointDataPolicy};
