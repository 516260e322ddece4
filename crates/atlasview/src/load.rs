//! Loading grid files from disk.

use std::path::Path;

use atlasview_vtk::GridParser;

use crate::{AtlasError, ModelFormat, ParseOptions, ParsedGrid, Result};

/// Loads a model file with default parse options.
///
/// # Example
///
/// ```no_run
/// use atlasview::*;
///
/// fn main() -> Result<()> {
///     let grid = load_grid_file("models/heart.vtk")?;
///     println!("{} vertices, {} faces", grid.num_vertices(), grid.num_faces());
///     Ok(())
/// }
/// ```
pub fn load_grid_file(path: impl AsRef<Path>) -> Result<ParsedGrid> {
    load_grid_file_with(path, ParseOptions::default())
}

/// Loads a model file with the given parse options.
///
/// The format is chosen by file extension; only VTK grid files are supported.
pub fn load_grid_file_with(path: impl AsRef<Path>, options: ParseOptions) -> Result<ParsedGrid> {
    let path = path.as_ref();
    match ModelFormat::from_path(path)? {
        ModelFormat::Vtk => {}
        format @ ModelFormat::Stl => {
            return Err(AtlasError::UnsupportedFormat(format.extension().to_string()));
        }
    }

    let text = std::fs::read_to_string(path)?;
    let grid = GridParser::new(options).parse(&text)?;
    log::info!(
        "loaded {}: {} vertices, {} faces{}",
        path.display(),
        grid.num_vertices(),
        grid.num_faces(),
        if grid.attributes().is_some() { ", with point data" } else { "" }
    );
    Ok(grid)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::GridParseError;
    use std::path::PathBuf;

    pub(crate) const TETRAHEDRON: &str = "# vtk DataFile Version 1.0\nc\nASCII\nDATASET POLYDATA\n\
        POINTS 4 float\n0 0 0\n100 0 0\n50 87 0\n50 43 87\n\
        POLYGONS 4 16\n3 0 1 2\n3 0 1 3\n3 1 2 3\n3 2 0 3\n";

    /// Creates an empty scratch directory unique to `name`.
    pub(crate) fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("atlasview-{}-{name}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_vtk() {
        let dir = scratch_dir("load_vtk");
        let path = dir.join("tetra.vtk");
        std::fs::write(&path, TETRAHEDRON).unwrap();

        let grid = load_grid_file(&path).unwrap();
        assert_eq!(grid.num_vertices(), 4);
        assert_eq!(grid.num_faces(), 4);
    }

    #[test]
    fn test_missing_file() {
        let dir = scratch_dir("missing_file");
        let err = load_grid_file(dir.join("absent.vtk")).unwrap_err();
        assert!(matches!(err, AtlasError::IoError(_)));
    }

    #[test]
    fn test_stl_not_supported() {
        let err = load_grid_file("embryo.stl").unwrap_err();
        assert!(matches!(err, AtlasError::UnsupportedFormat(ref ext) if ext == "stl"));
    }

    #[test]
    fn test_parse_failure() {
        let dir = scratch_dir("parse_failure");
        let path = dir.join("bad.vtk");
        std::fs::write(&path, "not a grid file\n").unwrap();

        let err = load_grid_file(&path).unwrap_err();
        assert!(matches!(
            err,
            AtlasError::Parse(GridParseError::MagicMismatch { line: 1 })
        ));
    }
}
