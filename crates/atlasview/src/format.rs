//! Model file format detection.

use std::path::Path;

use crate::{AtlasError, Result};

/// A model file format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelFormat {
    /// Legacy VTK grid file (`.vtk`).
    Vtk,
    /// STL surface (`.stl`). Recognized but not loaded by this crate.
    Stl,
}

impl ModelFormat {
    /// Picks the format from the extension of `path`, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("vtk") => Ok(Self::Vtk),
            Some("stl") => Ok(Self::Stl),
            _ => Err(AtlasError::UnknownFormat(path.display().to_string())),
        }
    }

    /// Returns the canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Vtk => "vtk",
            Self::Stl => "stl",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(ModelFormat::from_path(Path::new("brain.vtk")).unwrap(), ModelFormat::Vtk);
        assert_eq!(ModelFormat::from_path(Path::new("a/b/HEART.VTK")).unwrap(), ModelFormat::Vtk);
        assert_eq!(ModelFormat::from_path(Path::new("embryo.stl")).unwrap(), ModelFormat::Stl);
    }

    #[test]
    fn test_unknown_extension() {
        for path in ["model.obj", "model", "archive.vtk.gz"] {
            assert!(matches!(
                ModelFormat::from_path(Path::new(path)),
                Err(AtlasError::UnknownFormat(_))
            ));
        }
    }

    #[test]
    fn test_extension() {
        assert_eq!(ModelFormat::Vtk.extension(), "vtk");
        assert_eq!(ModelFormat::Stl.extension(), "stl");
    }
}
