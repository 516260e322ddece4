//! JSON manifests listing the models of a scene.
//!
//! ```json
//! {
//!   "options": { "point_data_policy": "drop_attributes" },
//!   "models": [
//!     { "name": "embryo", "path": "embryo.vtk" },
//!     { "name": "shh", "path": "shh.vtk", "options": { "point_data_policy": "reject" } }
//!   ]
//! }
//! ```
//!
//! Relative model paths resolve against the manifest's directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{load_grid_file_with, ParseOptions, ParsedGrid, Result};

/// One model listed in a manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Unique display name.
    pub name: String,
    /// Path to the model file.
    pub path: PathBuf,
    /// Parse options overriding the manifest defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ParseOptions>,
}

/// A list of models plus default parse options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelManifest {
    /// Parse options for entries that don't set their own.
    #[serde(default)]
    pub options: ParseOptions,
    /// Models in load order.
    pub models: Vec<ModelEntry>,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

/// A model that loaded successfully.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    /// Name from the manifest entry.
    pub name: String,
    /// The parsed geometry.
    pub grid: ParsedGrid,
}

impl ModelManifest {
    /// Parses a manifest from JSON. Relative paths resolve against the
    /// current directory.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut manifest = Self::from_json(&std::fs::read_to_string(path)?)?;
        manifest.base_dir = path.parent().map(Path::to_path_buf);
        Ok(manifest)
    }

    /// Returns the file path of an entry, resolved against the manifest directory.
    pub fn resolve(&self, entry: &ModelEntry) -> PathBuf {
        match &self.base_dir {
            Some(dir) if entry.path.is_relative() => dir.join(&entry.path),
            _ => entry.path.clone(),
        }
    }

    /// Loads every model.
    ///
    /// A model that fails to load is logged and skipped; the rest still load.
    pub fn load_models(&self) -> Vec<LoadedModel> {
        let mut loaded = Vec::with_capacity(self.models.len());
        for entry in &self.models {
            let path = self.resolve(entry);
            let options = entry.options.unwrap_or(self.options);
            match load_grid_file_with(&path, options) {
                Ok(grid) => loaded.push(LoadedModel {
                    name: entry.name.clone(),
                    grid,
                }),
                Err(e) => log::warn!("skipping model '{}' ({}): {e}", entry.name, path.display()),
            }
        }
        loaded
    }
}

/// Reads a manifest file and loads its models, skipping any that fail.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<Vec<LoadedModel>> {
    let manifest = ModelManifest::load(path)?;
    let loaded = manifest.load_models();
    log::info!("loaded {} of {} models", loaded.len(), manifest.models.len());
    Ok(loaded)
}
