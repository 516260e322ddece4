//! Configuration options for the grid file parser.

use serde::{Deserialize, Serialize};

/// Options controlling how a grid file is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// What to do when `POINT_DATA` declares a different count than `POINTS`.
    pub point_data_policy: PointDataPolicy,
}

impl ParseOptions {
    /// Creates parse options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the point data count mismatch policy.
    pub fn with_point_data_policy(mut self, policy: PointDataPolicy) -> Self {
        self.point_data_policy = policy;
        self
    }
}

/// Handling of a `POINT_DATA` section whose count disagrees with the point count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointDataPolicy {
    /// Keep the geometry and drop the attribute section (default).
    #[default]
    DropAttributes,
    /// Fail the whole document.
    Reject,
}
