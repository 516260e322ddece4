//! Bounding volumes computed over a vertex set.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl BoundingBox {
    /// Computes the tightest box around `points`.
    ///
    /// Returns `None` if `points` is empty.
    pub fn from_points(points: &[DVec3]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut min = DVec3::splat(f64::MAX);
        let mut max = DVec3::splat(f64::MIN);
        for &p in points {
            min = min.min(p);
            max = max.max(p);
        }

        Some(Self { min, max })
    }

    /// Returns the center of the box.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the extent of the box along each axis.
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Returns the length of the box diagonal.
    pub fn length_scale(&self) -> f64 {
        self.size().length()
    }

    /// Returns whether `p` lies inside or on the box.
    pub fn contains(&self, p: DVec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

/// A sphere enclosing a vertex set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingSphere {
    /// Center of the sphere.
    pub center: DVec3,
    /// Radius of the sphere.
    pub radius: f64,
}

impl BoundingSphere {
    /// Computes a sphere around `points` centered on their bounding box.
    ///
    /// The radius is the largest distance from the box center to any point,
    /// so every point lies inside or on the sphere.
    pub fn from_points(points: &[DVec3]) -> Option<Self> {
        let bbox = BoundingBox::from_points(points)?;
        let center = bbox.center();
        let max_dist_sq = points
            .iter()
            .map(|p| p.distance_squared(center))
            .fold(0.0_f64, f64::max);

        Some(Self {
            center,
            radius: max_dist_sq.sqrt(),
        })
    }

    /// Returns whether `p` lies inside or on the sphere.
    pub fn contains(&self, p: DVec3) -> bool {
        p.distance(self.center) <= self.radius
    }
}
