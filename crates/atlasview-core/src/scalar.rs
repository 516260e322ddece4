//! Scalar attribute normalization.
//!
//! A grid file may carry one scalar per point. Scalars are normalized to
//! `[0, 1]` and turned into a greyscale color, an opacity and a point size
//! factor.

use serde::{Deserialize, Serialize};

/// Encoding of the values in a `SCALARS` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    /// Integer byte values, `0..=255`.
    Char,
    /// Floating point values, expected in `[0, 1]`.
    Float,
}

impl ScalarType {
    /// Looks up the scalar type named by a `SCALARS` line.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "char" => Some(Self::Char),
            "float" => Some(Self::Float),
            _ => None,
        }
    }

    /// Returns the keyword used for this type in a grid file.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Float => "float",
        }
    }
}

/// Maps a raw scalar to `[0, 1]`.
///
/// `Char` values are divided by 255, `Float` values are taken as they are;
/// both are then clamped.
pub fn normalize_scalar(raw: f64, scalar_type: ScalarType) -> f32 {
    let value = match scalar_type {
        ScalarType::Char => raw / 255.0,
        ScalarType::Float => raw,
    };
    value.clamp(0.0, 1.0) as f32
}

/// Point size factor for a normalized scalar.
///
/// `(v² + 0.1) / 1.1`, so a zero value still gets about 9% of full size.
pub fn size_factor(value: f32) -> f32 {
    (value * value + 0.1) / 1.1
}
