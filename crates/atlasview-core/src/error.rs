//! Error types for atlasview.

use thiserror::Error;

/// A failure to parse a legacy grid file.
///
/// Every variant carries the 1-based line on which the problem was found.
/// A parse either produces a complete [`ParsedGrid`](crate::ParsedGrid) or one
/// of these; no partial geometry is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridParseError {
    /// The input does not start with a `# vtk DataFile Version M.N` header.
    #[error("line {line}: missing '# vtk DataFile Version' header")]
    MagicMismatch { line: usize },

    /// The encoding line names an encoding other than ASCII.
    #[error("line {line}: unsupported encoding '{found}', only ASCII is supported")]
    UnsupportedEncoding { line: usize, found: String },

    /// A required keyword was not found where it was expected.
    #[error("line {line}: expected {expected}, found '{found}'")]
    SectionMismatch {
        line: usize,
        expected: &'static str,
        found: String,
    },

    /// A section ended before the declared number of values was read.
    #[error("line {line}: {section} section truncated: expected {expected} values, found {found}")]
    TruncatedData {
        line: usize,
        section: &'static str,
        expected: usize,
        found: usize,
    },

    /// A token in a numeric section is not a well-formed number.
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },

    /// The topology section is not a triangle or quad polygon list.
    #[error("line {line}: unsupported topology: {reason}")]
    UnsupportedTopology { line: usize, reason: String },

    /// A polygon references a vertex past the end of the point list.
    #[error("line {line}: polygon index {index} out of range for {vertex_count} points")]
    IndexOutOfRange {
        line: usize,
        index: u32,
        vertex_count: usize,
    },

    /// The scalar section uses a type, component count or lookup table
    /// that is not supported.
    #[error("line {line}: unsupported scalar data: {found}")]
    UnsupportedScalarType { line: usize, found: String },

    /// The `POINT_DATA` count disagrees with the `POINTS` count.
    #[error("line {line}: POINT_DATA declares {found} values but there are {expected} points")]
    CountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The file declares no points, or a polygon section with no triangles.
    #[error("line {line}: grid has no geometry")]
    EmptyGeometry { line: usize },
}

impl GridParseError {
    /// Returns the 1-based line number the error was reported on.
    pub fn line(&self) -> usize {
        match self {
            Self::MagicMismatch { line }
            | Self::UnsupportedEncoding { line, .. }
            | Self::SectionMismatch { line, .. }
            | Self::TruncatedData { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::UnsupportedTopology { line, .. }
            | Self::IndexOutOfRange { line, .. }
            | Self::UnsupportedScalarType { line, .. }
            | Self::CountMismatch { line, .. }
            | Self::EmptyGeometry { line } => *line,
        }
    }
}

/// The main error type for atlasview operations.
#[derive(Error, Debug)]
pub enum AtlasError {
    /// The grid file could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] GridParseError),

    /// The file extension names a format this crate recognizes but cannot load.
    #[error("unsupported model format '{0}'")]
    UnsupportedFormat(String),

    /// The file extension is missing or not recognized.
    #[error("unknown model format for '{0}'")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for atlasview operations.
pub type Result<T> = std::result::Result<T, AtlasError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_accessor() {
        let err = GridParseError::TruncatedData {
            line: 9,
            section: "POINTS",
            expected: 12,
            found: 9,
        };
        assert_eq!(err.line(), 9);
        assert_eq!(GridParseError::MagicMismatch { line: 1 }.line(), 1);
        assert_eq!(GridParseError::EmptyGeometry { line: 6 }.line(), 6);
    }

    #[test]
    fn test_display_mentions_line() {
        let err = GridParseError::CountMismatch {
            line: 10,
            expected: 4,
            found: 3,
        };
        let message = err.to_string();
        assert!(message.starts_with("line 10:"), "{message}");
        assert!(message.contains("POINT_DATA"));
    }

    #[test]
    fn test_parse_error_converts() {
        let err: AtlasError = GridParseError::MagicMismatch { line: 1 }.into();
        assert!(matches!(err, AtlasError::Parse(_)));
    }
}
