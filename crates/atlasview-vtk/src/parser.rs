//! Reader for legacy VTK `POLYDATA` grid files.
//!
//! The expected layout is:
//!
//! ```text
//! # vtk DataFile Version 1.0
//! Some comment text
//! ASCII
//! DATASET POLYDATA
//! POINTS 4 float
//! 0 0 0
//! 100 0 0
//! 50 87 0
//! 50 43 87
//! POLYGONS 4 16
//! 3 0 1 2
//! 3 0 1 3
//! 3 1 2 3
//! 3 2 0 3
//! ```
//!
//! `POLYGONS` is optional. Without it the points form a point cloud, which may
//! be followed by a `POINT_DATA` / `SCALARS` / `LOOKUP_TABLE default` section
//! giving one scalar per point.

use atlasview_core::{
    normalize_scalar, GridParseError, ParseOptions, ParsedGrid, PointAttributes,
    PointDataPolicy, ScalarType,
};
use glam::DVec3;

use crate::cursor::{parse_count, parse_decimal, parse_index, parse_integer, Cursor, Token};

type ParseResult<T> = std::result::Result<T, GridParseError>;

/// Upper bound on up-front allocation from declared counts; larger inputs grow as read.
const MAX_PREALLOC: usize = 1 << 16;

/// Parses a grid file with default options.
///
/// # Example
///
/// ```
/// let text = "# vtk DataFile Version 1.0\nc\nASCII\nDATASET POLYDATA\n\
///             POINTS 3 float\n0 0 0\n1 0 0\n0 1 0\nPOLYGONS 1 4\n3 0 1 2\n";
/// let grid = atlasview_vtk::parse_grid_file(text).unwrap();
/// assert_eq!(grid.num_vertices(), 3);
/// assert_eq!(grid.faces(), &[[0, 1, 2]]);
/// ```
pub fn parse_grid_file(text: &str) -> ParseResult<ParsedGrid> {
    GridParser::default().parse(text)
}

/// A grid file parser with fixed options.
///
/// The parser holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridParser {
    options: ParseOptions,
}

impl GridParser {
    /// Creates a parser with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Returns the parser options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses `text` into a surface or point cloud.
    pub fn parse(&self, text: &str) -> ParseResult<ParsedGrid> {
        let mut cursor = Cursor::new(text);

        read_header(&mut cursor)?;
        let vertices = read_points(&mut cursor)?;
        log::debug!("read {} points", vertices.len());

        let grid = match cursor.peek_token() {
            None => ParsedGrid::point_cloud(vertices, None),
            Some(token) => match token.text {
                "POLYGONS" => {
                    let faces = read_polygons(&mut cursor, vertices.len())?;
                    log::debug!("read {} triangles", faces.len());
                    ParsedGrid::surface(vertices, faces)
                }
                "POINT_DATA" => {
                    let attributes =
                        read_point_data(&mut cursor, vertices.len(), self.options.point_data_policy)?;
                    ParsedGrid::point_cloud(vertices, attributes)
                }
                "LINES" | "VERTICES" | "TRIANGLE_STRIPS" => {
                    return Err(GridParseError::UnsupportedTopology {
                        line: token.line,
                        reason: format!("{} sections are not supported", token.text),
                    });
                }
                _ => {
                    return Err(mismatch(&cursor, Some(token), "POLYGONS or POINT_DATA"));
                }
            },
        };

        // Grids need at least one point, and surfaces one triangle. Section
        // counts must be positive, so this only guards the constructors' contract.
        grid.ok_or(GridParseError::EmptyGeometry {
            line: cursor.line(),
        })
    }
}

/// Magic line, comment line, encoding line and dataset type.
fn read_header(cursor: &mut Cursor<'_>) -> ParseResult<()> {
    let magic = loop {
        let line_number = cursor.line();
        match cursor.next_line() {
            Some(line) if line.trim().is_empty() => {}
            Some(line) if is_magic_line(line) => break line,
            _ => return Err(GridParseError::MagicMismatch { line: line_number }),
        }
    };
    log::debug!("grid file header: {}", magic.trim());

    let encoding_line = cursor.line() + 1;
    let encoding = cursor
        .next_line()
        .and_then(|_comment| cursor.next_line())
        .map(str::trim);
    match encoding {
        Some("ASCII") => {}
        Some(found) if found.eq_ignore_ascii_case("BINARY") => {
            return Err(GridParseError::UnsupportedEncoding {
                line: encoding_line,
                found: found.to_string(),
            });
        }
        found => {
            return Err(GridParseError::SectionMismatch {
                line: encoding_line,
                expected: "ASCII",
                found: found.unwrap_or("end of file").to_string(),
            });
        }
    }

    expect_keyword(cursor, "DATASET", "DATASET POLYDATA")?;
    expect_keyword(cursor, "POLYDATA", "DATASET POLYDATA")?;
    Ok(())
}

/// Matches `# vtk DataFile Version <uint>.<uint>`, ignoring case.
fn is_magic_line(line: &str) -> bool {
    let Some(rest) = line.trim_start().strip_prefix('#') else {
        return false;
    };
    let mut words = rest.split_whitespace();
    let keywords_match = ["vtk", "datafile", "version"]
        .iter()
        .all(|expected| words.next().is_some_and(|w| w.eq_ignore_ascii_case(expected)));
    if !keywords_match {
        return false;
    }

    let is_uint = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    words
        .next()
        .and_then(|version| version.split_once('.'))
        .is_some_and(|(major, minor)| is_uint(major) && is_uint(minor))
}

/// `POINTS <n> float` followed by `n` coordinate triples.
fn read_points(cursor: &mut Cursor<'_>) -> ParseResult<Vec<DVec3>> {
    const EXPECTED: &str = "POINTS <n> float";

    expect_keyword(cursor, "POINTS", EXPECTED)?;
    let n_points = expect_count(cursor, EXPECTED)?;
    expect_keyword(cursor, "float", EXPECTED)?;

    let n_coords = n_points
        .checked_mul(3)
        .ok_or_else(|| mismatch(cursor, None, EXPECTED))?;
    let coords = read_values(cursor, "POINTS", n_coords, parse_decimal)?;
    Ok(coords
        .chunks_exact(3)
        .map(|c| DVec3::new(c[0], c[1], c[2]))
        .collect())
}

/// `POLYGONS <n> <size>` followed by `n` triangle or quad records.
///
/// `size` counts every integer in the section, including the vertex count
/// that starts each record. Quads `a b c d` become triangles `a b d` and
/// `b c d`.
fn read_polygons(cursor: &mut Cursor<'_>, vertex_count: usize) -> ParseResult<Vec<[u32; 3]>> {
    const EXPECTED: &str = "POLYGONS <n> <size>";

    let header = expect_keyword(cursor, "POLYGONS", EXPECTED)?;
    let n_polys = expect_count(cursor, EXPECTED)?;
    let size = expect_count(cursor, EXPECTED)?;

    let arity = match (size % n_polys, size / n_polys) {
        (0, 4) => 3,
        (0, 5) => 4,
        _ => {
            return Err(GridParseError::UnsupportedTopology {
                line: header.line,
                reason: format!(
                    "{size} values for {n_polys} polygons, only triangles and quads are supported"
                ),
            });
        }
    };

    let mut faces = Vec::with_capacity(n_polys.min(MAX_PREALLOC) * (arity - 2));
    let mut record = [0_u32; 4];
    let mut values_read = 0;
    for _ in 0..n_polys {
        let (count, count_token) = read_value(cursor, "POLYGONS", size, values_read, parse_index)?;
        values_read += 1;
        if count as usize != arity {
            return Err(GridParseError::UnsupportedTopology {
                line: count_token.line,
                reason: format!("polygon with {count} vertices in a list of {arity}-vertex polygons"),
            });
        }

        for slot in record.iter_mut().take(arity) {
            let (index, token) = read_value(cursor, "POLYGONS", size, values_read, parse_index)?;
            values_read += 1;
            if index as usize >= vertex_count {
                return Err(GridParseError::IndexOutOfRange {
                    line: token.line,
                    index,
                    vertex_count,
                });
            }
            *slot = index;
        }

        let [a, b, c, d] = record;
        if arity == 3 {
            faces.push([a, b, c]);
        } else {
            faces.push([a, b, d]);
            faces.push([b, c, d]);
        }
    }

    Ok(faces)
}

/// `POINT_DATA <n>`, `SCALARS <name> <type> [1]`, `LOOKUP_TABLE default` and
/// `n` scalar values.
///
/// Returns `Ok(None)` when the point data count disagrees with the point
/// count and the policy is to drop the attributes.
fn read_point_data(
    cursor: &mut Cursor<'_>,
    n_points: usize,
    policy: PointDataPolicy,
) -> ParseResult<Option<PointAttributes>> {
    const SCALARS: &str = "SCALARS <name> <type>";

    let header = expect_keyword(cursor, "POINT_DATA", "POINT_DATA <n>")?;
    let declared = expect_count(cursor, "POINT_DATA <n>")?;
    if declared != n_points {
        let err = GridParseError::CountMismatch {
            line: header.line,
            expected: n_points,
            found: declared,
        };
        return match policy {
            PointDataPolicy::Reject => Err(err),
            PointDataPolicy::DropAttributes => {
                log::warn!("ignoring point data: {err}");
                Ok(None)
            }
        };
    }

    expect_keyword(cursor, "SCALARS", SCALARS)?;
    let name = cursor
        .next_token()
        .ok_or_else(|| mismatch(cursor, None, SCALARS))?;
    let type_token = cursor
        .next_token()
        .ok_or_else(|| mismatch(cursor, None, SCALARS))?;
    let scalar_type = ScalarType::from_keyword(type_token.text).ok_or_else(|| {
        GridParseError::UnsupportedScalarType {
            line: type_token.line,
            found: format!("scalar type '{}'", type_token.text),
        }
    })?;

    // Optional component count, on the SCALARS line only
    if let Some(components) = cursor
        .peek_token()
        .filter(|t| t.line == type_token.line && !t.is_keyword())
    {
        cursor.next_token();
        if components.text != "1" {
            return Err(GridParseError::UnsupportedScalarType {
                line: components.line,
                found: format!("'{}' components per scalar", components.text),
            });
        }
    }

    expect_keyword(cursor, "LOOKUP_TABLE", "LOOKUP_TABLE default")?;
    match cursor.next_token() {
        Some(table) if table.text == "default" => {}
        Some(table) => {
            return Err(GridParseError::UnsupportedScalarType {
                line: table.line,
                found: format!("lookup table '{}'", table.text),
            });
        }
        None => return Err(mismatch(cursor, None, "LOOKUP_TABLE default")),
    }

    let raw = match scalar_type {
        ScalarType::Char => read_values(cursor, "SCALARS", n_points, |t| {
            parse_integer(t).map(f64::from)
        })?,
        ScalarType::Float => read_values(cursor, "SCALARS", n_points, parse_decimal)?,
    };
    log::debug!("read {} {} scalars '{}'", raw.len(), scalar_type.keyword(), name.text);

    let values = raw.iter().map(|&v| normalize_scalar(v, scalar_type)).collect();
    Ok(Some(PointAttributes::from_normalized(
        name.text,
        scalar_type,
        values,
    )))
}

/// Reads `count` values of a numeric section.
fn read_values<T>(
    cursor: &mut Cursor<'_>,
    section: &'static str,
    count: usize,
    parse: impl Fn(&str) -> Option<T>,
) -> ParseResult<Vec<T>> {
    let mut values = Vec::with_capacity(count.min(MAX_PREALLOC));
    for found in 0..count {
        let (value, _) = read_value(cursor, section, count, found, &parse)?;
        values.push(value);
    }
    Ok(values)
}

/// Reads one value of a numeric section.
///
/// A keyword or the end of input means the section is truncated; any other
/// token that fails to parse is an invalid number.
fn read_value<'a, T>(
    cursor: &mut Cursor<'a>,
    section: &'static str,
    expected: usize,
    found: usize,
    parse: impl Fn(&str) -> Option<T>,
) -> ParseResult<(T, Token<'a>)> {
    let truncated = |line| GridParseError::TruncatedData {
        line,
        section,
        expected,
        found,
    };

    match cursor.peek_token() {
        None => Err(truncated(cursor.line())),
        Some(token) if token.is_keyword() => Err(truncated(token.line)),
        Some(token) => {
            cursor.next_token();
            parse(token.text)
                .map(|value| (value, token))
                .ok_or_else(|| GridParseError::InvalidNumber {
                    line: token.line,
                    token: token.text.to_string(),
                })
        }
    }
}

fn expect_keyword<'a>(
    cursor: &mut Cursor<'a>,
    keyword: &str,
    expected: &'static str,
) -> ParseResult<Token<'a>> {
    match cursor.next_token() {
        Some(token) if token.text == keyword => Ok(token),
        token => Err(mismatch(cursor, token, expected)),
    }
}

fn expect_count(cursor: &mut Cursor<'_>, expected: &'static str) -> ParseResult<usize> {
    match cursor.next_token() {
        Some(token) => parse_count(token.text).ok_or_else(|| mismatch(cursor, Some(token), expected)),
        None => Err(mismatch(cursor, None, expected)),
    }
}

fn mismatch(cursor: &Cursor<'_>, token: Option<Token<'_>>, expected: &'static str) -> GridParseError {
    GridParseError::SectionMismatch {
        line: token.map_or(cursor.line(), |t| t.line),
        expected,
        found: token.map_or_else(|| "end of file".to_string(), |t| t.text.to_string()),
    }
}
