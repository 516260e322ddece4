//! Serializes a [`ParsedGrid`] back into the legacy grid file format.
//!
//! Coordinates use Rust's shortest round-trip formatting, so finite values
//! parse back to exactly the same `f64`.

use std::fmt::Write as _;
use std::io;

use atlasview_core::{ParsedGrid, PointAttributes, Topology};

/// Writes a grid with the default comment line.
pub fn write_grid_file(grid: &ParsedGrid) -> String {
    GridWriter::default().to_string(grid)
}

/// Grid file writer.
#[derive(Debug, Clone)]
pub struct GridWriter {
    comment: String,
}

impl Default for GridWriter {
    fn default() -> Self {
        Self {
            comment: "atlasview grid".to_string(),
        }
    }
}

impl GridWriter {
    /// Creates a writer with the default comment line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text comment written on the second line.
    ///
    /// Line breaks are replaced by spaces.
    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = comment.replace(['\r', '\n'], " ");
        self
    }

    /// Serializes `grid` to a string.
    pub fn to_string(&self, grid: &ParsedGrid) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_string(grid, &mut out);
        out
    }

    /// Serializes `grid` into an I/O sink.
    pub fn write_to<W: io::Write>(&self, grid: &ParsedGrid, out: &mut W) -> io::Result<()> {
        out.write_all(self.to_string(grid).as_bytes())
    }

    fn write_string(&self, grid: &ParsedGrid, out: &mut String) -> std::fmt::Result {
        writeln!(out, "# vtk DataFile Version 3.0")?;
        writeln!(out, "{}", self.comment)?;
        writeln!(out, "ASCII")?;
        writeln!(out, "DATASET POLYDATA")?;

        writeln!(out, "POINTS {} float", grid.num_vertices())?;
        for v in grid.vertices() {
            writeln!(out, "{} {} {}", v.x, v.y, v.z)?;
        }

        match grid.topology() {
            Topology::Triangles(surface) => {
                let faces = surface.faces();
                writeln!(out, "POLYGONS {} {}", faces.len(), faces.len() * 4)?;
                for [a, b, c] in faces {
                    writeln!(out, "3 {a} {b} {c}")?;
                }
            }
            Topology::None => {
                if let Some(attributes) = grid.attributes() {
                    write_point_data(attributes, out)?;
                }
            }
        }

        Ok(())
    }
}

/// Normalized values are written as `float` scalars so they parse back unchanged.
fn write_point_data(attributes: &PointAttributes, out: &mut String) -> std::fmt::Result {
    let name: String = attributes
        .name()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    let name = if name.is_empty() { "scalars" } else { &name };

    writeln!(out, "POINT_DATA {}", attributes.len())?;
    writeln!(out, "SCALARS {name} float")?;
    writeln!(out, "LOOKUP_TABLE default")?;
    for value in attributes.values() {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_grid_file;
    use atlasview_core::ScalarType;
    use glam::DVec3;
    use proptest::prelude::*;

    fn square() -> Vec<DVec3> {
        vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_point_cloud_layout() {
        let grid = ParsedGrid::point_cloud(square(), None).unwrap();
        let text = write_grid_file(&grid);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "# vtk DataFile Version 3.0");
        assert_eq!(lines[2], "ASCII");
        assert_eq!(lines[3], "DATASET POLYDATA");
        assert_eq!(lines[4], "POINTS 4 float");
        assert_eq!(lines[6], "1 0 0");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_surface_round_trip() {
        let grid = ParsedGrid::surface(square(), vec![[0, 1, 3], [1, 2, 3]]).unwrap();
        let text = write_grid_file(&grid);
        assert!(text.contains("POLYGONS 2 8\n3 0 1 3\n3 1 2 3\n"));

        let parsed = parse_grid_file(&text).unwrap();
        assert_eq!(parsed, grid);
    }

    #[test]
    fn test_attributes_round_trip() {
        let attributes = PointAttributes::from_normalized(
            "gene expression",
            ScalarType::Char,
            vec![0.0, 0.25, 0.5, 1.0],
        );
        let grid = ParsedGrid::point_cloud(square(), Some(attributes)).unwrap();
        let text = write_grid_file(&grid);
        assert!(text.contains("SCALARS gene_expression float\n"));

        let parsed = parse_grid_file(&text).unwrap();
        let parsed_attributes = parsed.attributes().unwrap();
        assert_eq!(parsed_attributes.scalar_type(), ScalarType::Float);
        assert_eq!(parsed_attributes.values(), &[0.0, 0.25, 0.5, 1.0]);
    }

    #[test]
    fn test_custom_comment() {
        let grid = ParsedGrid::point_cloud(square(), None).unwrap();
        let text = GridWriter::new()
            .with_comment("EMA model 27\nstage TS17")
            .to_string(&grid);
        assert_eq!(text.lines().nth(1), Some("EMA model 27 stage TS17"));
        assert!(parse_grid_file(&text).is_ok());
    }

    #[test]
    fn test_write_to_io() {
        let grid = ParsedGrid::point_cloud(square(), None).unwrap();
        let mut bytes = Vec::new();
        GridWriter::new().write_to(&grid, &mut bytes).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), write_grid_file(&grid));
    }

    proptest! {
        #[test]
        fn test_point_cloud_round_trip(
            coords in prop::collection::vec((-1e6..1e6_f64, -1e6..1e6_f64, -1e6..1e6_f64), 1..50)
        ) {
            let vertices: Vec<DVec3> = coords.iter().map(|&(x, y, z)| DVec3::new(x, y, z)).collect();
            let grid = ParsedGrid::point_cloud(vertices.clone(), None).unwrap();
            let parsed = parse_grid_file(&write_grid_file(&grid)).unwrap();
            prop_assert_eq!(parsed.vertices(), vertices.as_slice());
            prop_assert!(parsed.is_point_cloud());
            prop_assert!(parsed.attributes().is_none());
        }

        #[test]
        fn test_scalar_round_trip(values in prop::collection::vec(0.0..=1.0_f32, 4)) {
            let attributes = PointAttributes::from_normalized("s", ScalarType::Float, values.clone());
            let grid = ParsedGrid::point_cloud(square(), Some(attributes)).unwrap();
            let parsed = parse_grid_file(&write_grid_file(&grid)).unwrap();
            for (a, b) in parsed.attributes().unwrap().values().iter().zip(&values) {
                prop_assert!((a - b).abs() < 1e-6);
            }
        }
    }
}
