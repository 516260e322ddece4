//! The result of parsing a legacy grid file.
//!
//! A [`ParsedGrid`] is either a triangle surface or a point cloud. Point clouds
//! may carry one scalar per point, from which [`PointAttributes`] derives the
//! color, opacity and size channels a renderer consumes.

use glam::{DVec3, Vec3};

use crate::bounds::{BoundingBox, BoundingSphere};
use crate::normals::compute_vertex_normals;
use crate::scalar::{size_factor, ScalarType};

/// Triangles and the vertex normals computed from them.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleSurface {
    faces: Vec<[u32; 3]>,
    normals: Vec<DVec3>,
}

impl TriangleSurface {
    /// Returns the triangles.
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Returns one unit normal per vertex (zero for vertices on no face).
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }
}

/// Connectivity of a parsed grid.
#[derive(Debug, Clone, PartialEq)]
pub enum Topology {
    /// No polygon section: the vertices are a point cloud.
    None,
    /// A triangle surface; quads are already split into two triangles.
    Triangles(TriangleSurface),
}

/// Per-point attributes derived from a scalar section.
#[derive(Debug, Clone, PartialEq)]
pub struct PointAttributes {
    name: String,
    scalar_type: ScalarType,
    values: Vec<f32>,
    colors: Vec<Vec3>,
    opacities: Vec<f32>,
    sizes: Vec<f32>,
}

impl PointAttributes {
    /// Builds attributes from scalars already normalized to `[0, 1]`.
    pub fn from_normalized(
        name: impl Into<String>,
        scalar_type: ScalarType,
        values: Vec<f32>,
    ) -> Self {
        let colors = values.iter().map(|&v| Vec3::splat(v)).collect();
        let opacities = values.clone();
        let sizes = values.iter().map(|&v| size_factor(v)).collect();
        Self {
            name: name.into(),
            scalar_type,
            values,
            colors,
            opacities,
            sizes,
        }
    }

    /// Returns the scalar array name from the `SCALARS` line.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the scalar encoding declared in the file.
    pub fn scalar_type(&self) -> ScalarType {
        self.scalar_type
    }

    /// Returns the normalized scalar values.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Returns the greyscale colors.
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Returns the opacities.
    pub fn opacities(&self) -> &[f32] {
        &self.opacities
    }

    /// Returns the point size factors.
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Returns the number of points the attributes cover.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Geometry loaded from a legacy grid file.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedGrid {
    vertices: Vec<DVec3>,
    topology: Topology,
    attributes: Option<PointAttributes>,
    bounding_box: BoundingBox,
    bounding_sphere: BoundingSphere,
}

impl ParsedGrid {
    /// Creates a point cloud, optionally with scalar attributes.
    ///
    /// Returns `None` if `vertices` is empty, since an empty point set has no
    /// bounding volumes.
    ///
    /// # Panics
    /// Panics if the attributes do not have exactly one value per vertex.
    pub fn point_cloud(vertices: Vec<DVec3>, attributes: Option<PointAttributes>) -> Option<Self> {
        if let Some(attributes) = &attributes {
            assert_eq!(
                attributes.len(),
                vertices.len(),
                "attribute count does not match vertex count"
            );
        }
        Self::build(vertices, Topology::None, attributes)
    }

    /// Creates a triangle surface and computes its vertex normals.
    ///
    /// Returns `None` if `vertices` or `faces` is empty. A surface without
    /// triangles has no polygon section to write; build a point cloud instead.
    ///
    /// # Panics
    /// Panics if a face references an index outside `vertices`.
    pub fn surface(vertices: Vec<DVec3>, faces: Vec<[u32; 3]>) -> Option<Self> {
        if faces.is_empty() {
            return None;
        }
        let normals = compute_vertex_normals(&vertices, &faces);
        Self::build(
            vertices,
            Topology::Triangles(TriangleSurface { faces, normals }),
            None,
        )
    }

    fn build(
        vertices: Vec<DVec3>,
        topology: Topology,
        attributes: Option<PointAttributes>,
    ) -> Option<Self> {
        let bounding_box = BoundingBox::from_points(&vertices)?;
        let bounding_sphere = BoundingSphere::from_points(&vertices)?;
        Some(Self {
            vertices,
            topology,
            attributes,
            bounding_box,
            bounding_sphere,
        })
    }

    /// Returns the vertices in file order.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the connectivity.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Returns the triangles, or an empty slice for a point cloud.
    pub fn faces(&self) -> &[[u32; 3]] {
        match &self.topology {
            Topology::None => &[],
            Topology::Triangles(surface) => surface.faces(),
        }
    }

    /// Returns the number of triangles.
    pub fn num_faces(&self) -> usize {
        self.faces().len()
    }

    /// Returns the vertex normals of a triangle surface.
    pub fn vertex_normals(&self) -> Option<&[DVec3]> {
        match &self.topology {
            Topology::None => None,
            Topology::Triangles(surface) => Some(surface.normals()),
        }
    }

    /// Returns true if the grid has no polygon section.
    pub fn is_point_cloud(&self) -> bool {
        matches!(self.topology, Topology::None)
    }

    /// Returns the scalar-derived attributes, if the file had a scalar section.
    pub fn attributes(&self) -> Option<&PointAttributes> {
        self.attributes.as_ref()
    }

    /// Returns the axis-aligned bounding box of the vertices.
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Returns a sphere enclosing all vertices.
    pub fn bounding_sphere(&self) -> BoundingSphere {
        self.bounding_sphere
    }

    // === Flat render buffers ===

    /// Returns the vertex positions as flat `x, y, z` triples.
    pub fn position_buffer(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| v.as_vec3().to_array())
            .collect()
    }

    /// Returns the triangle indices as a flat list, or `None` for a point cloud.
    pub fn index_buffer(&self) -> Option<Vec<u32>> {
        match &self.topology {
            Topology::None => None,
            Topology::Triangles(surface) => {
                Some(surface.faces.iter().flatten().copied().collect())
            }
        }
    }

    /// Returns the vertex normals as flat triples, or `None` for a point cloud.
    pub fn normal_buffer(&self) -> Option<Vec<f32>> {
        self.vertex_normals()
            .map(|normals| normals.iter().flat_map(|n| n.as_vec3().to_array()).collect())
    }

    /// Returns the greyscale colors as flat `r, g, b` triples.
    pub fn color_buffer(&self) -> Option<Vec<f32>> {
        self.attributes
            .as_ref()
            .map(|a| a.colors.iter().flat_map(|c| c.to_array()).collect())
    }

    /// Returns the per-point opacities.
    pub fn opacity_buffer(&self) -> Option<Vec<f32>> {
        self.attributes.as_ref().map(|a| a.opacities.clone())
    }

    /// Returns the per-point size factors.
    pub fn size_buffer(&self) -> Option<Vec<f32>> {
        self.attributes.as_ref().map(|a| a.sizes.clone())
    }
}
