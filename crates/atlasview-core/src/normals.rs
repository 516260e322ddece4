//! Vertex normals for triangle surfaces.

use glam::DVec3;

/// Computes vertex normals as the area-weighted average of incident face normals.
///
/// The cross product of two triangle edges has length twice the triangle area,
/// so summing unnormalized cross products weights each face by its area.
/// Vertices not used by any face get a zero normal.
///
/// # Panics
/// Panics if a face references an index outside `vertices`.
pub fn compute_vertex_normals(vertices: &[DVec3], faces: &[[u32; 3]]) -> Vec<DVec3> {
    let mut normals = vec![DVec3::ZERO; vertices.len()];

    for face in faces {
        let v0 = vertices[face[0] as usize];
        let v1 = vertices[face[1] as usize];
        let v2 = vertices[face[2] as usize];

        let weighted_normal = (v1 - v0).cross(v2 - v0);
        for &vi in face {
            normals[vi as usize] += weighted_normal;
        }
    }

    for normal in &mut normals {
        *normal = normal.normalize_or_zero();
    }

    normals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_triangle() {
        let vertices = [DVec3::ZERO, DVec3::X, DVec3::Y];
        let normals = compute_vertex_normals(&vertices, &[[0, 1, 2]]);
        for n in normals {
            assert!((n - DVec3::Z).length() < 1e-12);
        }
    }

    #[test]
    fn test_unused_vertex_has_zero_normal() {
        let vertices = [DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::splat(5.0)];
        let normals = compute_vertex_normals(&vertices, &[[0, 1, 2]]);
        assert_eq!(normals.len(), 4);
        assert_eq!(normals[3], DVec3::ZERO);
    }

    #[test]
    fn test_normals_are_unit_length() {
        // Tetrahedron
        let vertices = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(100.0, 0.0, 0.0),
            DVec3::new(50.0, 87.0, 0.0),
            DVec3::new(50.0, 43.0, 87.0),
        ];
        let faces = [[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
        let normals = compute_vertex_normals(&vertices, &faces);
        for n in &normals {
            assert!((n.length() - 1.0).abs() < 1e-9, "normal {n:?} is not unit");
        }
    }

    #[test]
    fn test_degenerate_face() {
        let vertices = [DVec3::ZERO, DVec3::X, DVec3::X * 2.0];
        let normals = compute_vertex_normals(&vertices, &[[0, 1, 2]]);
        assert!(normals.iter().all(|n| *n == DVec3::ZERO));
    }
}
