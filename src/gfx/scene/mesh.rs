//! CPU-side mesh data

use super::vertex::Vertex3D;
use crate::gfx::geometry::GeometryData;

/// How the index buffer of a mesh is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    Triangles,
    Lines,
}

/// Indexed vertex data for a single drawable surface
#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vertex3D>,
    pub indices: Vec<u32>,
    pub topology: Topology,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex3D>, indices: Vec<u32>, topology: Topology) -> Self {
        Self {
            vertices,
            indices,
            topology,
        }
    }

    /// Triangle mesh from generated geometry
    pub fn from_geometry(geometry: &GeometryData) -> Self {
        let (vertices, indices) = geometry.to_scene_format();
        Self::new(vertices, indices, Topology::Triangles)
    }

    /// Line-list mesh drawing every edge of the given geometry
    pub fn wireframe(geometry: &GeometryData) -> Self {
        let (vertices, indices) = geometry.to_scene_format();
        let lines = crate::gfx::geometry::wireframe_indices(&indices);
        Self::new(vertices, lines, Topology::Lines)
    }

    /// Builds a triangle mesh from positions, computing smooth normals when
    /// none are supplied or their count does not match.
    pub fn from_positions(
        positions: Vec<[f32; 3]>,
        normals: Option<Vec<[f32; 3]>>,
        indices: Vec<u32>,
    ) -> Self {
        let normals = match normals {
            Some(normals) if normals.len() == positions.len() => normals,
            _ => Self::calculate_vertex_normals(&positions, &indices),
        };

        let vertices = positions
            .into_iter()
            .zip(normals)
            .map(|(position, normal)| Vertex3D { position, normal })
            .collect();

        Self::new(vertices, indices, Topology::Triangles)
    }

    pub fn triangle_count(&self) -> usize {
        match self.topology {
            Topology::Triangles => self.indices.len() / 3,
            Topology::Lines => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    /// Area-weighted vertex normals averaged from adjacent faces
    pub fn calculate_vertex_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
        let mut normals = vec![[0.0f32; 3]; positions.len()];

        for triangle in indices.chunks_exact(3) {
            let [i0, i1, i2] = [
                triangle[0] as usize,
                triangle[1] as usize,
                triangle[2] as usize,
            ];
            let (Some(v0), Some(v1), Some(v2)) =
                (positions.get(i0), positions.get(i1), positions.get(i2))
            else {
                continue;
            };

            let edge1 = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
            let edge2 = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];
            let face_normal = [
                edge1[1] * edge2[2] - edge1[2] * edge2[1],
                edge1[2] * edge2[0] - edge1[0] * edge2[2],
                edge1[0] * edge2[1] - edge1[1] * edge2[0],
            ];

            for index in [i0, i1, i2] {
                for axis in 0..3 {
                    normals[index][axis] += face_normal[axis];
                }
            }
        }

        for normal in normals.iter_mut() {
            let length = (normal[0].powi(2) + normal[1].powi(2) + normal[2].powi(2)).sqrt();
            if length > 0.0 {
                normal.iter_mut().for_each(|c| *c /= length);
            } else {
                *normal = [0.0, 1.0, 0.0];
            }
        }

        normals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_normals_for_a_flat_triangle() {
        let mesh = Mesh::from_positions(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            None,
            vec![0, 1, 2],
        );
        for vertex in &mesh.vertices {
            assert_eq!(vertex.normal, [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn mismatched_normals_are_recomputed() {
        let mesh = Mesh::from_positions(
            vec![[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]],
            Some(vec![[1.0, 0.0, 0.0]]),
            vec![0, 1, 2],
        );
        assert_eq!(mesh.vertices[0].normal, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn line_meshes_have_no_triangles() {
        let geometry = crate::gfx::geometry::generate_icosahedron(1.0, 0);
        let wire = Mesh::wireframe(&geometry);
        assert_eq!(wire.topology, Topology::Lines);
        assert_eq!(wire.triangle_count(), 0);
        assert!(!wire.is_empty());
    }
}
