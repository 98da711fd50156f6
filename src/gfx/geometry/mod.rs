//! # Procedural Geometry Generation
//!
//! This module provides functions to generate the primitive shapes the hero
//! scene needs without external model files: the subdivided icosahedron used
//! as the fallback placeholder and the flat disc used as the ground shadow.
//!
//! ## Usage
//!
//! ```rust
//! use vitrine::gfx::geometry::{generate_circle, generate_icosahedron, wireframe_indices};
//!
//! let solid = generate_icosahedron(1.4, 1);
//! let wire = wireframe_indices(&solid.indices);
//! let disc = generate_circle(1.5, 64);
//! assert_eq!(solid.triangle_count(), 80);
//! assert!(!wire.is_empty());
//! assert_eq!(disc.triangle_count(), 64);
//! ```

pub mod primitives;

pub use primitives::*;

use crate::gfx::scene::vertex::Vertex3D;

/// Represents generated geometry data ready for GPU upload
#[derive(Debug, Clone, Default)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Convert to the vertex format used by the renderer
    pub fn to_scene_format(&self) -> (Vec<Vertex3D>, Vec<u32>) {
        let vertices: Vec<Vertex3D> = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, position)| Vertex3D {
                position: *position,
                normal: self.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
            })
            .collect();

        (vertices, self.indices.clone())
    }
}
