//! # Primitive Shape Generation
//!
//! All shapes are generated with outward normals and counter-clockwise
//! front faces.

use std::collections::HashSet;
use std::f32::consts::PI;

use super::GeometryData;

const GOLDEN_RATIO: f32 = 1.618_034;

#[rustfmt::skip]
const ICOSAHEDRON_VERTICES: [[f32; 3]; 12] = [
    [-1.0,  GOLDEN_RATIO, 0.0], [ 1.0,  GOLDEN_RATIO, 0.0],
    [-1.0, -GOLDEN_RATIO, 0.0], [ 1.0, -GOLDEN_RATIO, 0.0],
    [ 0.0, -1.0,  GOLDEN_RATIO], [ 0.0,  1.0,  GOLDEN_RATIO],
    [ 0.0, -1.0, -GOLDEN_RATIO], [ 0.0,  1.0, -GOLDEN_RATIO],
    [ GOLDEN_RATIO, 0.0, -1.0], [ GOLDEN_RATIO, 0.0,  1.0],
    [-GOLDEN_RATIO, 0.0, -1.0], [-GOLDEN_RATIO, 0.0,  1.0],
];

#[rustfmt::skip]
const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
    [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
    [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
    [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
];

fn lerp3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

fn normalize3(v: [f32; 3]) -> [f32; 3] {
    let length = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if length > 0.0 {
        [v[0] / length, v[1] / length, v[2] / length]
    } else {
        v
    }
}

/// Generate an icosahedron projected onto a sphere of `radius`
///
/// Each of the 20 base faces is split into `(detail + 1)^2` triangles before
/// projection, so detail 1 yields 80 triangles. Every triangle owns its three
/// vertices and the normals point radially outward.
pub fn generate_icosahedron(radius: f32, detail: u32) -> GeometryData {
    let mut data = GeometryData::new();
    let cols = detail as usize + 1;

    for face in ICOSAHEDRON_FACES.iter() {
        let a = ICOSAHEDRON_VERTICES[face[0]];
        let b = ICOSAHEDRON_VERTICES[face[1]];
        let c = ICOSAHEDRON_VERTICES[face[2]];

        // Triangular grid of points over the face, row i holds cols - i + 1 points
        let mut grid: Vec<Vec<[f32; 3]>> = Vec::with_capacity(cols + 1);
        for i in 0..=cols {
            let t = i as f32 / cols as f32;
            let aj = lerp3(a, c, t);
            let bj = lerp3(b, c, t);
            let rows = cols - i;
            let row = (0..=rows)
                .map(|j| {
                    if rows == 0 {
                        aj
                    } else {
                        lerp3(aj, bj, j as f32 / rows as f32)
                    }
                })
                .collect();
            grid.push(row);
        }

        for i in 0..cols {
            for j in 0..(2 * (cols - i) - 1) {
                let k = j / 2;
                let triangle = if j % 2 == 0 {
                    [grid[i][k + 1], grid[i + 1][k], grid[i][k]]
                } else {
                    [grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]]
                };
                for corner in triangle {
                    let normal = normalize3(corner);
                    data.vertices
                        .push([normal[0] * radius, normal[1] * radius, normal[2] * radius]);
                    data.normals.push(normal);
                    data.indices.push(data.indices.len() as u32);
                }
            }
        }
    }

    data
}

/// Generate a flat disc in the XY plane facing +Z
///
/// One center vertex plus `segments + 1` rim vertices (the seam is
/// duplicated), fanned into `segments` triangles.
pub fn generate_circle(radius: f32, segments: u32) -> GeometryData {
    let mut data = GeometryData::new();
    let segments = segments.max(3);

    data.vertices.push([0.0, 0.0, 0.0]);
    data.normals.push([0.0, 0.0, 1.0]);

    for s in 0..=segments {
        let theta = s as f32 / segments as f32 * 2.0 * PI;
        data.vertices
            .push([radius * theta.cos(), radius * theta.sin(), 0.0]);
        data.normals.push([0.0, 0.0, 1.0]);
    }

    for i in 1..=segments {
        data.indices.extend_from_slice(&[i, i + 1, 0]);
    }

    data
}

/// Converts triangle indices into line-list indices covering every edge once
pub fn wireframe_indices(triangles: &[u32]) -> Vec<u32> {
    let mut seen = HashSet::new();
    let mut lines = Vec::new();

    for triangle in triangles.chunks_exact(3) {
        for (a, b) in [
            (triangle[0], triangle[1]),
            (triangle[1], triangle[2]),
            (triangle[2], triangle[0]),
        ] {
            if seen.insert((a.min(b), a.max(b))) {
                lines.push(a);
                lines.push(b);
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icosahedron_vertices_lie_on_sphere() {
        let data = generate_icosahedron(1.4, 1);
        assert_eq!(data.triangle_count(), 80);
        for v in &data.vertices {
            let r = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
            assert!((r - 1.4).abs() < 1e-5);
        }
    }

    #[test]
    fn icosahedron_faces_point_outward() {
        let data = generate_icosahedron(1.0, 1);
        for tri in data.indices.chunks_exact(3) {
            let [a, b, c] = [
                data.vertices[tri[0] as usize],
                data.vertices[tri[1] as usize],
                data.vertices[tri[2] as usize],
            ];
            let e1 = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
            let e2 = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
            let n = [
                e1[1] * e2[2] - e1[2] * e2[1],
                e1[2] * e2[0] - e1[0] * e2[2],
                e1[0] * e2[1] - e1[1] * e2[0],
            ];
            let centroid = [a[0] + b[0] + c[0], a[1] + b[1] + c[1], a[2] + b[2] + c[2]];
            let facing = n[0] * centroid[0] + n[1] * centroid[1] + n[2] * centroid[2];
            assert!(facing > 0.0);
        }
    }

    #[test]
    fn detail_zero_is_the_base_icosahedron() {
        assert_eq!(generate_icosahedron(1.0, 0).triangle_count(), 20);
    }

    #[test]
    fn circle_fans_around_center() {
        let data = generate_circle(1.5, 64);
        assert_eq!(data.vertex_count(), 66);
        assert_eq!(data.triangle_count(), 64);
        assert!(data.indices.chunks_exact(3).all(|t| t[2] == 0));
    }

    #[test]
    fn wireframe_emits_each_edge_once() {
        // Two triangles sharing the 1-2 edge
        let lines = wireframe_indices(&[0, 1, 2, 2, 1, 3]);
        assert_eq!(lines.len(), 10);
    }
}
