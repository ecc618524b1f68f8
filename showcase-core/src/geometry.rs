/// Geometry primitives for the hero wireframe
use std::collections::BTreeSet;

use nalgebra::{Point3, Vector3};

/// Positions closer than this are the same vertex when welding edges
const WELD_EPSILON: f32 = 1e-5;

/// A 3D vertex
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Point3<f32>,
}

impl Vertex {
    /// A vertex on a sphere centred at the origin
    fn on_sphere(direction: Vector3<f32>, radius: f32) -> Self {
        Self {
            position: Point3::from(direction.normalize() * radius),
        }
    }
}

/// A triangle face defined by three vertices
#[derive(Debug, Clone)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }
}

/// A line segment of the wireframe, in model space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Point3<f32>,
    pub end: Point3<f32>,
}

/// A 3D mesh composed of triangles
#[derive(Debug, Clone)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Icosahedron with every face split into `(detail + 1)^2` triangles,
    /// all vertices pushed out onto a sphere of `radius`.
    ///
    /// `detail = 0` is the plain 20-face icosahedron.
    pub fn icosphere(radius: f32, detail: u32) -> Self {
        let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
        let corners = [
            Vector3::new(-1.0, t, 0.0),
            Vector3::new(1.0, t, 0.0),
            Vector3::new(-1.0, -t, 0.0),
            Vector3::new(1.0, -t, 0.0),
            Vector3::new(0.0, -1.0, t),
            Vector3::new(0.0, 1.0, t),
            Vector3::new(0.0, -1.0, -t),
            Vector3::new(0.0, 1.0, -t),
            Vector3::new(t, 0.0, -1.0),
            Vector3::new(t, 0.0, 1.0),
            Vector3::new(-t, 0.0, -1.0),
            Vector3::new(-t, 0.0, 1.0),
        ];
        const FACES: [[usize; 3]; 20] = [
            [0, 11, 5],
            [0, 5, 1],
            [0, 1, 7],
            [0, 7, 10],
            [0, 10, 11],
            [1, 5, 9],
            [5, 11, 4],
            [11, 10, 2],
            [10, 7, 6],
            [7, 1, 8],
            [3, 9, 4],
            [3, 4, 2],
            [3, 2, 6],
            [3, 6, 8],
            [3, 8, 9],
            [4, 9, 5],
            [2, 4, 11],
            [6, 2, 10],
            [8, 6, 7],
            [9, 8, 1],
        ];

        let cols = detail as usize + 1;
        let mut mesh = Self::with_capacity(FACES.len() * cols * cols);
        for [a, b, c] in FACES {
            mesh.subdivide_face(corners[a], corners[b], corners[c], cols, radius);
        }
        mesh
    }

    /// Split one face into a triangular grid `cols` segments wide
    fn subdivide_face(
        &mut self,
        a: Vector3<f32>,
        b: Vector3<f32>,
        c: Vector3<f32>,
        cols: usize,
        radius: f32,
    ) {
        // rows[i] runs from the a-c edge to the b-c edge, shrinking towards c
        let mut rows: Vec<Vec<Vector3<f32>>> = Vec::with_capacity(cols + 1);
        for i in 0..=cols {
            let s = i as f32 / cols as f32;
            let aj = a.lerp(&c, s);
            let bj = b.lerp(&c, s);
            let len = cols - i;
            let row = if len == 0 {
                vec![aj]
            } else {
                (0..=len)
                    .map(|j| aj.lerp(&bj, j as f32 / len as f32))
                    .collect()
            };
            rows.push(row);
        }

        for i in 0..cols {
            for j in 0..(2 * (cols - i) - 1) {
                let k = j / 2;
                let (p0, p1, p2) = if j % 2 == 0 {
                    (rows[i][k + 1], rows[i + 1][k], rows[i][k])
                } else {
                    (rows[i][k + 1], rows[i + 1][k + 1], rows[i + 1][k])
                };
                self.add_triangle(Triangle::new(
                    Vertex::on_sphere(p0, radius),
                    Vertex::on_sphere(p1, radius),
                    Vertex::on_sphere(p2, radius),
                ));
            }
        }
    }

    /// The unique edges of all triangles, as a wireframe renderer draws them.
    ///
    /// Vertices shared between triangles are welded by position first, so an
    /// edge on the border of two faces is returned once.
    pub fn edges(&self) -> Vec<Edge> {
        let mut welded: Vec<Point3<f32>> = Vec::new();
        let mut index_of = |p: Point3<f32>| -> usize {
            if let Some(i) = welded
                .iter()
                .position(|q| (*q - p).norm_squared() < WELD_EPSILON * WELD_EPSILON)
            {
                return i;
            }
            welded.push(p);
            welded.len() - 1
        };

        let mut pairs = BTreeSet::new();
        for triangle in &self.triangles {
            let ids = triangle.vertices.map(|v| index_of(v.position));
            for (a, b) in [(ids[0], ids[1]), (ids[1], ids[2]), (ids[2], ids[0])] {
                if a != b {
                    pairs.insert((a.min(b), a.max(b)));
                }
            }
        }

        pairs
            .into_iter()
            .map(|(a, b)| Edge {
                start: welded[a],
                end: welded[b],
            })
            .collect()
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mesh_has_no_edges() {
        assert!(Mesh::default().edges().is_empty());
    }

    #[test]
    fn test_icosahedron_counts() {
        let mesh = Mesh::icosphere(1.0, 0);
        assert_eq!(mesh.triangles.len(), 20);
        assert_eq!(mesh.edges().len(), 30);
    }

    #[test]
    fn test_hero_sphere_counts() {
        // 20 faces * 5^2, and E = 3F / 2 for a closed triangle mesh
        let mesh = Mesh::icosphere(1.2, 4);
        assert_eq!(mesh.triangles.len(), 500);
        assert_eq!(mesh.edges().len(), 750);
    }

    #[test]
    fn test_vertices_on_sphere() {
        let mesh = Mesh::icosphere(1.2, 2);
        for triangle in &mesh.triangles {
            for vertex in &triangle.vertices {
                let r = vertex.position.coords.norm();
                assert!((r - 1.2).abs() < 1e-5, "radius {}", r);
            }
        }
    }
}
