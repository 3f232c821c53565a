// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Triangle-soup mesh representation

use super::BoundingBox;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Vertex position in millimetres
pub type Vertex = Point3<f32>;

/// Triangle defined by three vertex positions, in winding order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v1: Vertex, v2: Vertex, v3: Vertex) -> Self {
        Self {
            vertices: [v1, v2, v3],
        }
    }

    /// Scalar triple product `v1 · (v2 × v3)`, six times the signed volume of
    /// the tetrahedron spanned by the triangle and the origin.
    ///
    /// Coordinates are widened to `f64` before multiplying.
    pub fn triple_product(&self) -> f64 {
        let [a, b, c] = self.vertices.map(|v| v.coords.cast::<f64>());
        a.dot(&b.cross(&c))
    }

    /// Unit face normal from the winding order, or zero for a degenerate triangle
    pub fn face_normal(&self) -> Vector3<f32> {
        let [v0, v1, v2] = self.vertices;
        let normal = (v1 - v0).cross(&(v2 - v0));
        normal.try_normalize(f32::EPSILON).unwrap_or_else(Vector3::zeros)
    }

    /// Surface area in mm²
    pub fn area(&self) -> f64 {
        let [v0, v1, v2] = self.vertices.map(|v| v.coords.cast::<f64>());
        (v1 - v0).cross(&(v2 - v0)).norm() / 2.0
    }
}

/// Triangular mesh decoded from a single STL file.
///
/// Vertices are stored per triangle and never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        Self::new()
    }

    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Add a triangle
    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Iterate over every vertex in triangle order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.triangles.iter().flat_map(|t| t.vertices.iter())
    }

    /// Compute bounding box
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_vertices(self.vertices())
    }
}

impl FromIterator<Triangle> for Mesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self::from_triangles(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn right_triangle() -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(0.0, 4.0, 0.0),
        )
    }

    #[test]
    fn test_face_normal_follows_winding() {
        let t = right_triangle();
        assert_eq!(t.face_normal(), Vector3::new(0.0, 0.0, 1.0));

        let [a, b, c] = t.vertices;
        let flipped = Triangle::new(a, c, b);
        assert_eq!(flipped.face_normal(), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_degenerate_normal_is_zero() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let t = Triangle::new(p, p, p);
        assert_eq!(t.face_normal(), Vector3::zeros());
        assert_eq!(t.area(), 0.0);
    }

    #[test]
    fn test_area() {
        assert_relative_eq!(right_triangle().area(), 6.0);
    }

    #[test]
    fn test_triple_product_sign() {
        let t = Triangle::new(
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        );
        assert_relative_eq!(t.triple_product(), 1.0);

        let [a, b, c] = t.vertices;
        assert_relative_eq!(Triangle::new(a, c, b).triple_product(), -1.0);
    }

    #[test]
    fn test_vertices_iterates_in_order() {
        let mesh: Mesh = vec![right_triangle(), right_triangle()].into_iter().collect();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertices().count(), 6);
        assert_eq!(mesh.vertices().nth(1), Some(&Point3::new(3.0, 0.0, 0.0)));
    }
}
