// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Enclosed volume via the signed tetrahedron method
//!
//! Each triangle contributes `v1 · (v2 × v3)`; the sum is six times the
//! enclosed volume of a closed, consistently wound surface. The absolute
//! value is taken at the end, so a mesh wound inside-out still measures
//! positive.

use super::{Mesh, Triangle};
use rayon::prelude::*;

/// Triangle count from which the triple products are summed in parallel
pub const PARALLEL_THRESHOLD: usize = 65_536;

/// 1 cm³ = 1000 mm³
pub const MM3_PER_CM3: f64 = 1000.0;

/// Signed enclosed volume in mm³
pub fn signed_volume_mm3(mesh: &Mesh) -> f64 {
    let six_v: f64 = if mesh.triangle_count() >= PARALLEL_THRESHOLD {
        mesh.triangles.par_iter().map(Triangle::triple_product).sum()
    } else {
        mesh.triangles.iter().map(Triangle::triple_product).sum()
    };

    six_v / 6.0
}

/// Enclosed volume in mm³
pub fn volume_mm3(mesh: &Mesh) -> f64 {
    signed_volume_mm3(mesh).abs()
}

/// Enclosed volume in cm³
pub fn volume_cm3(mesh: &Mesh) -> f64 {
    volume_mm3(mesh) / MM3_PER_CM3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Primitive;
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector3;

    #[test]
    fn test_empty_mesh_has_zero_volume() {
        assert_eq!(volume_cm3(&Mesh::empty()), 0.0);
        assert_eq!(signed_volume_mm3(&Mesh::empty()), 0.0);
    }

    #[test]
    fn test_cube_volume() {
        let mesh = Primitive::cube(Vector3::new(10.0, 10.0, 10.0), false).to_mesh();
        assert_eq!(mesh.triangle_count(), 12);
        assert_abs_diff_eq!(volume_cm3(&mesh), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_volume_is_translation_invariant() {
        let origin = Primitive::cube(Vector3::new(10.0, 20.0, 5.0), false).to_mesh();
        let centered = Primitive::cube(Vector3::new(10.0, 20.0, 5.0), true).to_mesh();
        assert_abs_diff_eq!(volume_mm3(&origin), 1000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(volume_mm3(&centered), 1000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_inverted_winding_is_positive() {
        let mut mesh = Primitive::cube(Vector3::new(10.0, 10.0, 10.0), true).to_mesh();
        let outward = signed_volume_mm3(&mesh);

        for triangle in &mut mesh.triangles {
            triangle.vertices.swap(1, 2);
        }

        assert_abs_diff_eq!(signed_volume_mm3(&mesh), -outward, epsilon = 1e-9);
        assert_abs_diff_eq!(volume_cm3(&mesh), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_parallel_sum_matches_sequential() {
        let cube = Primitive::cube(Vector3::new(2.0, 3.0, 4.0), false).to_mesh();
        let copies = PARALLEL_THRESHOLD / cube.triangle_count() + 1;
        let mesh: Mesh = std::iter::repeat(cube.triangles.iter().copied())
            .take(copies)
            .flatten()
            .collect();
        assert!(mesh.triangle_count() >= PARALLEL_THRESHOLD);

        let expected = 24.0 * copies as f64;
        assert_abs_diff_eq!(volume_mm3(&mesh), expected, epsilon = 1e-6 * expected);
    }
}
