// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Reference solids for fixtures and benchmarks

use super::{Mesh, Triangle};
use nalgebra::{Point3, Vector3};
use std::f32::consts::PI;

/// Closed, outward-wound reference solids
pub enum Primitive {
    Cube { size: Vector3<f32>, center: bool },
    Sphere { r: f32, segments: u32 },
}

impl Primitive {
    pub fn cube(size: Vector3<f32>, center: bool) -> Self {
        Self::Cube { size, center }
    }

    pub fn sphere(r: f32, segments: u32) -> Self {
        let segments = if segments > 2 { segments } else { 32 };
        Self::Sphere { r, segments }
    }

    pub fn to_mesh(&self) -> Mesh {
        match self {
            Self::Cube { size, center } => generate_cube_mesh(*size, *center),
            Self::Sphere { r, segments } => generate_sphere_mesh(*r, *segments),
        }
    }
}

fn generate_cube_mesh(size: Vector3<f32>, center: bool) -> Mesh {
    let min = if center {
        Point3::from(-size / 2.0)
    } else {
        Point3::origin()
    };
    let max = min + size;

    let corners = [
        Point3::new(min.x, min.y, min.z),
        Point3::new(max.x, min.y, min.z),
        Point3::new(max.x, max.y, min.z),
        Point3::new(min.x, max.y, min.z),
        Point3::new(min.x, min.y, max.z),
        Point3::new(max.x, min.y, max.z),
        Point3::new(max.x, max.y, max.z),
        Point3::new(min.x, max.y, max.z),
    ];

    // Two triangles per face, counter-clockwise seen from outside
    let faces: [[usize; 3]; 12] = [
        [4, 5, 6],
        [4, 6, 7],
        [1, 0, 3],
        [1, 3, 2],
        [5, 1, 2],
        [5, 2, 6],
        [0, 4, 7],
        [0, 7, 3],
        [7, 6, 2],
        [7, 2, 3],
        [0, 1, 5],
        [0, 5, 4],
    ];

    faces
        .iter()
        .map(|&[a, b, c]| Triangle::new(corners[a], corners[b], corners[c]))
        .collect()
}

fn generate_sphere_mesh(radius: f32, segments: u32) -> Mesh {
    let stacks = segments;
    let slices = segments;

    let point = |i: u32, j: u32| {
        let phi = PI * i as f32 / stacks as f32;
        let theta = 2.0 * PI * j as f32 / slices as f32;
        Point3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.cos(),
            radius * phi.sin() * theta.sin(),
        )
    };

    let mut mesh = Mesh::with_capacity((stacks * slices * 2) as usize);
    for i in 0..stacks {
        for j in 0..slices {
            let first = point(i, j);
            let first_next = point(i, j + 1);
            let second = point(i + 1, j);
            let second_next = point(i + 1, j + 1);

            mesh.add_triangle(Triangle::new(first, first_next, second));
            mesh.add_triangle(Triangle::new(second, first_next, second_next));
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::volume::signed_volume_mm3;

    #[test]
    fn test_cube_is_outward_wound() {
        let mesh = generate_cube_mesh(Vector3::new(10.0, 10.0, 10.0), false);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(signed_volume_mm3(&mesh) > 0.0);
    }

    #[test]
    fn test_centered_cube_bounds() {
        let mesh = generate_cube_mesh(Vector3::new(10.0, 10.0, 10.0), true);
        let bbox = mesh.bounding_box();
        assert_eq!(bbox.min, Point3::new(-5.0, -5.0, -5.0));
        assert_eq!(bbox.max, Point3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn test_sphere_is_consistently_wound() {
        let mesh = generate_sphere_mesh(5.0, 32);
        assert_eq!(mesh.triangle_count(), 32 * 32 * 2);
        assert!(signed_volume_mm3(&mesh).abs() > 0.0);
    }
}
