// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry analytics and statistics

use super::{volume, BoundingBox, Mesh, Triangle};
use serde::{Deserialize, Serialize};

/// mm² per cm²
const MM2_PER_CM2: f64 = 100.0;

/// Geometry statistics for a decoded mesh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshStats {
    pub triangle_count: usize,
    /// Enclosed volume in cm³
    pub volume_cm3: f64,
    /// Total surface area in cm²
    pub surface_area_cm2: f64,
    /// Bounding box in mm; `None` for an empty mesh
    pub bbox: Option<BoundingBox>,
}

impl MeshStats {
    /// Create empty stats
    pub fn empty() -> Self {
        Self {
            triangle_count: 0,
            volume_cm3: 0.0,
            surface_area_cm2: 0.0,
            bbox: None,
        }
    }
}

/// Analyze mesh geometry and compute statistics
pub fn analyze(mesh: &Mesh) -> MeshStats {
    if mesh.is_empty() {
        return MeshStats::empty();
    }

    let surface_area_mm2: f64 = mesh.triangles.iter().map(Triangle::area).sum();

    MeshStats {
        triangle_count: mesh.triangle_count(),
        volume_cm3: volume::volume_cm3(mesh),
        surface_area_cm2: surface_area_mm2 / MM2_PER_CM2,
        bbox: Some(mesh.bounding_box()),
    }
}
