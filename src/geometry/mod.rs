// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - mesh representation, volume and analytics

mod analytics;
mod bbox;
mod mesh;
mod primitives;
pub mod volume;

pub use analytics::{analyze, MeshStats};
pub use bbox::BoundingBox;
pub use mesh::{Mesh, Triangle, Vertex};
pub use primitives::Primitive;
pub use volume::{signed_volume_mm3, volume_cm3, volume_mm3};
