// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! STL writers
//!
//! Binary output always has a zeroed header, face normals recomputed from
//! the winding order and a zero attribute field, so re-encoding a decoded
//! mesh is byte-identical. ASCII output prints coordinates with the shortest
//! representation that reads back to the same `f32`.

use crate::geometry::Mesh;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use stl_io::{Normal, Triangle as StlTriangle, Vertex as StlVertex};

fn to_stl_triangles(mesh: &Mesh) -> Vec<StlTriangle> {
    mesh.triangles
        .iter()
        .map(|tri| {
            let normal = tri.face_normal();
            let [v0, v1, v2] = tri.vertices;

            StlTriangle {
                normal: Normal::new([normal.x, normal.y, normal.z]),
                vertices: [
                    StlVertex::new([v0.x, v0.y, v0.z]),
                    StlVertex::new([v1.x, v1.y, v1.z]),
                    StlVertex::new([v2.x, v2.y, v2.z]),
                ],
            }
        })
        .collect()
}

/// Write a mesh as binary STL to any writer
pub fn write_binary<W: Write>(mesh: &Mesh, writer: &mut W) -> Result<()> {
    let triangles = to_stl_triangles(mesh);
    stl_io::write_stl(writer, triangles.iter()).context("Failed to write binary STL")
}

/// Encode a mesh as binary STL bytes
pub fn encode_binary(mesh: &Mesh) -> Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(super::detect::binary_len(mesh.triangle_count() as u32) as usize);
    write_binary(mesh, &mut buffer)?;
    Ok(buffer)
}

/// Write a mesh as ASCII STL to any writer
pub fn write_ascii<W: Write>(mesh: &Mesh, name: &str, writer: &mut W) -> Result<()> {
    writeln!(writer, "solid {}", name)?;
    for tri in &mesh.triangles {
        let n = tri.face_normal();
        writeln!(writer, "  facet normal {} {} {}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in &tri.vertices {
            writeln!(writer, "      vertex {} {} {}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid {}", name)?;
    Ok(())
}

/// Encode a mesh as ASCII STL text
pub fn encode_ascii(mesh: &Mesh, name: &str) -> Result<String> {
    let mut buffer = Vec::new();
    write_ascii(mesh, name, &mut buffer)?;
    String::from_utf8(buffer).context("ASCII STL output was not UTF-8")
}

/// Export a mesh to a binary STL file
pub fn export_stl(mesh: &Mesh, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create STL file: {}", path.display()))?;

    let mut writer = BufWriter::new(file);
    write_binary(mesh, &mut writer)?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush STL file: {}", path.display()))
}
