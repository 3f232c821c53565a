// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Binary STL decoder
//!
//! ```text
//! UINT8[80]    header (ignored)
//! UINT32       triangle count
//! foreach triangle
//!     REAL32[3] normal (ignored)
//!     REAL32[3] vertex 1
//!     REAL32[3] vertex 2
//!     REAL32[3] vertex 3
//!     UINT16    attribute byte count (ignored)
//! ```

use super::detect::{binary_len, declared_triangle_count, PREAMBLE_LEN, RECORD_LEN};
use crate::error::{StlError, StlResult};
use crate::geometry::{Mesh, Triangle, Vertex};
use tracing::debug;

/// Offset of the first vertex inside a record, after the normal
const VERTICES_OFFSET: usize = 12;

/// Decode a buffer laid out as binary STL.
///
/// Bytes after the last declared record are ignored.
pub fn decode_binary(bytes: &[u8]) -> StlResult<Mesh> {
    let declared =
        declared_triangle_count(bytes).ok_or(StlError::TruncatedHeader { len: bytes.len() })?;

    let expected_len = binary_len(declared);
    if (bytes.len() as u64) < expected_len {
        return Err(StlError::TruncatedBinary {
            declared,
            expected_len,
            actual_len: bytes.len(),
        });
    }

    let records = &bytes[PREAMBLE_LEN..];
    let mesh: Mesh = records
        .chunks_exact(RECORD_LEN)
        .take(declared as usize)
        .map(read_record)
        .collect();

    debug!(
        triangles = mesh.triangle_count(),
        trailing_bytes = bytes.len() as u64 - expected_len,
        "decoded binary STL"
    );

    Ok(mesh)
}

fn read_record(record: &[u8]) -> Triangle {
    let vertex = |index: usize| {
        let start = VERTICES_OFFSET + index * 12;
        read_vertex(&record[start..start + 12])
    };
    Triangle::new(vertex(0), vertex(1), vertex(2))
}

/// Read a vertex from 12 bytes (3 little-endian f32s)
fn read_vertex(buf: &[u8]) -> Vertex {
    let coord = |i: usize| f32::from_le_bytes([buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]);
    Vertex::new(coord(0), coord(4), coord(8))
}
