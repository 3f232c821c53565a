// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! STL importer

use super::{decode_ascii, decode_binary, detect_format, StlFormat};
use crate::error::StlResult;
use crate::geometry::Mesh;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Detect the storage format of a raw buffer and decode it
pub fn decode_stl(bytes: &[u8]) -> StlResult<(StlFormat, Mesh)> {
    let format = detect_format(bytes);
    debug!(%format, len = bytes.len(), "detected STL format");

    let mesh = match format {
        StlFormat::Binary => decode_binary(bytes)?,
        StlFormat::Ascii => decode_ascii(bytes),
    };
    Ok((format, mesh))
}

/// Read an STL file from disk and decode it
pub fn import_stl_file(path: impl AsRef<Path>) -> Result<(StlFormat, Mesh)> {
    let path = path.as_ref();
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read STL file: {}", path.display()))?;

    decode_stl(&bytes).with_context(|| format!("Failed to decode STL file: {}", path.display()))
}
