// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - STL detection, decoding and export

mod ascii;
mod binary;
pub mod detect;
mod exporter;
mod importer;

pub use ascii::{decode_ascii, scan_vertices, MalformedVertex, VertexScan};
pub use binary::decode_binary;
pub use detect::{detect_format, StlFormat};
pub use exporter::{encode_ascii, encode_binary, export_stl, write_ascii, write_binary};
pub use importer::{decode_stl, import_stl_file};
