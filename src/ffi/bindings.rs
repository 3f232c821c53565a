// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Node.js bindings using napi-rs, for the upload handler

use napi::bindgen_prelude::*;
use napi_derive::napi;

use crate::pricing::RateConfig;
use crate::quote::estimate_with_raw_rates;

/// Quote an uploaded STL buffer; returns the quote as a JSON string.
///
/// Decode failures reject with the decoder's message. Invalid rate overrides
/// never reject; the default rates are used instead.
#[napi]
pub fn quote(buffer: Buffer, rates_json: Option<String>, file_name: Option<String>) -> Result<String> {
    let mut quote = estimate_with_raw_rates(&buffer, rates_json.as_deref())
        .map_err(|e| Error::from_reason(format!("STL error: {}", e)))?;

    if let Some(name) = file_name {
        quote = quote.with_file_name(name);
    }

    serde_json::to_string(&quote).map_err(|e| Error::from_reason(format!("JSON error: {}", e)))
}

/// Default rate table as JSON
#[napi]
pub fn default_rates() -> Result<String> {
    serde_json::to_string(&RateConfig::default())
        .map_err(|e| Error::from_reason(format!("JSON error: {}", e)))
}

/// Get version
#[napi]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
