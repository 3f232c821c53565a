// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! WASM bindings using wasm-bindgen, for in-browser previews

use crate::pricing::RateConfig;
use crate::quote::estimate_with_raw_rates;
use wasm_bindgen::prelude::*;

/// Quote raw STL bytes; returns the quote as a JSON string.
///
/// `rates_json` is the stored override object, if any. Invalid overrides
/// fall back to the default rates.
#[wasm_bindgen]
pub fn quote_stl(bytes: &[u8], rates_json: Option<String>) -> Result<String, JsValue> {
    let quote = estimate_with_raw_rates(bytes, rates_json.as_deref())
        .map_err(|e| JsValue::from_str(&format!("STL error: {}", e)))?;

    serde_json::to_string(&quote)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {}", e)))
}

/// Default rate table as JSON
#[wasm_bindgen]
pub fn default_rates() -> Result<String, JsValue> {
    serde_json::to_string(&RateConfig::default())
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {}", e)))
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
