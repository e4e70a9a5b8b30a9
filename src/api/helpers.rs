//! Shared helpers for the WASM API
//!
//! Conversions between `JsValue` and the crate's serde types, with errors
//! logged and mapped to `BalanceError`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::BalanceError;
use crate::layout::LayoutSnapshot;

/// Deserialize an optional value from JavaScript, falling back to `T::default()`
/// when the caller passed `undefined` or `null`
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, BalanceError> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }

    serde_wasm_bindgen::from_value(value)
        .map_err(|e| BalanceError::InvalidConfig(format!("{}: {}", error_context, e)))
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Accept a snapshot either as a JSON string or as a plain JS object
pub fn snapshot_from_js(value: JsValue) -> Result<LayoutSnapshot, BalanceError> {
    match value.as_string() {
        Some(json) => LayoutSnapshot::from_json(&json),
        None => serde_wasm_bindgen::from_value(value)
            .map_err(|e| BalanceError::InvalidSnapshot(e.to_string())),
    }
}
