//! Error types for the column balancer
//!
//! The equalizer itself never fails: missing elements measure as zero. These
//! errors cover the host wiring that has to exist before it can run at all.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Error)]
pub enum BalanceError {
    /// No global `window` (e.g. running in a worker)
    #[error("No global window available")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    #[error("Invalid balancer config: {0}")]
    InvalidConfig(String),

    #[error("Invalid layout snapshot: {0}")]
    InvalidSnapshot(String),

    /// `addEventListener` rejected the handler
    #[error("Failed to register '{event}' listener: {message}")]
    ListenerRegistration { event: String, message: String },
}

impl From<BalanceError> for JsValue {
    fn from(err: BalanceError) -> Self {
        log::error!("{}", err);
        JsValue::from_str(&err.to_string())
    }
}
