//! Column balancer WASM API
//!
//! JavaScript-facing exports. The layout work lives in `crate::layout`; this
//! module only converts values across the boundary and wires up events.

pub mod helpers;
pub mod balance;

pub use balance::{document_bottom, equalize_column_heights, install_column_balancer, plan_equalization};
