//! Column balancing exports
//!
//! `equalizeColumnHeights` is safe to call any number of times: once the
//! container covers its columns, further calls leave it alone.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::helpers::{deserialize_or_default, serialize, snapshot_from_js};
use crate::config::BalancerConfig;
use crate::dom::{current_document, equalize_document, DomBox};
use crate::error::BalanceError;
use crate::layout::document_bottom_of;

/// Bottom edge of `element` in document coordinates
#[wasm_bindgen(js_name = documentBottomOf)]
pub fn document_bottom(element: &HtmlElement) -> i32 {
    document_bottom_of(&DomBox::new(element.clone()))
}

/// Balance the configured columns in the current document
///
/// `config` may be omitted to use the homepage defaults.
#[wasm_bindgen(js_name = equalizeColumnHeights)]
pub fn equalize_column_heights(config: JsValue) -> Result<JsValue, JsValue> {
    let config: BalancerConfig = deserialize_or_default(config, "Failed to deserialize config")?;
    let document = current_document()?;

    let equalization = equalize_document(&document, &config);
    serialize(&equalization, "Failed to serialize equalization")
}

/// Run the equalizer against a layout snapshot instead of the live DOM
///
/// `snapshot` is a JSON string or an object of the form
/// `{ nodes: [{ id, offsetHeight, offsetTop, parent }] }`.
#[wasm_bindgen(js_name = planEqualization)]
pub fn plan_equalization(
    snapshot: JsValue,
    container_id: &str,
    column_ids: JsValue,
) -> Result<JsValue, JsValue> {
    let mut snapshot = snapshot_from_js(snapshot)?;
    let column_ids: Vec<String> = serde_wasm_bindgen::from_value(column_ids)
        .map_err(|e| BalanceError::InvalidConfig(format!("columnIds: {}", e)))?;

    let equalization = snapshot.equalize(container_id, column_ids.as_slice());
    serialize(&equalization, "Failed to serialize equalization")
}

/// Register the balancer on window `load` (and `resize` when enabled)
///
/// Runs immediately as well when the document has already finished loading.
#[wasm_bindgen(js_name = installColumnBalancer)]
pub fn install_column_balancer(config: JsValue) -> Result<(), JsValue> {
    let config: BalancerConfig = deserialize_or_default(config, "Failed to deserialize config")?;
    let window = web_sys::window().ok_or(BalanceError::NoWindow)?;

    let events = config.trigger_events();
    let handler_config = config.clone();
    let handler = Closure::<dyn FnMut()>::new(move || match current_document() {
        Ok(document) => {
            equalize_document(&document, &handler_config);
        }
        Err(e) => log::error!("Column balancer skipped: {}", e),
    });
    // Ownership passes to the JS side; listeners live as long as the page
    let handler: js_sys::Function = handler.into_js_value().unchecked_into();

    for event in &events {
        window
            .add_event_listener_with_callback(event, &handler)
            .map_err(|e| BalanceError::ListenerRegistration {
                event: event.to_string(),
                message: format!("{:?}", e),
            })?;
    }

    log::info!("Column balancer installed for '{}' on {:?}", config.container_id, events);

    let document = window.document().ok_or(BalanceError::NoDocument)?;
    if document.ready_state() == "complete" {
        equalize_document(&document, &config);
    }

    Ok(())
}
