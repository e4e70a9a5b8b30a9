//! DOM adapter for the equalizer
//!
//! Wraps live `HtmlElement`s as layout boxes. Elements that are absent from
//! the document become empty boxes: they measure as zero and ignore writes.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config::BalancerConfig;
use crate::error::BalanceError;
use crate::layout::{equalize_column_heights, Equalization, HeightTarget, LayoutBox, Px};

#[derive(Debug, Clone)]
pub struct DomBox(Option<HtmlElement>);

impl DomBox {
    pub fn new(element: HtmlElement) -> Self {
        DomBox(Some(element))
    }

    /// Look up `id` in `document`
    pub fn by_id(document: &Document, id: &str) -> Self {
        let element = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        if element.is_none() {
            log::warn!("Element '{}' not found, measuring as zero", id);
        }

        DomBox(element)
    }

    pub fn element(&self) -> Option<&HtmlElement> {
        self.0.as_ref()
    }
}

impl LayoutBox for DomBox {
    fn offset_height(&self) -> Px {
        self.0.as_ref().map_or(0, |el| el.offset_height())
    }

    fn offset_top(&self) -> Px {
        self.0.as_ref().map_or(0, |el| el.offset_top())
    }

    fn offset_parent(&self) -> Option<Self> {
        self.0
            .as_ref()?
            .offset_parent()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(DomBox::new)
    }
}

impl HeightTarget for DomBox {
    fn set_height(&mut self, height: Px) -> bool {
        let Some(element) = &self.0 else {
            return false;
        };

        match element.style().set_property("height", &format!("{}px", height)) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to set container height: {:?}", e);
                false
            }
        }
    }
}

/// The document of the global window
pub fn current_document() -> Result<Document, BalanceError> {
    web_sys::window()
        .ok_or(BalanceError::NoWindow)?
        .document()
        .ok_or(BalanceError::NoDocument)
}

/// Resolve the configured ids in `document` and balance the columns
pub fn equalize_document(document: &Document, config: &BalancerConfig) -> Equalization {
    let mut container = DomBox::by_id(document, &config.container_id);
    let columns: Vec<DomBox> = config
        .column_ids
        .iter()
        .map(|id| DomBox::by_id(document, id))
        .collect();

    equalize_column_heights(&mut container, &columns)
}
