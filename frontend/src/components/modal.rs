//! The backdrop + content pair that hosts the party-size and cancel dialogs.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils;

const CONTENT_CLASS: &str = "modal-content";

/// Handle to a modal mounted under `<body>`. Mounting is idempotent: the
/// same id always yields the same elements.
#[derive(Debug, Clone)]
pub struct Modal {
    backdrop: Element,
    content: Element,
}

impl Modal {
    /// Find the modal with `id`, creating it hidden if this page has none yet.
    pub fn mount(document: &Document, id: &str) -> Result<Self, JsValue> {
        let backdrop = match document.get_element_by_id(id) {
            Some(el) => el,
            None => {
                let el = document.create_element("div")?;
                el.set_id(id);
                el.set_class_name("modal");
                el.set_attribute("role", "dialog")?;
                el.set_attribute("aria-modal", "true")?;
                dom_utils::hide(&el);
                document
                    .body()
                    .ok_or_else(|| JsValue::from_str("document has no body"))?
                    .append_child(&el)?;
                el
            }
        };

        let content = match backdrop.query_selector(&format!(".{}", CONTENT_CLASS))? {
            Some(el) => el,
            None => {
                let el = document.create_element("div")?;
                el.set_class_name(CONTENT_CLASS);
                backdrop.append_child(&el)?;
                el
            }
        };

        Ok(Self { backdrop, content })
    }

    pub fn content(&self) -> &Element {
        &self.content
    }

    pub fn open_with(&self, html: &str) {
        self.content.set_inner_html(html);
        dom_utils::show(&self.backdrop);
    }

    /// Hide and empty the modal.
    pub fn close(&self) {
        dom_utils::hide(&self.backdrop);
        self.content.set_inner_html("");
    }
}
