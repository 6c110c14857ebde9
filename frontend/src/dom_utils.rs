//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Pages and command executors go through these wrappers instead of
//! repeating `get_element_by_id` + `dyn_into` chains everywhere.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent,
};

/// The page's document.
pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document on window"))
}

/// Remove the `hidden` class so the element becomes visible.
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1("hidden");
    let _ = el.class_list().add_1("visible");
}

/// Hide the element by toggling CSS classes.
pub fn hide(el: &Element) {
    let _ = el.class_list().remove_1("visible");
    let _ = el.class_list().add_1("hidden");
}

/// Current value of an `<input>`, `<select>` or `<textarea>` by id.
/// `None` when the element is absent or not a form control.
pub fn field_value(document: &Document, id: &str) -> Option<String> {
    let el = document.get_element_by_id(id)?;
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    el.dyn_ref::<HtmlTextAreaElement>().map(|t| t.value())
}

/// Like [`field_value`] but an absent control reads as an empty string.
pub fn field_value_or_empty(document: &Document, id: &str) -> String {
    field_value(document, id).unwrap_or_default()
}

pub fn set_field_value(document: &Document, id: &str, value: &str) {
    let Some(el) = document.get_element_by_id(id) else {
        return;
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

/// Replace an element's children with `html`. Returns false when the element
/// is not on this page.
pub fn set_inner_html(document: &Document, id: &str, html: &str) -> bool {
    match document.get_element_by_id(id) {
        Some(el) => {
            el.set_inner_html(html);
            true
        }
        None => false,
    }
}

/// Replace an element's text content. Returns false when the element is not
/// on this page.
pub fn set_text(document: &Document, id: &str, text: &str) -> bool {
    match document.get_element_by_id(id) {
        Some(el) => {
            el.set_text_content(Some(text));
            true
        }
        None => false,
    }
}

/// Attach a click handler for the lifetime of the page.
pub fn on_click<F>(el: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let cb = Closure::<dyn FnMut(MouseEvent)>::new(handler);
    el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget(); // lives as long as the page
    Ok(())
}

/// Resolve the id carried in `attr` by the clicked element (or its closest
/// ancestor inside `container`).
pub fn delegated_id(container: &Element, event: &Event, attr: &str) -> Option<u32> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let hit = target.closest(&format!("[{}]", attr)).ok()??;
    if !container.contains(Some(hit.as_ref())) {
        return None;
    }
    hit.get_attribute(attr)?.trim().parse().ok()
}

/// Listen for clicks on any descendant of `container` carrying `attr` and
/// pass the parsed id to `handler`. One listener serves every re-render,
/// since re-rendering replaces the children, not the container.
pub fn on_delegated_click<F>(container: &Element, attr: &'static str, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(u32) + 'static,
{
    let owner = container.clone();
    on_click(container, move |event: MouseEvent| {
        if let Some(id) = delegated_id(&owner, &event, attr) {
            handler(id);
        }
    })
}
