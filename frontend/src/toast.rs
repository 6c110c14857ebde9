//! Tiny toast / notification helper.
//! Creates a `#toast-root` container once per page and appends toast divs that
//! disappear after a few seconds. Replaces blocking `alert()` calls.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{DEFAULT_TOAST_MS, DIALOG_MODAL_ID, TOAST_ROOT_ID, TOAST_STYLES_ID};
use crate::messages::{Notice, NoticeKind};

pub fn show(notice: &Notice) {
    if let Err(e) = try_show(notice) {
        // Last resort so the message is never lost.
        web_sys::console::error_2(&JsValue::from_str(&notice.text), &e);
    }
}

fn try_show(notice: &Notice) -> Result<(), JsValue> {
    let document = crate::dom_utils::document()?;
    ensure_styles(&document)?;
    let root = ensure_root(&document)?;

    let toast = document.create_element("div")?;
    toast.set_class_name(match notice.kind {
        NoticeKind::Success => "toast toast-success",
        NoticeKind::Error => "toast toast-error",
    });
    toast.set_attribute("role", if notice.kind == NoticeKind::Error { "alert" } else { "status" })?;
    toast.set_text_content(Some(&notice.text));

    // Prepend so newest appears on top.
    root.prepend_with_node_1(&toast)?;

    Timeout::new(DEFAULT_TOAST_MS, move || toast.remove()).forget();
    Ok(())
}

fn ensure_root(document: &Document) -> Result<Element, JsValue> {
    if let Some(el) = document.get_element_by_id(TOAST_ROOT_ID) {
        return Ok(el);
    }
    let root = document.create_element("div")?;
    root.set_id(TOAST_ROOT_ID);
    root.set_class_name("toast-root");
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(&root)?;
    Ok(root)
}

/// Inject the toast and dialog styles once per page.
pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(TOAST_STYLES_ID).is_some() {
        return Ok(());
    }

    let css = format!(
        "
.toast-root{{position:fixed;top:16px;right:16px;display:flex;flex-direction:column;gap:8px;z-index:9999;font-family:inherit}}
.toast{{padding:10px 16px;border-radius:4px;color:#fff;box-shadow:0 2px 4px rgba(0,0,0,.1);opacity:0;animation:toast-in .2s forwards;white-space:pre-line}}
.toast-success{{background:#16a34a}}
.toast-error{{background:#dc2626}}
#{modal}.hidden{{display:none}}
#{modal}{{position:fixed;inset:0;background:rgba(0,0,0,.4);display:flex;align-items:center;justify-content:center;z-index:9998}}
#{modal} .modal-content{{background:#fff;color:#111;padding:20px;border-radius:8px;min-width:280px;display:flex;flex-direction:column;gap:12px}}
#{modal} .dialog-actions{{display:flex;justify-content:flex-end;gap:8px}}
@keyframes toast-in{{to{{opacity:1}}}}
",
        modal = DIALOG_MODAL_ID
    );

    let style = document.create_element("style")?;
    style.set_id(TOAST_STYLES_ID);
    style.set_text_content(Some(&css));
    // Append to <head>
    if let Some(head) = document.head() {
        head.append_child(&style)?;
    } else if let Some(body) = document.body() {
        body.append_child(&style)?;
    }
    Ok(())
}
