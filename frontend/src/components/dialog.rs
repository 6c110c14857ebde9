//! Non-blocking replacements for `prompt()` and `confirm()`.
//!
//! Both open the shared modal, return a future, and keep the same answer
//! contract as the browser built-ins: a prompt yields `Some(text)` or `None`
//! when dismissed, a confirm yields `true`/`false`. Enter accepts, Escape
//! dismisses. Opening a dialog while another is open dismisses the older one.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlElement, HtmlInputElement, KeyboardEvent, MouseEvent};

use super::modal::Modal;
use crate::constants::DIALOG_MODAL_ID;
use crate::dom_utils;
use crate::utils::escape_html;

type Settle = Rc<dyn Fn(JsValue)>;

thread_local! {
    // Dismisses the dialog currently on screen, if any.
    static ACTIVE_DISMISS: RefCell<Option<Settle>> = RefCell::new(None);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogKind {
    Prompt,
    Confirm,
}

impl DialogKind {
    fn dismissed(self) -> JsValue {
        match self {
            DialogKind::Prompt => JsValue::NULL,
            DialogKind::Confirm => JsValue::FALSE,
        }
    }
}

/// Ask for a line of text. `None` when the user cancels.
pub async fn prompt(message: &str) -> Result<Option<String>, JsValue> {
    let answer = open(message, DialogKind::Prompt).await?;
    Ok(answer.as_string())
}

/// Ask for a yes/no decision.
pub async fn confirm(message: &str) -> Result<bool, JsValue> {
    let answer = open(message, DialogKind::Confirm).await?;
    Ok(answer.as_bool().unwrap_or(false))
}

/// Inner markup of the dialog.
fn dialog_markup(message: &str, with_input: bool) -> String {
    let input = if with_input {
        r#"<input type="text" class="dialog-input" autocomplete="off">"#
    } else {
        ""
    };
    format!(
        r#"<p class="dialog-message">{}</p>{}<div class="dialog-actions"><button type="button" class="btn ghost" data-dialog="cancel">Cancel</button><button type="button" class="btn" data-dialog="ok">OK</button></div>"#,
        escape_html(message),
        input
    )
}

fn required(content: &Element, selector: &str) -> Result<Element, JsValue> {
    content
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("dialog is missing {}", selector)))
}

async fn open(message: &str, kind: DialogKind) -> Result<JsValue, JsValue> {
    // Only one dialog at a time.
    if let Some(dismiss) = ACTIVE_DISMISS.with(|d| d.borrow_mut().take()) {
        dismiss(JsValue::UNDEFINED);
    }

    let document = dom_utils::document()?;
    crate::toast::ensure_styles(&document)?;
    let modal = Modal::mount(&document, DIALOG_MODAL_ID)?;
    modal.open_with(&dialog_markup(message, kind == DialogKind::Prompt));
    let content = modal.content().clone();

    let ok_btn = required(&content, "[data-dialog='ok']")?;
    let cancel_btn = required(&content, "[data-dialog='cancel']")?;
    let input: Option<HtmlInputElement> = match kind {
        DialogKind::Prompt => Some(required(&content, "input")?.dyn_into()?),
        DialogKind::Confirm => None,
    };

    // The promise's resolve function, taken on first use so later clicks
    // are no-ops.
    let resolver: Rc<RefCell<Option<Function>>> = Rc::new(RefCell::new(None));
    let promise = {
        let resolver = resolver.clone();
        Promise::new(&mut move |resolve, _reject| {
            *resolver.borrow_mut() = Some(resolve);
        })
    };
    let settle: Settle = {
        let resolver = resolver.clone();
        Rc::new(move |value: JsValue| {
            if let Some(resolve) = resolver.borrow_mut().take() {
                let _ = resolve.call1(&JsValue::NULL, &value);
            }
        })
    };
    let accepted = {
        let input = input.clone();
        move || match &input {
            Some(input) => JsValue::from_str(&input.value()),
            None => JsValue::TRUE,
        }
    };

    let dismiss: Settle = {
        let settle = settle.clone();
        Rc::new(move |_: JsValue| settle(kind.dismissed()))
    };
    ACTIVE_DISMISS.with(|d| *d.borrow_mut() = Some(dismiss.clone()));

    let on_ok = {
        let settle = settle.clone();
        let accepted = accepted.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| settle(accepted()))
    };
    let on_cancel = {
        let dismiss = dismiss.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| dismiss(JsValue::UNDEFINED))
    };
    let on_key = {
        let settle = settle.clone();
        let dismiss = dismiss.clone();
        Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| match event.key().as_str() {
            "Enter" => {
                event.prevent_default();
                settle(accepted());
            }
            "Escape" => {
                event.prevent_default();
                dismiss(JsValue::UNDEFINED);
            }
            _ => {}
        })
    };

    ok_btn.add_event_listener_with_callback("click", on_ok.as_ref().unchecked_ref())?;
    cancel_btn.add_event_listener_with_callback("click", on_cancel.as_ref().unchecked_ref())?;
    content.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;

    let focus_target: Option<HtmlElement> = match &input {
        Some(input) => Some(input.clone().unchecked_into()),
        None => ok_btn.clone().dyn_into().ok(),
    };
    if let Some(el) = focus_target {
        let _ = el.focus();
    }

    let answer = JsFuture::from(promise).await;

    // Tear down: the closures are dropped at the end of this scope.
    let _ = content.remove_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
    ACTIVE_DISMISS.with(|d| {
        let mut active = d.borrow_mut();
        if active.as_ref().map_or(false, |a| Rc::ptr_eq(a, &dismiss)) {
            *active = None;
            modal.close();
        }
    });

    answer
}
