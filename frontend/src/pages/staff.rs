// frontend/src/pages/staff.rs
//
// Staff dashboard: add-slot form, overview of every slot, and reports.

use wasm_bindgen::JsValue;
use web_sys::{Document, MouseEvent};

use super::PageView;
use crate::constants::*;
use crate::dom_utils;
use crate::messages::Message;
use crate::models::SlotForm;
use crate::state::dispatch_global_message;

pub struct SlotFormView;

impl PageView for SlotFormView {
    fn name(&self) -> &'static str {
        "add-slot"
    }

    fn required_elements(&self) -> &'static [&'static str] {
        &[ADD_SLOT_BUTTON_ID]
    }

    fn mount(&self, document: &Document) -> Result<(), JsValue> {
        let btn = document
            .get_element_by_id(ADD_SLOT_BUTTON_ID)
            .ok_or_else(|| JsValue::from_str("add-slot button missing"))?;
        let doc = document.clone();
        dom_utils::on_click(&btn, move |e: MouseEvent| {
            e.prevent_default();
            dispatch_global_message(Message::SubmitSlot(read_slot_form(&doc)));
        })
    }
}

fn read_slot_form(document: &Document) -> SlotForm {
    let value = |id| dom_utils::field_value_or_empty(document, id);
    SlotForm {
        date_time: value(SLOT_DATETIME_ID),
        capacity: value(SLOT_CAPACITY_ID),
        area: value(SLOT_AREA_ID),
        price_per_person: value(SLOT_PRICE_ID),
        features: value(SLOT_FEATURES_ID),
    }
}

pub struct AllSlotsView;

impl PageView for AllSlotsView {
    fn name(&self) -> &'static str {
        "all-slots"
    }

    fn required_elements(&self) -> &'static [&'static str] {
        &[ALL_SLOTS_CONTAINER_ID]
    }

    fn mount(&self, _document: &Document) -> Result<(), JsValue> {
        dispatch_global_message(Message::LoadAllSlots);
        Ok(())
    }
}

/// Daily / weekly report buttons writing into one output element. Either
/// button may be missing.
pub struct ReportsView;

impl PageView for ReportsView {
    fn name(&self) -> &'static str {
        "reports"
    }

    fn required_elements(&self) -> &'static [&'static str] {
        &[REPORT_OUTPUT_ID]
    }

    fn mount(&self, document: &Document) -> Result<(), JsValue> {
        if let Some(btn) = document.get_element_by_id(DAILY_REPORT_BUTTON_ID) {
            let doc = document.clone();
            dom_utils::on_click(&btn, move |e: MouseEvent| {
                e.prevent_default();
                dispatch_global_message(Message::RequestDailyReport {
                    date: dom_utils::field_value(&doc, REPORT_DATE_ID),
                });
            })?;
        }
        if let Some(btn) = document.get_element_by_id(WEEKLY_REPORT_BUTTON_ID) {
            dom_utils::on_click(&btn, |e: MouseEvent| {
                e.prevent_default();
                dispatch_global_message(Message::RequestWeeklyReport);
            })?;
        }
        Ok(())
    }
}
