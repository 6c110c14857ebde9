// frontend/src/pages/my_reservations.rs
//
// The signed-in user's reservations with a cancel button on each card.

use wasm_bindgen::JsValue;
use web_sys::Document;

use super::PageView;
use crate::constants::{CANCEL_ATTR, MY_RESERVATIONS_CONTAINER_ID};
use crate::dom_utils;
use crate::messages::Message;
use crate::state::dispatch_global_message;

pub struct MyReservationsView;

impl PageView for MyReservationsView {
    fn name(&self) -> &'static str {
        "my-reservations"
    }

    fn required_elements(&self) -> &'static [&'static str] {
        &[MY_RESERVATIONS_CONTAINER_ID]
    }

    fn mount(&self, document: &Document) -> Result<(), JsValue> {
        let container = document
            .get_element_by_id(MY_RESERVATIONS_CONTAINER_ID)
            .ok_or_else(|| JsValue::from_str("reservations container missing"))?;
        dom_utils::on_delegated_click(&container, CANCEL_ATTR, |reservation_id| {
            dispatch_global_message(Message::CancelClicked(reservation_id));
        })?;

        dispatch_global_message(Message::LoadMyReservations);
        Ok(())
    }
}
