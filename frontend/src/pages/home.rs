// frontend/src/pages/home.rs
//
// Home page: slot search with booking, the review list and the review form.

use wasm_bindgen::JsValue;
use web_sys::{Document, MouseEvent};

use super::PageView;
use crate::constants::*;
use crate::dom_utils;
use crate::messages::Message;
use crate::state::dispatch_global_message;

/// Search form + result cards. Book buttons are picked up by one delegated
/// listener on the results container.
pub struct SlotSearchView;

impl PageView for SlotSearchView {
    fn name(&self) -> &'static str {
        "slot-search"
    }

    fn required_elements(&self) -> &'static [&'static str] {
        &[SLOTS_CONTAINER_ID]
    }

    fn mount(&self, document: &Document) -> Result<(), JsValue> {
        if let Some(btn) = document.get_element_by_id(SEARCH_BUTTON_ID) {
            dom_utils::on_click(&btn, |e: MouseEvent| {
                e.prevent_default();
                dispatch_global_message(Message::LoadSlots);
            })?;
        }

        let container = document
            .get_element_by_id(SLOTS_CONTAINER_ID)
            .ok_or_else(|| JsValue::from_str("slots container missing"))?;
        dom_utils::on_delegated_click(&container, BOOK_ATTR, |slot_id| {
            dispatch_global_message(Message::BookClicked(slot_id));
        })?;

        dispatch_global_message(Message::LoadSlots);
        Ok(())
    }
}

pub struct ReviewListView;

impl PageView for ReviewListView {
    fn name(&self) -> &'static str {
        "review-list"
    }

    fn required_elements(&self) -> &'static [&'static str] {
        &[REVIEWS_CONTAINER_ID]
    }

    fn mount(&self, _document: &Document) -> Result<(), JsValue> {
        dispatch_global_message(Message::LoadReviews);
        Ok(())
    }
}

/// Rating + comment form. Works without the review list on the same page;
/// the reload after submitting is then simply not rendered.
pub struct ReviewFormView;

impl PageView for ReviewFormView {
    fn name(&self) -> &'static str {
        "review-form"
    }

    fn required_elements(&self) -> &'static [&'static str] {
        &[REVIEW_BUTTON_ID]
    }

    fn mount(&self, document: &Document) -> Result<(), JsValue> {
        let btn = document
            .get_element_by_id(REVIEW_BUTTON_ID)
            .ok_or_else(|| JsValue::from_str("review button missing"))?;
        let doc = document.clone();
        dom_utils::on_click(&btn, move |e: MouseEvent| {
            e.prevent_default();
            dispatch_global_message(Message::SubmitReview {
                rating: dom_utils::field_value_or_empty(&doc, REVIEW_RATING_ID),
                comment: dom_utils::field_value_or_empty(&doc, REVIEW_COMMENT_ID),
            });
        })
    }
}
